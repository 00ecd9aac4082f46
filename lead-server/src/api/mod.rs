pub mod error;
pub mod leads;
