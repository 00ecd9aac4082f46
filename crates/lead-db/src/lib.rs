mod error;
mod store;

pub use error::{DbError, DbErrorResult};
pub use store::DocumentStore;
