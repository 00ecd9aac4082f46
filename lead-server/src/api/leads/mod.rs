pub mod create_lead_request;
pub mod lead_response;
pub mod leads;
