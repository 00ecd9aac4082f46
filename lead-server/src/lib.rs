pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    leads::{
        create_lead_request::CreateLeadRequest, lead_response::LeadResponse,
        leads::create_lead,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
