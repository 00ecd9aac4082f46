use lead_core::Lead;

use serde::Deserialize;

/// Request body for POST /api/lead
///
/// Missing optional fields deserialize to None; missing name or phone is a
/// schema error rejected by the extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct CreateLeadRequest {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub car_model: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<CreateLeadRequest> for Lead {
    fn from(request: CreateLeadRequest) -> Self {
        Lead {
            name: request.name,
            phone: request.phone,
            car_model: request.car_model,
            budget: request.budget,
            email: request.email,
            message: request.message,
        }
    }
}
