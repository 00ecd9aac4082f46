//! Lead entity - a contact-form submission from a prospective customer.

use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Collection the persistence layer files leads under.
pub const LEAD_COLLECTION: &str = "lead";

/// A single inquiry captured from the contact form.
///
/// Optional fields stay `None` when the form leaves them blank and serialize
/// as JSON null, so persisted documents always carry the full field set.
/// A lead has no identity of its own; the document store assigns one on
/// insert and it is never written back onto the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
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

impl Lead {
    /// Create a lead with only the required contact fields set.
    pub fn new(name: String, phone: String) -> Self {
        Self {
            name,
            phone,
            car_model: None,
            budget: None,
            email: None,
            message: None,
        }
    }

    /// Check the non-empty invariant on `name` and `phone`.
    /// Whitespace-only values count as empty.
    #[track_caller]
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "name must not be empty".to_string(),
                field: Some("name".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.phone.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "phone must not be empty".to_string(),
                field: Some("phone".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
