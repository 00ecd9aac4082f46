use lead_core::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid {name}: {message} {location}")]
    InvalidVar {
        name: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid_var<S: Into<String>>(name: &'static str, message: S) -> Self {
        Self::InvalidVar {
            name,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
