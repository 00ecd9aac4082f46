use lead_core::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum DbError {
    #[error("{source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },
    #[error("{source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type DbErrorResult<T> = StdResult<T, DbError>;
