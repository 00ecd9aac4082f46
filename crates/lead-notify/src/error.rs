use lead_core::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum NotifyError {
    #[error("Telegram client error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },
    #[error("Telegram request failed: {source} {location}")]
    Request {
        source: reqwest::Error,
        location: ErrorLocation,
    },
    #[error("Telegram API returned {status}: {body} {location}")]
    Status {
        status: u16,
        body: String,
        location: ErrorLocation,
    },
}

impl NotifyError {
    #[track_caller]
    pub fn client<S: Into<String>>(message: S) -> Self {
        Self::Client {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn status(status: u16, body: String) -> Self {
        Self::Status {
            status,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for NotifyError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Request {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type NotifyErrorResult<T> = StdResult<T, NotifyError>;
