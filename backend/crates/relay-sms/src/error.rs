use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while sending an SMS
#[derive(Error, Debug)]
pub enum SmsError {
    #[error("HTTP client setup failed: {message} {location}")]
    ClientBuild {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Provider rejected message (HTTP {status}, code {code:?}): {message} {location}")]
    Provider {
        status: u16,
        code: Option<i64>,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected provider response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl SmsError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        SmsError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Provider-facing message without source locations, safe to return to callers
    pub fn details(&self) -> &str {
        match self {
            SmsError::ClientBuild { message, .. }
            | SmsError::Http { message, .. }
            | SmsError::Provider { message, .. }
            | SmsError::Decode { message, .. } => message,
        }
    }
}

impl From<reqwest::Error> for SmsError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SmsError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, SmsError>;
