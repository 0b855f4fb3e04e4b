//! REST API error types
//!
//! Every error renders as `{"error": <message>}`, with an optional `details`
//! field for malformed bodies and provider failures.

use relay_auth::AuthError;
use relay_core::CoreError;
use relay_sms::SmsError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const USER_EXISTS: &str = "User already exists";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MALFORMED_BODY: &str = "Malformed JSON body";
pub const SMS_SEND_FAILED: &str = "Failed to send SMS";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required field missing or empty (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Body is not JSON of the expected shape (400)
    #[error("Malformed body: {details} {location}")]
    MalformedBody {
        details: String,
        location: ErrorLocation,
    },

    /// Resource already exists (400)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown email or wrong password (400)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Optional capability missing at runtime (500)
    #[error("Not configured: {message} {location}")]
    NotConfigured {
        message: String,
        location: ErrorLocation,
    },

    /// SMS provider failure (500)
    #[error("SMS provider error: {details} {location}")]
    Provider {
        details: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_body(details: impl Into<String>) -> Self {
        ApiError::MalformedBody {
            details: details.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_configured(message: impl Into<String>) -> Self {
        ApiError::NotConfigured {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. }
            | ApiError::MalformedBody { .. }
            | ApiError::Conflict { .. }
            | ApiError::InvalidCredentials { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotConfigured { .. }
            | ApiError::Provider { .. }
            | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Client mistakes at warn, server-side failures at error
        if status.is_client_error() {
            log::warn!("{}", self);
        } else {
            log::error!("{}", self);
        }

        let body = match self {
            ApiError::Validation { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::NotConfigured { message, .. } => ApiErrorResponse {
                error: message,
                details: None,
            },
            ApiError::MalformedBody { details, .. } => ApiErrorResponse {
                error: MALFORMED_BODY.into(),
                details: Some(details),
            },
            ApiError::InvalidCredentials { .. } => ApiErrorResponse {
                error: INVALID_CREDENTIALS.into(),
                details: None,
            },
            ApiError::Provider { details, .. } => ApiErrorResponse {
                error: SMS_SEND_FAILED.into(),
                details: Some(details),
            },
            ApiError::Internal { message, .. } => ApiErrorResponse {
                error: message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert registry errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::EmailTaken { .. } => ApiError::Conflict {
                message: USER_EXISTS.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::Validation { message, .. } => ApiError::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert hashing and signing errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        // Don't expose hashing or signing details to clients
        log::error!("Auth error [{}]: {}", e.error_code(), e);
        ApiError::Internal {
            message: INTERNAL_ERROR.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert provider errors to API errors
impl From<SmsError> for ApiError {
    #[track_caller]
    fn from(e: SmsError) -> Self {
        ApiError::Provider {
            details: e.details().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
