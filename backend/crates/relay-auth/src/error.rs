use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password hashing failed: {source} {location}")]
    Hashing {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error("Password hashing task failed: {message} {location}")]
    HashingTask {
        message: String,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code, used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Hashing { .. } => "HASHING_FAILED",
            Self::HashingTask { .. } => "HASHING_TASK_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
