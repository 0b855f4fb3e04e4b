use std::net::SocketAddr;

use error_location::ErrorLocation;
use thiserror::Error;

/// Startup errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server on {addr} stopped with error: {source}")]
    Serve {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
