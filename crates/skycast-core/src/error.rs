//! Shared error type across skycast crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Requested city is not in the catalog.
    NotFound,
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SkycastError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SkycastError {
    /// Display form doubles as the client-visible message for 404 bodies.
    #[error("City {0} not found")]
    CityNotFound(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SkycastError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SkycastError::CityNotFound(_) => ClientCode::NotFound,
            SkycastError::InvalidConfig(_) => ClientCode::BadRequest,
            SkycastError::Internal(_) => ClientCode::Internal,
        }
    }
}
