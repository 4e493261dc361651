//! Shared error type across notekeep crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing or empty input.
    Validation,
    /// No note at the requested position.
    NotFound,
    /// Config file rejected at startup.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Validation => "VALIDATION",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NoteError>;

/// Unified error type used by core and server.
///
/// `Display` of the request-path variants is the bare message, since it is
/// what clients see in the `error` field.
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl NoteError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            NoteError::Validation(_) => ClientCode::Validation,
            NoteError::NotFound(_) => ClientCode::NotFound,
            NoteError::InvalidConfig(_) => ClientCode::InvalidConfig,
            NoteError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            NoteError::Internal(_) => ClientCode::Internal,
        }
    }
}
