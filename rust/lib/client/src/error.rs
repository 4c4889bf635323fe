use std::collections::BTreeMap;

use medadmin_session::SessionError;

/// Message used when the server rejects the session (HTTP 401).
pub const SESSION_EXPIRED: &str = "session expired, please log in again";

/// Message used when the server cannot be reached at all.
pub const CONNECTION_FAILED: &str = "unable to reach the server, check your connection";

/// Field-level validation errors, as returned by the backend:
/// `{"errors": {"serial_number": ["already taken"]}}`.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Client-side API error.
///
/// Every failed call surfaces as one of these. [`ApiError::status`] gives
/// the HTTP status (0 when no response was received).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered 401. The session for the user type has already
    /// been cleared when this is returned.
    #[error("HTTP 401: {message}")]
    Unauthorized { message: String },

    #[error("HTTP {status}: {message}")]
    Server {
        status: u16,
        message: String,
        errors: FieldErrors,
    },

    #[error("network: unable to reach the server ({0})")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),

    #[error("session: {0}")]
    Session(#[from] SessionError),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Unauthorized { .. } => 401,
            ApiError::Server { status, .. } => *status,
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::Session(_) => 0,
        }
    }

    /// Field errors reported by the server, empty for every other kind.
    pub fn field_errors(&self) -> &FieldErrors {
        static EMPTY: FieldErrors = BTreeMap::new();
        match self {
            ApiError::Server { errors, .. } => errors,
            _ => &EMPTY,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}
