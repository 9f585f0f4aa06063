//! Unified SDK error types.

use thiserror::Error;

/// Error returned by every API call.
///
/// There are exactly two kinds: the server answered with a non-2xx status, or
/// no response was received at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GsaError {
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl GsaError {
    /// Upstream HTTP status, absent for transport failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }

    /// Raw response body for HTTP errors, the transport's message otherwise.
    pub fn message(&self) -> &str {
        match self {
            Self::Http { body, .. } => body,
            Self::Transport { message } => message,
        }
    }

    /// 401 or 403, i.e. the caller has to re-authenticate.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }
}

/// Errors raised while building a client.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Client id is not a valid header value: {0:?}")]
    InvalidClientId(String),

    #[error("Failed to build HTTP transport: {0}")]
    Transport(String),

    #[error("No transport configured (enable the `http` feature or inject one)")]
    MissingTransport,

    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}
