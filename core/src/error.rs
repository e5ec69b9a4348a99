//! Error types for the users API client.
//!
//! # Design
//! Every operation fails with a single `RequestProcessingError`: a message
//! naming the operation plus the underlying `Cause`, reachable through
//! `std::error::Error::source`. Nothing here is retried. `ConfigError` is
//! separate because it is raised while building a client, never mid-call.

use thiserror::Error;

/// The one error kind returned by `UsersClient` operations.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RequestProcessingError {
    message: String,
    #[source]
    cause: Cause,
}

impl RequestProcessingError {
    pub fn new(message: impl Into<String>, cause: Cause) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> &Cause {
        &self.cause
    }
}

/// What actually went wrong underneath a `RequestProcessingError`.
#[derive(Debug, Error)]
pub enum Cause {
    /// Connection, DNS, TLS or body-read failure from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A request could not be serialized or a response did not match the
    /// expected JSON shape.
    #[error("JSON processing failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected API base URL.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    #[error("API base URL {0:?} has no host")]
    MissingHost(String),

    #[error("API base URL {0:?} must not carry a path")]
    UnexpectedPath(String),
}
