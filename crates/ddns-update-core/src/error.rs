//! Error types for the ddns-update client
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for ddns-update operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the ddns-update client
///
/// Every variant is fatal: failures unwind to the caller immediately,
/// with no retry or recovery at any layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (missing token, malformed endpoint)
    #[error("configuration error: {0}")]
    Config(String),

    /// The DoH resolver answered with a non-200 status
    #[error("dns over https query failed: {body}")]
    Resolver {
        /// HTTP status returned by the resolver
        status: u16,
        /// Raw response body, surfaced verbatim as diagnostic context
        body: String,
    },

    /// Network-level failures (DNS resolution, TLS, connection refusal)
    #[error("transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a resolver error from a rejected DoH response
    pub fn resolver(status: u16, body: impl Into<String>) -> Self {
        Self::Resolver {
            status,
            body: body.into(),
        }
    }
}
