// # HTTP Update Service
//
// Triggers the remote record update with an authenticated JSON POST. The
// response is returned as-is; this layer never branches on its status.

use async_trait::async_trait;
use ddns_update_core::traits::{UpdateRequest, UpdateService};
use ddns_update_core::{Error, HttpResponse, Result};
use reqwest::header::{HeaderMap, HeaderValue};

use crate::transport;

/// Header carrying the shared update secret
pub const TOKEN_HEADER: &str = "My-Secret-Token";

/// Update service backed by the authenticated POST endpoint
pub struct HttpUpdateService {
    endpoint: String,
    auth_token: String,
}

// The token never appears in Debug output.
impl std::fmt::Debug for HttpUpdateService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpUpdateService")
            .field("endpoint", &self.endpoint)
            .field("auth_token", &"<REDACTED>")
            .finish()
    }
}

impl HttpUpdateService {
    /// Create a service for the given update endpoint and secret
    pub fn new(endpoint: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            auth_token: auth_token.into(),
        }
    }
}

#[async_trait]
impl UpdateService for HttpUpdateService {
    async fn trigger_update(&self, request: &UpdateRequest) -> Result<HttpResponse> {
        // The error path must not echo the secret.
        let token = HeaderValue::from_str(&self.auth_token).map_err(|_| {
            Error::config("auth token contains characters not allowed in a header value")
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, token);

        transport::post_json(&self.endpoint, headers, request).await
    }
}
