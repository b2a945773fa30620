// # Update Service Trait
//
// Defines the interface for asking the remote update service to repoint
// the managed record at the caller's current address.
//
// ## Implementations
//
// - Authenticated HTTP POST: `HttpUpdateService` in the `ddns-update-http` crate

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::http::HttpResponse;

/// Body of the update request
///
/// Field order matters: the service expects
/// `{"zone_id": "<zone>", "record": "<domain>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Zone holding the managed record
    pub zone_id: String,
    /// Record name to repoint
    pub record: String,
}

/// Trait for triggering the remote record update
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait UpdateService: Send + Sync {
    /// Ask the remote service to repoint the record
    ///
    /// The response is returned as-is: the caller prints the body verbatim
    /// and never branches on the status. Only transport failures are errors
    /// at this seam.
    async fn trigger_update(&self, request: &UpdateRequest) -> Result<HttpResponse, crate::Error>;
}
