// # IP Source Trait
//
// Defines the interface for observing the caller's current public IP.
//
// ## Implementations
//
// - HTTP echo endpoint: `HttpIpSource` in the `ddns-update-http` crate

use async_trait::async_trait;

/// Trait for observing the current public IP address
///
/// The address is carried as a string and compared by exact string
/// equality against the published record; it is never parsed into a
/// numeric form, so whatever the source returns is what gets compared.
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Observe the current public IP
    ///
    /// Implementations normalize trailing whitespace but perform no
    /// validation beyond that.
    async fn current(&self) -> Result<String, crate::Error>;
}
