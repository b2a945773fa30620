// # Record Resolver Trait
//
// Defines the interface for reading the currently published value of a DNS
// record.
//
// ## Implementations
//
// - DoH JSON: `DohResolver` in the `ddns-update-http` crate

use async_trait::async_trait;

/// Trait for reading the published value of a DNS record
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    /// Resolve the current value of `name` for the given record type
    ///
    /// Returns the data of the first answer, or an empty string when the
    /// name has no answer of that type. An empty result is not an error:
    /// a record that does not exist yet still compares against the observed
    /// IP and so still triggers an update.
    ///
    /// # Parameters
    ///
    /// - `name`: The DNS record name (e.g., "host.example.com")
    /// - `record_type`: The record type string (e.g., "A")
    ///
    /// # Errors
    ///
    /// - [`Error::Resolver`](crate::Error::Resolver) when the resolver
    ///   answers with a non-200 status
    /// - [`Error::Transport`](crate::Error::Transport) when the resolver
    ///   cannot be reached at all
    async fn resolve(&self, name: &str, record_type: &str) -> Result<String, crate::Error>;
}
