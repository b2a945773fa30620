// # ddns-update-core
//
// Core library for the ddns-update client.
//
// ## Architecture Overview
//
// This library provides the decision logic for a one-shot dynamic DNS update:
// - **RecordResolver**: Trait for reading the currently published DNS record
// - **IpSource**: Trait for observing the caller's current public IP
// - **UpdateService**: Trait for triggering a remote record update
// - **UpdateEngine**: Orchestrates the resolve → observe → compare → update flow
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Decision logic is separate from transport
// 2. **Stateless**: One run per invocation, nothing carried between runs
// 3. **Library-First**: The whole flow is usable without the binary

pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod traits;

// Re-export core types for convenience
pub use config::Config;
pub use engine::{UpdateEngine, UpdateOutcome};
pub use error::{Error, Result};
pub use http::HttpResponse;
pub use traits::{IpSource, RecordResolver, UpdateRequest, UpdateService};
