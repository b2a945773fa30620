//! Core traits for the ddns-update client
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`RecordResolver`]: Read the currently published value of a DNS record
//! - [`IpSource`]: Observe the caller's current public IP
//! - [`UpdateService`]: Ask the remote update service to repoint the record

pub mod ip_source;
pub mod record_resolver;
pub mod update_service;

pub use ip_source::IpSource;
pub use record_resolver::RecordResolver;
pub use update_service::{UpdateRequest, UpdateService};
