//! Plain-data HTTP exchange type shared by the trait seams
//!
//! Carrying a plain struct instead of a transport handle keeps this crate
//! free of HTTP dependencies and lets tests construct responses directly.

/// A completed HTTP exchange, reduced to what callers consume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body decoded as UTF-8
    pub body: String,
}
