// # HTTP Self-IP Source
//
// Observes the caller's public IP by GETting an echo endpoint and trimming
// trailing whitespace off the body. The status is not checked, and the
// result is never validated as a syntactic address.

use async_trait::async_trait;
use ddns_update_core::Result;
use ddns_update_core::traits::IpSource;
use reqwest::header::HeaderMap;

use crate::transport;

/// IP source backed by a plain "what is my IP" HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpIpSource {
    endpoint: String,
}

impl HttpIpSource {
    /// Create a source for the given echo endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<String> {
        let response = transport::get(&self.endpoint, HeaderMap::new(), &[]).await?;

        let ip = response.body.trim_end().to_string();
        tracing::debug!("self-IP endpoint answered {}: {:?}", response.status, ip);
        Ok(ip)
    }
}
