// # DoH JSON Record Resolver
//
// Reads the published value of a DNS record through the DoH JSON
// convention: GET with `name` and `type` query parameters and an
// `Accept: application/dns-json` header, answered by a JSON body carrying
// an `Answer` array.

use async_trait::async_trait;
use ddns_update_core::traits::RecordResolver;
use ddns_update_core::{Error, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::transport;

/// Media type the DoH JSON convention answers with
const DNS_JSON: &str = "application/dns-json";

/// Record resolver backed by a DoH JSON endpoint
#[derive(Debug, Clone)]
pub struct DohResolver {
    endpoint: String,
}

impl DohResolver {
    /// Create a resolver for the given DoH endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

/// DoH JSON body, reduced to the fields this client consults
#[derive(Debug, Deserialize)]
struct DohReply {
    #[serde(rename = "Answer", default)]
    answer: Vec<DohAnswer>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    #[serde(default)]
    data: String,
}

impl DohReply {
    /// Data of the first answer, or "" when there is none
    ///
    /// Only the first answer is consulted, even when the name resolves
    /// to several records. TTLs are ignored.
    fn first_data(self) -> String {
        self.answer
            .into_iter()
            .next()
            .map(|answer| answer.data)
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecordResolver for DohResolver {
    async fn resolve(&self, name: &str, record_type: &str) -> Result<String> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(DNS_JSON));

        let response = transport::get(
            &self.endpoint,
            headers,
            &[("name", name), ("type", record_type)],
        )
        .await?;

        if response.status != 200 {
            return Err(Error::resolver(response.status, response.body));
        }

        let reply: DohReply = serde_json::from_str(&response.body)?;
        let data = reply.first_data();
        tracing::debug!("DoH answer for {} {}: {:?}", name, record_type, data);
        Ok(data)
    }
}
