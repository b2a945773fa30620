//! Single-shot HTTP helpers
//!
//! One GET or POST per call, on a client built for that call alone.
//! Header and query collections are constructed fresh by each caller and
//! consumed here; nothing is shared between invocations.

use ddns_update_core::{Error, HttpResponse, Result};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Url, redirect};
use serde::Serialize;

/// Build the client used for exactly one request
///
/// Redirect following is disabled: a 3xx answer is returned to the caller
/// as-is. No timeout is set; reqwest's default is none.
fn fresh_client() -> Result<Client> {
    Client::builder()
        .redirect(redirect::Policy::none())
        .build()
        .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))
}

/// Parse a target URL and drop any query string it already carries
///
/// Requests target the path component only; parameters are supplied per
/// call, never baked into the endpoint.
fn target(raw: &str) -> Result<Url> {
    let mut url =
        Url::parse(raw).map_err(|e| Error::config(format!("invalid URL {raw}: {e}")))?;
    url.set_query(None);
    Ok(url)
}

/// Force `Content-Type: application/json`, replacing any caller-supplied value
fn with_json_content_type(mut headers: HeaderMap) -> HeaderMap {
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Issue a single GET and return the raw response
///
/// Query parameters are URL-encoded and appended only when any are given.
pub async fn get(url: &str, headers: HeaderMap, query: &[(&str, &str)]) -> Result<HttpResponse> {
    let url = target(url)?;
    let client = fresh_client()?;

    let mut request = client.get(url).headers(headers);
    if !query.is_empty() {
        request = request.query(query);
    }

    let response = request
        .send()
        .await
        .map_err(|e| Error::transport(format!("GET failed: {e}")))?;

    read_response(response).await
}

/// Issue a single JSON POST and return the raw response
///
/// The body is serialized to JSON and sent with
/// `Content-Type: application/json`; a caller-supplied content type does
/// not override it.
pub async fn post_json<T>(url: &str, headers: HeaderMap, body: &T) -> Result<HttpResponse>
where
    T: Serialize + ?Sized,
{
    let url = target(url)?;
    let client = fresh_client()?;

    let response = client
        .post(url)
        .headers(with_json_content_type(headers))
        .json(body)
        .send()
        .await
        .map_err(|e| Error::transport(format!("POST failed: {e}")))?;

    read_response(response).await
}

/// Reduce a transport response to the plain status + body pair
async fn read_response(response: reqwest::Response) -> Result<HttpResponse> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| Error::transport(format!("failed to read response body: {e}")))?;

    tracing::debug!("response: status={} body_len={}", status, body.len());
    Ok(HttpResponse { status, body })
}
