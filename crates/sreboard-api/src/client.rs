// Region backend HTTP client
//
// Wraps `reqwest::Client` with base-URL joining and FastAPI error
// unwrapping. Endpoint helpers live as inherent methods in separate files
// (system, activity, diagnostics, simulation, images) to keep this module
// focused on transport mechanics.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::transport::TransportConfig;

/// HTTP client bound to a single region's base URL.
///
/// Cloning is cheap: the underlying connection pool is shared, so the same
/// client can be re-pointed at the other region with [`SreClient::rebase`].
#[derive(Debug, Clone)]
pub struct SreClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SreClient {
    /// Create a new client from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Same connection pool, different region.
    pub fn rebase(&self, base_url: Url) -> Self {
        Self {
            http: self.http.clone(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Join an absolute API path onto the base URL, keeping any path prefix
    /// the base already has (`https://lb/region1` + `/api/status`).
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Execute an endpoint and return the raw JSON body.
    pub async fn send(&self, endpoint: &Endpoint) -> Result<Value, Error> {
        self.fetch(endpoint).await
    }

    /// Execute an endpoint and decode the body into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, Error> {
        let method = endpoint.method();
        let mut url = self.url(&endpoint.path())?;
        let params = endpoint.query_params();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);
        if let Some(body) = endpoint.body() {
            request = request.json(&body);
        }

        let resp = request.send().await.map_err(Error::Transport)?;
        Self::parse_response(resp).await
    }

    /// Turn a response into `T`, mapping non-2xx statuses to `Error::Http`.
    async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            let message = error_detail(&body)
                .or_else(|| status.canonical_reason().map(str::to_owned))
                .unwrap_or_else(|| "request failed".into());
            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }

        // Empty 2xx bodies decode as `null` so `Value` callers still succeed.
        let text = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(text).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

/// Pull a human-readable message out of an error body.
///
/// FastAPI returns `{"detail": "..."}`; validation errors return
/// `{"detail": [...]}`, which is kept as compact JSON.
fn error_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => Some(trimmed.to_owned()),
        },
        _ => Some(trimmed.to_owned()),
    }
}
