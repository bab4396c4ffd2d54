// ── Backend seam ──
//
// The dashboard talks to the network only through `Backend`, so tests can
// substitute a scripted fake and drive the poller on a paused clock.

use std::future::Future;

use serde_json::Value;
use sreboard_api::{Endpoint, SreClient, TransportConfig};
use url::Url;

use crate::config::DashboardConfig;
use crate::error::CoreError;

/// Executes one endpoint against a base URL.
pub trait Backend: Send + Sync + 'static {
    fn send(
        &self,
        base_url: &Url,
        endpoint: &Endpoint,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;
}

/// Real HTTP backend. One connection pool serves both regions.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: SreClient,
}

impl HttpBackend {
    pub fn new(config: &DashboardConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: config.tls.clone().into(),
            timeout: config.timeout,
        };
        let base = config.endpoints.region1.clone();
        let client = SreClient::new(base, &transport)?;
        Ok(Self { client })
    }

    pub fn from_client(client: SreClient) -> Self {
        Self { client }
    }

    /// Typed client bound to `base_url`, for callers that want the typed
    /// helpers instead of raw JSON.
    pub fn client_for(&self, base_url: &Url) -> SreClient {
        self.client.rebase(base_url.clone())
    }
}

impl Backend for HttpBackend {
    async fn send(&self, base_url: &Url, endpoint: &Endpoint) -> Result<Value, CoreError> {
        let client = self.client_for(base_url);
        Ok(client.send(endpoint).await?)
    }
}
