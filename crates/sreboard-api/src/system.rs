// System endpoints
//
// Service info, health, status snapshot, metrics, deployment version.

use serde_json::Value;
use tracing::debug;

use crate::client::SreClient;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::models::{AppVersion, HealthReport, StatusSnapshot};

impl SreClient {
    /// Service banner with name, region, version, and status.
    ///
    /// `GET /`
    pub async fn service_info(&self) -> Result<Value, Error> {
        self.fetch(&Endpoint::ServiceInfo).await
    }

    /// `GET /health`
    ///
    /// The backend reports `degraded` when its cache is unreachable but still
    /// answers 200, so check [`HealthReport::is_healthy`].
    pub async fn health(&self) -> Result<HealthReport, Error> {
        debug!("fetching health");
        self.fetch(&Endpoint::Health).await
    }

    /// Current status snapshot for the status card.
    ///
    /// `GET /api/status`
    pub async fn status(&self) -> Result<StatusSnapshot, Error> {
        debug!("fetching status snapshot");
        self.fetch(&Endpoint::Status).await
    }

    /// Prometheus-style counters rendered as JSON.
    ///
    /// `GET /api/metrics`
    pub async fn metrics(&self) -> Result<Value, Error> {
        self.fetch(&Endpoint::Metrics).await
    }

    /// Deployed application version for `region`.
    ///
    /// `GET /fastapi/{region}/getappversion`
    pub async fn app_version(&self, region: &str) -> Result<AppVersion, Error> {
        debug!(region, "fetching app version");
        self.fetch(&Endpoint::AppVersion {
            region: region.to_owned(),
        })
        .await
    }
}
