// Simulation endpoints: synthetic traffic spikes and regional failover.

use serde_json::Value;
use tracing::debug;

use crate::client::SreClient;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::models::FailoverReport;

impl SreClient {
    /// `POST /api/simulate/high-traffic`
    pub async fn simulate_high_traffic(&self) -> Result<Value, Error> {
        debug!("simulating high traffic");
        self.fetch(&Endpoint::SimulateHighTraffic).await
    }

    /// Trigger a simulated failover. The report names the region that
    /// should take over in `target_region`.
    ///
    /// `POST /api/failover/simulate`
    pub async fn simulate_failover(&self) -> Result<FailoverReport, Error> {
        debug!("simulating failover");
        self.fetch(&Endpoint::SimulateFailover).await
    }

    /// `GET /api/failover/status`
    pub async fn failover_status(&self) -> Result<Value, Error> {
        self.fetch(&Endpoint::FailoverStatus).await
    }

    /// Mark this region healthy again after a simulated failover.
    ///
    /// `POST /api/failover/restore`
    pub async fn restore_region(&self) -> Result<Value, Error> {
        debug!("restoring region");
        self.fetch(&Endpoint::RestoreRegion).await
    }
}
