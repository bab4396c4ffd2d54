// Activity endpoints: active users, active devices, device alerts.
//
// Payload shapes are deployment-defined, so these return loosely-typed JSON.

use serde_json::Value;

use crate::client::SreClient;
use crate::endpoint::Endpoint;
use crate::error::Error;

impl SreClient {
    /// `GET /api/users/active`
    pub async fn active_users(&self) -> Result<Value, Error> {
        self.fetch(&Endpoint::ActiveUsers).await
    }

    /// `GET /api/devices/active`
    pub async fn active_devices(&self) -> Result<Value, Error> {
        self.fetch(&Endpoint::ActiveDevices).await
    }

    /// Devices currently in warning or critical state.
    ///
    /// `GET /api/devices/alerts`
    pub async fn device_alerts(&self) -> Result<Value, Error> {
        self.fetch(&Endpoint::DeviceAlerts).await
    }
}
