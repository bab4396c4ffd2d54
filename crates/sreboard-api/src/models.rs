// Typed response models
//
// Only the payloads the client actually inspects are typed. Everything else
// is passed through as `serde_json::Value` because the backend's field set
// varies between deployments.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `GET /api/status`
///
/// Counts are lenient: a missing, null, or non-numeric count reads as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub active_devices: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub active_users: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub redis: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// `GET /fastapi/{region}/getappversion`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppVersion {
    pub version: String,
    #[serde(default)]
    pub region: String,
}

/// `POST /api/failover/simulate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailoverReport {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub source_region: Option<String>,
    #[serde(default)]
    pub target_region: Option<String>,
    #[serde(default)]
    pub failover_latency_seconds: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// `POST /api/diagnostics/query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAnswer {
    #[serde(default)]
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::as_conversions)]
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn status_snapshot_full() {
        let snap: StatusSnapshot = serde_json::from_value(json!({
            "region": "region1",
            "status": "healthy",
            "version": "v1.0.0057_region1",
            "startup_time": "2025-01-01T00:00:00",
            "active_devices": 42,
            "active_users": 7,
            "timestamp": "2025-01-01T00:05:00"
        }))
        .unwrap();
        assert_eq!(snap.active_devices, 42);
        assert_eq!(snap.active_users, 7);
        assert_eq!(snap.version, "v1.0.0057_region1");
    }

    #[test]
    fn status_counts_default_to_zero() {
        let snap: StatusSnapshot = serde_json::from_value(json!({
            "region": "region2",
            "status": "degraded",
            "version": "v1",
            "active_devices": null,
            "active_users": "n/a"
        }))
        .unwrap();
        assert_eq!(snap.active_devices, 0);
        assert_eq!(snap.active_users, 0);
    }

    #[test]
    fn failover_without_target() {
        let report: FailoverReport =
            serde_json::from_value(json!({ "status": "failover_initiated" })).unwrap();
        assert_eq!(report.target_region, None);
    }
}
