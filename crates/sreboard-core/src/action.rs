// ── Action dispatcher catalog ──
//
// Every dashboard button maps to one backend endpoint, a fixed modal title,
// and a fixed failure message.

use serde_json::Value;
use sreboard_api::{DEFAULT_IMAGE_TOP_K, Endpoint};
use strum::{EnumIter, IntoEnumIterator};
use tracing::warn;
use url::Url;

use crate::backend::Backend;
use crate::error::CoreError;
use crate::region::Region;

/// A user-triggered request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    ActiveUsers,
    ActiveDevices,
    DeploymentVersion,
    LogDiagnostics,
    RefreshStatus,
    SimulateHighTraffic,
    SimulateFailover,
    ImageSearch { query: String },
    Query { question: String },
}

impl DashboardAction {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ActiveUsers => "Active Users",
            Self::ActiveDevices => "Active Devices",
            Self::DeploymentVersion => "Deployment Version",
            Self::LogDiagnostics => "Log Diagnostics",
            Self::RefreshStatus => "Refresh Status",
            Self::SimulateHighTraffic => "High Traffic Simulation",
            Self::SimulateFailover => "Failover Simulation",
            Self::ImageSearch { .. } => "Image Search Results",
            Self::Query { .. } => "AI Query Response",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::ActiveUsers => "Failed to fetch users",
            Self::ActiveDevices => "Failed to fetch devices",
            Self::DeploymentVersion => "Failed to fetch version",
            Self::LogDiagnostics => "Failed to fetch log stats",
            Self::RefreshStatus => "Failed to fetch status",
            Self::SimulateHighTraffic => "Failed to simulate traffic",
            Self::SimulateFailover => "Failed to simulate failover",
            Self::ImageSearch { .. } => "Failed to search images",
            Self::Query { .. } => "Failed to query LLM",
        }
    }

    /// Endpoint for this action against `region`. Only the version path
    /// depends on the region; everything else is relative to its base URL.
    pub fn endpoint(&self, region: Region) -> Endpoint {
        match self {
            Self::ActiveUsers => Endpoint::ActiveUsers,
            Self::ActiveDevices => Endpoint::ActiveDevices,
            Self::DeploymentVersion => Endpoint::AppVersion {
                region: region.as_str().to_owned(),
            },
            Self::LogDiagnostics => Endpoint::LogStats,
            Self::RefreshStatus => Endpoint::Status,
            Self::SimulateHighTraffic => Endpoint::SimulateHighTraffic,
            Self::SimulateFailover => Endpoint::SimulateFailover,
            Self::ImageSearch { query } => Endpoint::ImageSearch {
                query: query.clone(),
                top_k: DEFAULT_IMAGE_TOP_K,
            },
            Self::Query { question } => Endpoint::Query {
                question: question.clone(),
            },
        }
    }

    /// Whether the result goes to the modal (everything but refresh).
    pub fn opens_modal(&self) -> bool {
        !matches!(self, Self::RefreshStatus)
    }

    /// Reject an action that must not reach the network. Only an image
    /// search with a blank query fails.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::ImageSearch { query } if query.trim().is_empty() => Err(CoreError::EmptySearchQuery),
            _ => Ok(()),
        }
    }
}

/// Region named by a failover response, if it is one we know.
pub fn failover_target(body: &Value) -> Option<Region> {
    let raw = body.get("target_region").and_then(Value::as_str);
    let region = raw.and_then(|s| s.parse::<Region>().ok());
    if region.is_none() {
        warn!(target_region = ?raw, "failover response has no usable target region");
    }
    region
}

/// Issue one action against a region and return the raw body.
pub async fn run_action<B: Backend>(
    backend: &B,
    base_url: &Url,
    region: Region,
    action: &DashboardAction,
) -> Result<Value, CoreError> {
    backend.send(base_url, &action.endpoint(region)).await
}

/// Canned natural-language questions offered as shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum QuickQuery {
    SafetyIncidents,
    HardHats,
    Error400Sources,
    Sustainability,
}

impl QuickQuery {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SafetyIncidents => "Safety incidents 2024",
            Self::HardHats => "Hard hat requirements",
            Self::Error400Sources => "Error 400 sources",
            Self::Sustainability => "Sustainability statements",
        }
    }

    /// Short machine name, used by `--preset`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::SafetyIncidents => "safety",
            Self::HardHats => "hard-hats",
            Self::Error400Sources => "error-400",
            Self::Sustainability => "sustainability",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Self::SafetyIncidents => "How many safety incidences occurred in BP operations in 2024?",
            Self::HardHats => "Describe BP oil drill operations and hard hat requirements",
            Self::Error400Sources => "Give me the most frequent IP devices generating error 400",
            Self::Sustainability => "List economic and social sustainability statements",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::iter().find(|q| q.slug().eq_ignore_ascii_case(slug))
    }

    pub fn action(self) -> DashboardAction {
        DashboardAction::Query {
            question: self.question().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::modal::Modal;

    #[test]
    fn version_endpoint_follows_region() {
        assert_eq!(
            DashboardAction::DeploymentVersion.endpoint(Region::Region2).path(),
            "/fastapi/region2/getappversion"
        );
    }

    #[test]
    fn titles_and_failures() {
        let cases = [
            (DashboardAction::ActiveUsers, "Active Users", "Failed to fetch users"),
            (DashboardAction::ActiveDevices, "Active Devices", "Failed to fetch devices"),
            (DashboardAction::DeploymentVersion, "Deployment Version", "Failed to fetch version"),
            (DashboardAction::LogDiagnostics, "Log Diagnostics", "Failed to fetch log stats"),
            (DashboardAction::RefreshStatus, "Refresh Status", "Failed to fetch status"),
            (
                DashboardAction::SimulateHighTraffic,
                "High Traffic Simulation",
                "Failed to simulate traffic",
            ),
            (
                DashboardAction::SimulateFailover,
                "Failover Simulation",
                "Failed to simulate failover",
            ),
            (
                DashboardAction::ImageSearch { query: "pumps".into() },
                "Image Search Results",
                "Failed to search images",
            ),
            (
                DashboardAction::Query { question: "why".into() },
                "AI Query Response",
                "Failed to query LLM",
            ),
        ];
        for (action, title, failure) in cases {
            assert_eq!(action.title(), title, "{action:?}");
            assert_eq!(action.failure_message(), failure, "{action:?}");

            let modal = Modal::error(action.title(), action.failure_message());
            assert_eq!(modal.title(), title);
            assert_eq!(modal.payload(), &json!({ "error": failure }));
        }
    }

    #[test]
    fn blank_image_search_is_rejected() {
        let blank = DashboardAction::ImageSearch { query: " \t ".into() };
        assert!(matches!(blank.validate(), Err(CoreError::EmptySearchQuery)));
        assert!(DashboardAction::ImageSearch { query: "pumps".into() }.validate().is_ok());
        assert!(DashboardAction::Query { question: String::new() }.validate().is_ok());
        assert!(DashboardAction::ActiveUsers.validate().is_ok());
    }

    #[test]
    fn failover_target_needs_a_known_region() {
        assert_eq!(
            failover_target(&json!({ "target_region": "region2" })),
            Some(Region::Region2)
        );
        assert_eq!(failover_target(&json!({ "target_region": "mars" })), None);
        assert_eq!(failover_target(&json!({ "target_region": 2 })), None);
        assert_eq!(failover_target(&json!({ "status": "failover_initiated" })), None);
    }

    #[test]
    fn refresh_does_not_open_modal() {
        assert!(!DashboardAction::RefreshStatus.opens_modal());
        assert!(DashboardAction::SimulateFailover.opens_modal());
    }

    #[test]
    fn quick_queries_by_slug() {
        assert_eq!(QuickQuery::all().count(), 4);
        assert_eq!(QuickQuery::from_slug("error-400"), Some(QuickQuery::Error400Sources));
        assert_eq!(QuickQuery::from_slug("nope"), None);
        assert_eq!(
            QuickQuery::Error400Sources.action(),
            DashboardAction::Query {
                question: "Give me the most frequent IP devices generating error 400".into()
            }
        );
    }
}
