// Endpoint catalog for the region backend.
//
// Each variant knows its method, path, query string, and JSON body. The core
// dispatcher works in terms of `Endpoint` values so it can drive a fake
// backend in tests; the typed helpers on `SreClient` are thin wrappers.

use reqwest::Method;
use serde_json::{Value, json};

/// `top_k` sent with every image search.
pub const DEFAULT_IMAGE_TOP_K: u32 = 5;
/// Default `top_n` for the error-source breakdown.
pub const DEFAULT_ERROR_TOP_N: u32 = 10;
/// Default `limit` for log search.
pub const DEFAULT_LOG_SEARCH_LIMIT: u32 = 50;

/// A single backend operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    // ── System ──────────────────────────────────────────────────────
    /// `GET /`
    ServiceInfo,
    /// `GET /health`
    Health,
    /// `GET /api/status`
    Status,
    /// `GET /api/metrics`
    Metrics,
    /// `GET /fastapi/{region}/getappversion`
    AppVersion { region: String },

    // ── Activity ────────────────────────────────────────────────────
    /// `GET /api/users/active`
    ActiveUsers,
    /// `GET /api/devices/active`
    ActiveDevices,
    /// `GET /api/devices/alerts`
    DeviceAlerts,

    // ── Diagnostics ─────────────────────────────────────────────────
    /// `GET /api/diagnostics/logs/stats`
    LogStats,
    /// `GET /api/diagnostics/logs/summary`
    LogSummary,
    /// `GET /api/diagnostics/logs/errors/{code}?top_n=N`
    ErrorSources { error_code: u16, top_n: u32 },
    /// `GET /api/diagnostics/logs/search?query=Q&limit=N`
    LogSearch { query: String, limit: u32 },
    /// `POST /api/diagnostics/query` with `{question}`
    Query { question: String },

    // ── Simulation ──────────────────────────────────────────────────
    /// `POST /api/simulate/high-traffic`
    SimulateHighTraffic,
    /// `POST /api/failover/simulate`
    SimulateFailover,
    /// `GET /api/failover/status`
    FailoverStatus,
    /// `POST /api/failover/restore`
    RestoreRegion,

    // ── Images ──────────────────────────────────────────────────────
    /// `POST /api/images/search` with `{query, top_k}`
    ImageSearch { query: String, top_k: u32 },
    /// `GET /api/images/list`
    ImageList,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Self::Query { .. }
            | Self::SimulateHighTraffic
            | Self::SimulateFailover
            | Self::RestoreRegion
            | Self::ImageSearch { .. } => Method::POST,
            _ => Method::GET,
        }
    }

    /// Path relative to the region base URL, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Self::ServiceInfo => "/".into(),
            Self::Health => "/health".into(),
            Self::Status => "/api/status".into(),
            Self::Metrics => "/api/metrics".into(),
            Self::AppVersion { region } => format!("/fastapi/{region}/getappversion"),
            Self::ActiveUsers => "/api/users/active".into(),
            Self::ActiveDevices => "/api/devices/active".into(),
            Self::DeviceAlerts => "/api/devices/alerts".into(),
            Self::LogStats => "/api/diagnostics/logs/stats".into(),
            Self::LogSummary => "/api/diagnostics/logs/summary".into(),
            Self::ErrorSources { error_code, .. } => {
                format!("/api/diagnostics/logs/errors/{error_code}")
            }
            Self::LogSearch { .. } => "/api/diagnostics/logs/search".into(),
            Self::Query { .. } => "/api/diagnostics/query".into(),
            Self::SimulateHighTraffic => "/api/simulate/high-traffic".into(),
            Self::SimulateFailover => "/api/failover/simulate".into(),
            Self::FailoverStatus => "/api/failover/status".into(),
            Self::RestoreRegion => "/api/failover/restore".into(),
            Self::ImageSearch { .. } => "/api/images/search".into(),
            Self::ImageList => "/api/images/list".into(),
        }
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ErrorSources { top_n, .. } => vec![("top_n", top_n.to_string())],
            Self::LogSearch { query, limit } => {
                vec![("query", query.clone()), ("limit", limit.to_string())]
            }
            _ => Vec::new(),
        }
    }

    /// JSON request body. Only the two search-style POSTs carry one.
    pub fn body(&self) -> Option<Value> {
        match self {
            Self::Query { question } => Some(json!({ "question": question })),
            Self::ImageSearch { query, top_k } => Some(json!({ "query": query, "top_k": top_k })),
            _ => None,
        }
    }
}
