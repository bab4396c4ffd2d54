// ── Runtime dashboard configuration ──
//
// Built by the CLI/TUI from the config crate and flags. Core never reads
// config files.

use std::path::PathBuf;
use std::time::Duration;

use crate::region::{Region, RegionEndpoints};

/// Status poll cadence.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Shortest cadence the poller accepts.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed staging backends).
    DangerAcceptInvalid,
}

impl From<TlsVerification> for sreboard_api::TlsMode {
    fn from(tls: TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => Self::System,
            TlsVerification::CustomCa(path) => Self::CustomCa(path),
            TlsVerification::DangerAcceptInvalid => Self::DangerAcceptInvalid,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Region → base URL mapping.
    pub endpoints: RegionEndpoints,
    /// Region active right after construction.
    pub initial_region: Region,
    /// Delay between status fetches while logged in.
    pub poll_interval: Duration,
    /// Per-request timeout.
    pub timeout: Duration,
    pub tls: TlsVerification,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoints: RegionEndpoints::default(),
            initial_region: Region::Region1,
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: Duration::from_secs(30),
            tls: TlsVerification::SystemDefaults,
        }
    }
}
