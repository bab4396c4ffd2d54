// sreboard-core: Dashboard state machine between sreboard-api and the CLI/TUI.

pub mod action;
pub mod auth;
pub mod backend;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod modal;
pub mod poller;
pub mod region;

// ── Primary re-exports ──────────────────────────────────────────────
pub use action::{DashboardAction, QuickQuery, failover_target, run_action};
pub use auth::{CredentialVerifier, LoginForm, StaticCredentials};
pub use backend::{Backend, HttpBackend};
pub use config::{DashboardConfig, TlsVerification};
pub use dashboard::{Dashboard, DashboardEvent, InputField};
pub use error::CoreError;
pub use modal::{Modal, ModalView};
pub use poller::{PollHandle, fetch_status, spawn_status_poller};
pub use region::{Region, RegionEndpoints};

pub use sreboard_api::{AppVersion, Endpoint, FailoverReport, HealthReport, QueryAnswer, SreClient, StatusSnapshot};
