// sreboard-api: Async Rust client for the two-region SRE backend

pub mod client;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod transport;

mod activity;
mod diagnostics;
mod images;
mod simulation;
mod system;

pub use client::SreClient;
pub use endpoint::{DEFAULT_ERROR_TOP_N, DEFAULT_IMAGE_TOP_K, DEFAULT_LOG_SEARCH_LIMIT, Endpoint};
pub use error::Error;
pub use models::{AppVersion, FailoverReport, HealthReport, QueryAnswer, StatusSnapshot};
pub use transport::{TlsMode, TransportConfig};
