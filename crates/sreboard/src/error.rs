//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use sreboard_config::ConfigError;
use sreboard_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to backend at {url}: {reason}")]
    #[diagnostic(
        code(sreboard::connection_failed),
        help(
            "Check that the region backend is running and reachable.\n\
             Override the URL with --region1-url / --region2-url or switch with --region."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(sreboard::timeout),
        help("Increase the timeout with --timeout or check backend responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────

    #[error("{message}")]
    #[diagnostic(
        code(sreboard::auth_failed),
        help("Pass --username / --password or set SREBOARD_USERNAME and SREBOARD_PASSWORD.")
    )]
    AuthFailed { message: String },

    #[error("No credentials supplied")]
    #[diagnostic(
        code(sreboard::no_credentials),
        help(
            "stdin is not a terminal, so no login prompt was shown.\n\
             Set SREBOARD_USERNAME and SREBOARD_PASSWORD, or pass --username / --password."
        )
    )]
    NoCredentials,

    // ── API ──────────────────────────────────────────────────────────

    #[error("Not found: {message}")]
    #[diagnostic(code(sreboard::not_found))]
    NotFound { message: String },

    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(sreboard::api_error))]
    ApiError { message: String, status: u16 },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(sreboard::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(
        code(sreboard::config),
        help("Check the file reported by: sreboard config path")
    )]
    Config(Box<figment::Error>),

    // ── Internal / IO / Serialization ────────────────────────────────

    #[error("{0}")]
    #[diagnostic(code(sreboard::internal))]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    #[diagnostic(code(sreboard::serialization))]
    Serialization(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. } => exit_code::USAGE,
            Self::ApiError { .. }
            | Self::Config(_)
            | Self::Internal(_)
            | Self::Io(_)
            | Self::Serialization(_) => exit_code::GENERAL,
        }
    }
}

// ── Conversion from CoreError ────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidCredentials { message } => CliError::AuthFailed { message },
            CoreError::SessionInactive => CliError::AuthFailed {
                message: "No active session".into(),
            },
            CoreError::EmptySearchQuery => CliError::Validation {
                field: "query".into(),
                reason: "Please enter a search query".into(),
            },
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::Timeout => CliError::Timeout,
            CoreError::Api {
                message,
                status: Some(404),
            } => CliError::NotFound { message },
            CoreError::Api {
                message,
                status: Some(status),
            } => CliError::ApiError { message, status },
            CoreError::Api { message, status: None } => CliError::Internal(message),
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Io(e) => CliError::Io(e),
            ConfigError::Serialization(e) => CliError::Serialization(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
