// ── Core error types ──
//
// User-facing errors from sreboard-core. The `From<sreboard_api::Error>`
// impl collapses transport-layer failures into a handful of variants the
// dashboard and CLI can reason about.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Session errors ───────────────────────────────────────────────
    #[error("{message}")]
    InvalidCredentials { message: String },

    #[error("No active session -- log in first")]
    SessionInactive,

    // ── Input errors ─────────────────────────────────────────────────
    #[error("Please enter a search query")]
    EmptySearchQuery,

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Backend request timed out")]
    Timeout,

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if the backend answered).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Backend HTTP status, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<sreboard_api::Error> for CoreError {
    fn from(err: sreboard_api::Error) -> Self {
        match err {
            sreboard_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            sreboard_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            sreboard_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            sreboard_api::Error::Http { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            sreboard_api::Error::Deserialization { message, body } => {
                tracing::debug!(body = %body, "undecodable backend response");
                CoreError::Internal(format!("Failed to decode backend response: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_keeps_status_and_detail() {
        let err = CoreError::from(sreboard_api::Error::Http {
            status: 404,
            message: "Device not found".into(),
        });
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "API error: Device not found");
    }

    #[test]
    fn invalid_credentials_display_is_the_message() {
        let err = CoreError::InvalidCredentials {
            message: "Invalid credentials. Use admin / admin123".into(),
        };
        assert_eq!(err.to_string(), "Invalid credentials. Use admin / admin123");
    }
}
