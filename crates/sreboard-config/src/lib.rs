//! Shared configuration for the sreboard CLI and TUI.
//!
//! A TOML file layered under `SREBOARD_*` environment variables, translated
//! into `sreboard_core::DashboardConfig` and a credential verifier. Both
//! binaries depend on this crate; the CLI applies its flag overrides on top.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize, de};
use thiserror::Error;

use sreboard_core::region::{DEFAULT_REGION1_URL, DEFAULT_REGION2_URL};
use sreboard_core::{DashboardConfig, Region, RegionEndpoints, StaticCredentials, TlsVerification};

/// Environment prefix. `SREBOARD_API_REGION1` overrides `api.region1`.
pub const ENV_PREFIX: &str = "SREBOARD_";

/// Keys whose env values are taken verbatim. Everything else is parsed,
/// which would turn a password like `0123` into the number 123.
const VERBATIM_KEYS: [&str; 4] = ["api.region1", "api.region2", "auth.username", "auth.password"];

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Region active at startup.
    #[serde(default)]
    pub region: Region,

    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub poll: PollSettings,

    #[serde(default)]
    pub http: HttpSettings,

    #[serde(default)]
    pub auth: AuthSettings,
}

/// Base URLs of the two regions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_region1", deserialize_with = "scalar_string")]
    pub region1: String,
    #[serde(default = "default_region2", deserialize_with = "scalar_string")]
    pub region2: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            region1: default_region1(),
            region2: default_region2(),
        }
    }
}

fn default_region1() -> String {
    DEFAULT_REGION1_URL.into()
}
fn default_region2() -> String {
    DEFAULT_REGION2_URL.into()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PollSettings {
    /// Seconds between status fetches.
    #[serde(default = "default_poll_interval")]
    pub interval: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: default_poll_interval(),
        }
    }
}

fn default_poll_interval() -> u64 {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpSettings {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Accept self-signed certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Custom CA bundle. File-only: the env splitter cannot express the
    /// underscore in the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            insecure: false,
            ca_cert: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// Login gate credentials. Unset means the built-in demo pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(
        default,
        deserialize_with = "optional_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,

    /// Plaintext; prefer `SREBOARD_AUTH_PASSWORD`.
    #[serde(
        default,
        deserialize_with = "optional_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<String>,
}

// ── Lenient string fields ───────────────────────────────────────────

/// Accepts a string, number, or boolean as text, so `password = 123456`
/// in the file is the string "123456".
struct ScalarString;

impl de::Visitor<'_> for ScalarString {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number, or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_any(ScalarString)
}

fn optional_scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    scalar_string(deserializer).map(Some)
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "sreboard", "sreboard").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("sreboard");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load defaults, then `path` (if it exists), then `SREBOARD_*` env vars.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("_").ignore(&VERBATIM_KEYS));

    for key in VERBATIM_KEYS {
        let var = format!("{ENV_PREFIX}{}", key.replace('.', "_").to_ascii_uppercase());
        if let Some(value) = Env::var(&var) {
            figment = figment.merge(Serialized::default(key, value));
        }
    }

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation to core types ───────────────────────────────────────

fn parse_url(field: &str, raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL: {raw}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: field.into(),
            reason: format!("expected http or https, got '{}'", url.scheme()),
        });
    }
    Ok(url)
}

/// Build a `DashboardConfig`, validating URLs and the poll interval.
pub fn to_dashboard_config(cfg: &Config) -> Result<DashboardConfig, ConfigError> {
    let endpoints = RegionEndpoints::new(
        parse_url("api.region1", &cfg.api.region1)?,
        parse_url("api.region2", &cfg.api.region2)?,
    );

    if cfg.poll.interval == 0 {
        return Err(ConfigError::Validation {
            field: "poll.interval".into(),
            reason: "must be at least 1 second".into(),
        });
    }

    let tls = if cfg.http.insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = cfg.http.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(DashboardConfig {
        endpoints,
        initial_region: cfg.region,
        poll_interval: Duration::from_secs(cfg.poll.interval),
        timeout: Duration::from_secs(cfg.http.timeout),
        tls,
    })
}

/// The verifier for the login gate: the configured pair when both halves
/// are set, otherwise the demo pair.
pub fn credential_verifier(cfg: &Config) -> StaticCredentials {
    match (&cfg.auth.username, &cfg.auth.password) {
        (Some(user), Some(pass)) => StaticCredentials::new(user.clone(), SecretString::from(pass.clone())),
        _ => StaticCredentials::demo(),
    }
}
