//! CLI-aware configuration: the shared config crate plus flag overrides and
//! the login gate.

use std::io::IsTerminal;
use std::time::Duration;

use dialoguer::Input;
use sreboard_config::Config;
use sreboard_core::{CredentialVerifier, DashboardConfig, Region, TlsVerification};

use crate::cli::{GlobalOpts, RegionArg};
use crate::error::CliError;

pub use sreboard_config::{config_path, load_config, save_config};

impl From<RegionArg> for Region {
    fn from(arg: RegionArg) -> Self {
        match arg {
            RegionArg::Region1 => Region::Region1,
            RegionArg::Region2 => Region::Region2,
        }
    }
}

/// Load file + env config, then apply command-line overrides.
pub fn effective_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = load_config()?;
    if let Some(region) = global.region {
        cfg.region = region.into();
    }
    if let Some(ref url) = global.region1_url {
        cfg.api.region1.clone_from(url);
    }
    if let Some(ref url) = global.region2_url {
        cfg.api.region2.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        cfg.http.timeout = timeout;
    }
    if global.insecure {
        cfg.http.insecure = true;
    }
    Ok(cfg)
}

/// Translate to the core runtime config. `poll_override` replaces the
/// configured cadence for `status --watch`.
pub fn dashboard_config(cfg: &Config, poll_override: Option<u64>) -> Result<DashboardConfig, CliError> {
    let mut dash = sreboard_config::to_dashboard_config(cfg)?;
    if let Some(secs) = poll_override {
        if secs == 0 {
            return Err(CliError::Validation {
                field: "interval".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        dash.poll_interval = Duration::from_secs(secs);
    }
    if dash.tls == TlsVerification::DangerAcceptInvalid {
        tracing::debug!("TLS verification disabled");
    }
    Ok(dash)
}

/// Pass the login gate with flag/env credentials, prompting for whatever
/// is missing when stdin is a terminal.
pub fn authenticate(cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let verifier = sreboard_config::credential_verifier(cfg);
    let (username, password) = submitted_credentials(global)?;
    if verifier.verify(&username, &password) {
        tracing::debug!(username, "login gate passed");
        Ok(())
    } else {
        Err(CliError::AuthFailed {
            message: verifier.rejection_message(),
        })
    }
}

fn submitted_credentials(global: &GlobalOpts) -> Result<(String, String), CliError> {
    if let (Some(user), Some(pass)) = (&global.username, &global.password) {
        return Ok((user.clone(), pass.clone()));
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NoCredentials);
    }

    let username = match &global.username {
        Some(user) => user.clone(),
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(prompt_err)?,
    };
    let password = match &global.password {
        Some(pass) => pass.clone(),
        None => rpassword::prompt_password("Password: ").map_err(prompt_err)?,
    };
    Ok((username, password))
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
