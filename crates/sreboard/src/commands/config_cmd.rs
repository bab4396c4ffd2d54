//! Config subcommand handlers.

use dialoguer::{Input, Select};
use sreboard_config::Config;
use sreboard_core::Region;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, prompt_err};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display, masking the password.
fn format_config_redacted(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    let _ = writeln!(out, "region = \"{}\"", cfg.region);
    let _ = writeln!(out);
    let _ = writeln!(out, "[api]");
    let _ = writeln!(out, "region1 = \"{}\"", cfg.api.region1);
    let _ = writeln!(out, "region2 = \"{}\"", cfg.api.region2);
    let _ = writeln!(out);
    let _ = writeln!(out, "[poll]");
    let _ = writeln!(out, "interval = {}", cfg.poll.interval);
    let _ = writeln!(out);
    let _ = writeln!(out, "[http]");
    let _ = writeln!(out, "timeout = {}", cfg.http.timeout);
    let _ = writeln!(out, "insecure = {}", cfg.http.insecure);
    if let Some(ref ca) = cfg.http.ca_cert {
        let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
    }
    if cfg.auth.username.is_some() || cfg.auth.password.is_some() {
        let _ = writeln!(out);
        let _ = writeln!(out, "[auth]");
        if let Some(ref u) = cfg.auth.username {
            let _ = writeln!(out, "username = \"{u}\"");
        }
        if cfg.auth.password.is_some() {
            let _ = writeln!(out, "password = \"****\"");
        }
    }

    out
}

fn prompt_url(prompt: &str, current: &str) -> Result<String, CliError> {
    Input::new()
        .with_prompt(prompt)
        .default(current.to_owned())
        .validate_with(|input: &String| -> Result<(), String> {
            url::Url::parse(input)
                .map(|_| ())
                .map_err(|e| format!("invalid URL: {e}"))
        })
        .interact_text()
        .map_err(prompt_err)
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::effective_config(global)?;
            output::print_output(format_config_redacted(&cfg).trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init => {
            let mut cfg = config::load_config()?;

            cfg.api.region1 = prompt_url("Region 1 base URL", &cfg.api.region1)?;
            cfg.api.region2 = prompt_url("Region 2 base URL", &cfg.api.region2)?;

            let choices = [Region::Region1.label(), Region::Region2.label()];
            let current = usize::from(cfg.region == Region::Region2);
            let picked = Select::new()
                .with_prompt("Default region")
                .items(&choices)
                .default(current)
                .interact()
                .map_err(prompt_err)?;
            cfg.region = if picked == 0 { Region::Region1 } else { Region::Region2 };

            cfg.poll.interval = Input::new()
                .with_prompt("Status poll interval (seconds)")
                .default(cfg.poll.interval)
                .validate_with(|v: &u64| if *v >= 1 { Ok(()) } else { Err("must be at least 1") })
                .interact_text()
                .map_err(prompt_err)?;

            let path = config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("   ✓ Config written to {}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_password() {
        let mut cfg = Config::default();
        cfg.auth.username = Some("ops".into());
        cfg.auth.password = Some("hunter2".into());
        let shown = format_config_redacted(&cfg);
        assert!(shown.contains("username = \"ops\""));
        assert!(shown.contains("password = \"****\""));
        assert!(!shown.contains("hunter2"));
    }
}
