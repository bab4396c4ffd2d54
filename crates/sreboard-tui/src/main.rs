//! `sreboard-tui`: live two-region operations dashboard in the terminal.
//!
//! A login screen gates the dashboard. Once logged in, the active region's
//! status is polled in the background and every dashboard action opens its
//! result in a modal overlay.
//!
//! Logs go to a file (default `$TMPDIR/sreboard-tui.log`) so they never
//! corrupt the terminal.

mod action;
mod app;
mod component;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use sreboard_core::{Dashboard, HttpBackend, Region};

use crate::app::App;

/// Terminal dashboard for the sreboard backend.
#[derive(Parser, Debug)]
#[command(name = "sreboard-tui", version, about)]
struct Cli {
    /// Region 1 backend base URL
    #[arg(long, env = "SREBOARD_API_REGION1")]
    region1_url: Option<String>,

    /// Region 2 backend base URL
    #[arg(long, env = "SREBOARD_API_REGION2")]
    region2_url: Option<String>,

    /// Region selected at startup (region1 or region2)
    #[arg(short, long, env = "SREBOARD_REGION")]
    region: Option<Region>,

    /// Status poll interval in seconds
    #[arg(long, env = "SREBOARD_POLL_INTERVAL")]
    interval: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(short = 'k', long)]
    insecure: bool,

    /// Log file path (defaults to $TMPDIR/sreboard-tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing. Returns the guard that flushes the writer on drop.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("sreboard_tui={log_level},sreboard_core={log_level}"))
    });

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("sreboard-tui.log"));
    let temp_dir = std::env::temp_dir();
    let log_dir = log_file.parent().unwrap_or(temp_dir.as_path());
    let log_name = log_file
        .file_name()
        .unwrap_or(OsStr::new("sreboard-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Config file + env, with command-line overrides on top.
fn build_dashboard(cli: &Cli) -> Result<Dashboard<HttpBackend>> {
    let mut cfg = sreboard_config::load_config()?;
    if let Some(ref url) = cli.region1_url {
        cfg.api.region1.clone_from(url);
    }
    if let Some(ref url) = cli.region2_url {
        cfg.api.region2.clone_from(url);
    }
    if let Some(region) = cli.region {
        cfg.region = region;
    }
    if let Some(secs) = cli.interval {
        cfg.poll.interval = secs;
    }
    if cli.insecure {
        cfg.http.insecure = true;
    }

    let config = sreboard_config::to_dashboard_config(&cfg)?;
    let verifier = Arc::new(sreboard_config::credential_verifier(&cfg));
    let backend = Arc::new(HttpBackend::new(&config)?);
    Ok(Dashboard::new(config, backend, verifier))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tui::install_hooks()?;
    let _log_guard = setup_tracing(&cli);

    let board = build_dashboard(&cli)?;
    info!(
        region = %board.region(),
        base_url = %board.base_url(),
        "starting sreboard-tui"
    );

    let mut app = App::new(board);
    app.run().await?;

    Ok(())
}
