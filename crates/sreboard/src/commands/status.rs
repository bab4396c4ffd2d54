//! Status snapshot, one-shot or watched.

use std::sync::Arc;
use std::time::Duration;

use sreboard_core::{CoreError, DashboardEvent, StatusSnapshot, spawn_status_poller};
use tokio::sync::mpsc;

use crate::cli::{GlobalOpts, OutputFormat, StatusArgs};
use crate::error::CliError;
use crate::output::{self, FieldRow};

use super::Session;

// ── Rendering ───────────────────────────────────────────────────────

fn snapshot_rows(snap: &StatusSnapshot, color: bool) -> Vec<FieldRow> {
    let mut rows = vec![
        FieldRow::new("Region", snap.region.clone()),
        FieldRow::new("Status", output::paint_status(&snap.status, color)),
        FieldRow::new("Version", snap.version.clone()),
        FieldRow::new("Active devices", snap.active_devices.to_string()),
        FieldRow::new("Active users", snap.active_users.to_string()),
    ];
    if let Some(ref started) = snap.startup_time {
        rows.push(FieldRow::new("Started", started.clone()));
    }
    rows
}

/// One line per snapshot for watch mode.
fn snapshot_line(snap: &StatusSnapshot, format: &OutputFormat, color: bool) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Json | OutputFormat::JsonCompact => serde_json::to_string(snap)?,
        OutputFormat::Yaml => format!("---\n{}", serde_yaml::to_string(snap)?),
        OutputFormat::Table | OutputFormat::Plain => format!(
            "{}  {}  {}  devices={}  users={}",
            snap.region,
            output::paint_status(&snap.status, color),
            snap.version,
            snap.active_devices,
            snap.active_users
        ),
    })
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(session: &Session, args: &StatusArgs, global: &GlobalOpts) -> Result<(), CliError> {
    if args.watch {
        return watch(session, args.interval, global).await;
    }

    let snap = session.client().status().await.map_err(CoreError::from)?;
    let color = output::should_color(&global.color);
    let out = output::render_single(&global.output, &snap, |s| snapshot_rows(s, color))?;
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Poll with the dashboard's poller until Ctrl-C. Failed polls are logged
/// and skipped, the same as on the dashboard.
async fn watch(session: &Session, interval: Option<u64>, global: &GlobalOpts) -> Result<(), CliError> {
    let interval = interval.map_or(session.config.poll_interval, Duration::from_secs);
    let color = output::should_color(&global.color);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _poller = spawn_status_poller(
        Arc::clone(&session.backend),
        session.region,
        session.base_url().clone(),
        interval,
        0,
        tx,
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = rx.recv() => match event {
                Some(DashboardEvent::StatusFetched { result: Ok(snap), .. }) => {
                    output::print_output(&snapshot_line(&snap, &global.output, color)?, global.quiet);
                }
                Some(_) => {}
                None => break,
            },
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn snap() -> StatusSnapshot {
        StatusSnapshot {
            region: "region1".into(),
            status: "healthy".into(),
            version: "v1.0.0057_region1".into(),
            active_devices: 12,
            active_users: 4,
            ..StatusSnapshot::default()
        }
    }

    #[test]
    fn watch_line_is_single_line() {
        let line = snapshot_line(&snap(), &OutputFormat::Table, false).unwrap();
        assert_eq!(line, "region1  healthy  v1.0.0057_region1  devices=12  users=4");
    }

    #[test]
    fn rows_cover_card_fields() {
        let rows = snapshot_rows(&snap(), false);
        let fields: Vec<&str> = rows.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, ["Region", "Status", "Version", "Active devices", "Active users"]);
    }
}
