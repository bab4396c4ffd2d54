//! Health, metrics, service banner, deployed version.

use sreboard_core::{CoreError, DashboardAction, Endpoint, HealthReport};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{self, FieldRow};

use super::{Session, print_payload};

fn health_rows(health: &HealthReport, color: bool) -> Vec<FieldRow> {
    vec![
        FieldRow::new("Status", output::paint_status(&health.status, color)),
        FieldRow::new("Region", health.region.clone()),
        FieldRow::new("Version", health.version.clone()),
        FieldRow::new("Cache", health.redis.clone()),
        FieldRow::new("Checked", health.timestamp.clone().unwrap_or_default()),
    ]
}

pub async fn health(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let health = session.client().health().await.map_err(CoreError::from)?;
    let color = output::should_color(&global.color);
    let out = output::render_single(&global.output, &health, |h| health_rows(h, color))?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn metrics(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let body = session.send(&Endpoint::Metrics).await?;
    print_payload("Metrics", &body, global)
}

pub async fn info(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let body = session.send(&Endpoint::ServiceInfo).await?;
    print_payload("Service Info", &body, global)
}

pub async fn version(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    session.run_and_print(&DashboardAction::DeploymentVersion, global).await
}
