//! Active users, active devices, device alerts.

use sreboard_core::{DashboardAction, Endpoint};

use crate::cli::GlobalOpts;
use crate::error::CliError;

use super::{Session, print_payload};

pub async fn users(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    session.run_and_print(&DashboardAction::ActiveUsers, global).await
}

pub async fn devices(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    session.run_and_print(&DashboardAction::ActiveDevices, global).await
}

pub async fn alerts(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let body = session.send(&Endpoint::DeviceAlerts).await?;
    print_payload("Device Alerts", &body, global)
}
