//! Traffic and failover simulation.

use sreboard_core::{DashboardAction, Endpoint};

use crate::cli::{FailoverArgs, FailoverCommand, GlobalOpts, SimulateArgs, SimulateCommand};
use crate::error::CliError;

use super::{Session, print_payload};

pub async fn simulate(session: &Session, args: SimulateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        SimulateCommand::Traffic => {
            session
                .run_and_print(&DashboardAction::SimulateHighTraffic, global)
                .await
        }
    }
}

pub async fn handle(session: &Session, args: FailoverArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        FailoverCommand::Simulate => {
            let action = DashboardAction::SimulateFailover;
            let body = sreboard_core::run_action(
                session.backend.as_ref(),
                session.base_url(),
                session.region,
                &action,
            )
            .await?;
            print_payload(action.title(), &body, global)?;

            // The CLI keeps no state between runs, so point at the flag.
            let target = sreboard_core::failover_target(&body);
            if let Some(region) = target.filter(|r| *r != session.region && !global.quiet) {
                eprintln!("Traffic now targets {region}; pass --region {region} to follow it.");
            }
            Ok(())
        }

        FailoverCommand::Status => {
            let body = session.send(&Endpoint::FailoverStatus).await?;
            print_payload("Failover Status", &body, global)
        }

        FailoverCommand::Restore => {
            let body = session.send(&Endpoint::RestoreRegion).await?;
            print_payload("Region Restore", &body, global)
        }
    }
}
