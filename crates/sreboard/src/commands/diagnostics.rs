//! Log diagnostics subcommands.

use sreboard_core::{DashboardAction, Endpoint};

use crate::cli::{GlobalOpts, LogsArgs, LogsCommand};
use crate::error::CliError;

use super::{Session, print_payload};

pub async fn handle(session: &Session, args: LogsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        LogsCommand::Stats => session.run_and_print(&DashboardAction::LogDiagnostics, global).await,

        LogsCommand::Summary => {
            let body = session.send(&Endpoint::LogSummary).await?;
            print_payload("Log Summary", &body, global)
        }

        LogsCommand::Errors { code, top } => {
            let body = session
                .send(&Endpoint::ErrorSources {
                    error_code: code,
                    top_n: top,
                })
                .await?;
            print_payload(&format!("Top Sources for HTTP {code}"), &body, global)
        }

        LogsCommand::Search { query, limit } => {
            if query.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "query".into(),
                    reason: "search terms cannot be empty".into(),
                });
            }
            let body = session.send(&Endpoint::LogSearch { query, limit }).await?;
            print_payload("Log Search", &body, global)
        }
    }
}
