//! Natural-language diagnostics query.

use sreboard_core::{DashboardAction, QuickQuery};

use crate::cli::{AskArgs, GlobalOpts, PresetArg};
use crate::error::CliError;

use super::Session;

fn preset(arg: PresetArg) -> QuickQuery {
    match arg {
        PresetArg::Safety => QuickQuery::SafetyIncidents,
        PresetArg::HardHats => QuickQuery::HardHats,
        PresetArg::Error400 => QuickQuery::Error400Sources,
        PresetArg::Sustainability => QuickQuery::Sustainability,
    }
}

pub async fn handle(session: &Session, args: AskArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let action = match args.preset {
        Some(p) => preset(p).action(),
        None => DashboardAction::Query {
            question: args.question.join(" "),
        },
    };
    session.run_and_print(&action, global).await
}
