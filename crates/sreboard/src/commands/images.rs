//! Image search and listing.

use sreboard_core::{DashboardAction, Endpoint};

use crate::cli::{GlobalOpts, ImagesArgs, ImagesCommand};
use crate::error::CliError;

use super::{Session, print_payload};

pub async fn handle(session: &Session, args: ImagesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ImagesCommand::Search { query, top_k } => {
            let query = query.join(" ");
            let action = DashboardAction::ImageSearch { query: query.clone() };
            action.validate()?;
            let body = session.send(&Endpoint::ImageSearch { query, top_k }).await?;
            print_payload(action.title(), &body, global)
        }

        ImagesCommand::List => {
            let body = session.send(&Endpoint::ImageList).await?;
            print_payload("Images", &body, global)
        }
    }
}
