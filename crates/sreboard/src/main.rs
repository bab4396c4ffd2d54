mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::Session;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands never touch the backend
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "sreboard", &mut std::io::stdout());
            Ok(())
        }

        // Everything else goes through the login gate first
        cmd => {
            let cfg = config::effective_config(&cli.global)?;
            let poll_override = match &cmd {
                Command::Status(args) => args.interval,
                _ => None,
            };
            let dashboard = config::dashboard_config(&cfg, poll_override)?;
            config::authenticate(&cfg, &cli.global)?;

            let session = Session::new(dashboard)?;
            tracing::debug!(command = ?cmd, region = %session.region, base_url = %session.base_url(), "dispatching command");
            commands::dispatch(cmd, &session, &cli.global).await
        }
    }
}
