//! Command dispatch. Each area lives in its own module.

pub mod activity;
pub mod ask;
pub mod config_cmd;
pub mod diagnostics;
pub mod failover;
pub mod images;
pub mod status;
pub mod system;

use std::sync::Arc;

use serde_json::Value;
use sreboard_core::{Backend, DashboardAction, DashboardConfig, Endpoint, HttpBackend, Region, SreClient};
use url::Url;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Everything a backend command needs once the login gate has passed.
pub struct Session {
    pub backend: Arc<HttpBackend>,
    pub config: DashboardConfig,
    pub region: Region,
}

impl Session {
    pub fn new(config: DashboardConfig) -> Result<Self, CliError> {
        let backend = Arc::new(HttpBackend::new(&config)?);
        Ok(Self {
            backend,
            region: config.initial_region,
            config,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.config.endpoints.base_url(self.region)
    }

    /// Typed client for the active region.
    pub fn client(&self) -> SreClient {
        self.backend.client_for(self.base_url())
    }

    /// Run an action and print its payload under the action's title.
    pub async fn run_and_print(
        &self,
        action: &DashboardAction,
        global: &GlobalOpts,
    ) -> Result<(), CliError> {
        let body = sreboard_core::run_action(self.backend.as_ref(), self.base_url(), self.region, action).await?;
        print_payload(action.title(), &body, global)
    }

    /// Raw endpoint call for the supplemented endpoints.
    pub async fn send(&self, endpoint: &Endpoint) -> Result<Value, CliError> {
        Ok(self.backend.send(self.base_url(), endpoint).await?)
    }
}

pub fn print_payload(title: &str, payload: &Value, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(&global.color);
    let out = output::render_payload(&global.output, title, payload, color)?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn dispatch(cmd: Command, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Status(args) => status::handle(session, &args, global).await,
        Command::Health => system::health(session, global).await,
        Command::Metrics => system::metrics(session, global).await,
        Command::Info => system::info(session, global).await,
        Command::Version => system::version(session, global).await,
        Command::Users => activity::users(session, global).await,
        Command::Devices => activity::devices(session, global).await,
        Command::Alerts => activity::alerts(session, global).await,
        Command::Logs(args) => diagnostics::handle(session, args, global).await,
        Command::Simulate(args) => failover::simulate(session, args, global).await,
        Command::Failover(args) => failover::handle(session, args, global).await,
        Command::Images(args) => images::handle(session, args, global).await,
        Command::Ask(args) => ask::handle(session, args, global).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "config and completions are handled before connecting".into(),
        )),
    }
}
