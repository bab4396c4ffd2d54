// ── Dashboard state ──
//
// The single owner of session, region, status, loading, modal, and search
// state. Every mutation goes through a method on `Dashboard`; background
// work (polling, action requests) reports back as `DashboardEvent`s on an
// internal channel which the UI drains with `pump` or `next_event`.
//
// Two tokens keep late responses from clobbering newer state:
// `poll_epoch` increments whenever the poll target changes or stops, and
// `latest_request` increments on every dispatched action.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use sreboard_api::StatusSnapshot;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use url::Url;

use crate::action::{DashboardAction, failover_target, run_action};
use crate::auth::{CredentialVerifier, LoginForm};
use crate::backend::Backend;
use crate::config::DashboardConfig;
use crate::error::CoreError;
use crate::modal::Modal;
use crate::poller::{PollHandle, fetch_status, spawn_status_poller};
use crate::region::Region;

/// Title of the modal shown for a blank image search.
pub const EMPTY_SEARCH_TITLE: &str = "Image Search";

/// Results from background work, applied with [`Dashboard::apply`].
#[derive(Debug)]
pub enum DashboardEvent {
    StatusFetched {
        epoch: u64,
        region: Region,
        result: Result<StatusSnapshot, CoreError>,
    },
    ActionCompleted {
        request_id: u64,
        action: DashboardAction,
        result: Result<Value, CoreError>,
    },
}

/// Editable text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Username,
    Password,
    SearchQuery,
}

pub struct Dashboard<B: Backend> {
    backend: Arc<B>,
    verifier: Arc<dyn CredentialVerifier>,
    config: DashboardConfig,
    events_tx: mpsc::UnboundedSender<DashboardEvent>,
    events_rx: mpsc::UnboundedReceiver<DashboardEvent>,

    // ── Session ──
    logged_in: bool,
    login_form: LoginForm,
    login_error: Option<String>,

    // ── Dashboard ──
    region: Region,
    status: Option<StatusSnapshot>,
    loading: bool,
    modal: Option<Modal>,
    search_query: String,

    // ── Background work ──
    poller: Option<PollHandle>,
    poll_epoch: u64,
    latest_request: u64,
}

impl<B: Backend> Dashboard<B> {
    pub fn new(config: DashboardConfig, backend: Arc<B>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            backend,
            verifier,
            region: config.initial_region,
            config,
            events_tx,
            events_rx,
            logged_in: false,
            login_form: LoginForm::default(),
            login_error: None,
            status: None,
            loading: false,
            modal: None,
            search_query: String::new(),
            poller: None,
            poll_epoch: 0,
            latest_request: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login_form
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Base URL for the active region.
    pub fn base_url(&self) -> &Url {
        self.config.endpoints.base_url(self.region)
    }

    pub fn status(&self) -> Option<&StatusSnapshot> {
        self.status.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// True while a poll schedule is live.
    pub fn is_polling(&self) -> bool {
        self.poller.is_some()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    // ── Inputs ───────────────────────────────────────────────────────

    /// Current text of an input. The password is exposed so the form can
    /// be edited; render it masked.
    pub fn input(&self, field: InputField) -> &str {
        match field {
            InputField::Username => &self.login_form.username,
            InputField::Password => self.login_form.password.expose_secret(),
            InputField::SearchQuery => &self.search_query,
        }
    }

    pub fn update_input(&mut self, field: InputField, value: impl Into<String>) {
        let value = value.into();
        match field {
            InputField::Username => self.login_form.username = value,
            InputField::Password => self.login_form.password = SecretString::from(value),
            InputField::SearchQuery => self.search_query = value,
        }
    }

    // ── Session gate ─────────────────────────────────────────────────

    /// Log in with whatever is in the form.
    pub fn submit_login(&mut self) -> Result<(), CoreError> {
        let username = self.login_form.username.clone();
        let password = self.login_form.password.expose_secret().to_owned();
        self.login(&username, &password)
    }

    /// Open a session iff the verifier accepts the pair. Starts polling.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), CoreError> {
        if !self.verifier.verify(username, password) {
            let message = self.verifier.rejection_message();
            info!(username, "login rejected");
            self.login_error = Some(message.clone());
            return Err(CoreError::InvalidCredentials { message });
        }

        self.login_error = None;
        if !self.logged_in {
            self.logged_in = true;
            info!(username, region = %self.region, "session started");
            self.restart_poller();
        }
        Ok(())
    }

    /// End the session, stop polling, and clear the credential fields.
    /// Region, status, modal, and search state are left as they are.
    pub fn logout(&mut self) {
        self.stop_poller();
        if self.logged_in {
            info!("session ended");
        }
        self.logged_in = false;
        self.login_form.clear();
    }

    // ── Region selector ──────────────────────────────────────────────

    /// Switch regions. While logged in this retargets the poller: the old
    /// schedule is cancelled before the new one starts. Re-selecting the
    /// active region is a no-op.
    pub fn select_region(&mut self, region: Region) {
        if region == self.region {
            return;
        }
        self.region = region;
        info!(%region, base_url = %self.base_url(), "active region changed");
        if self.logged_in {
            self.restart_poller();
        }
    }

    // ── Action dispatcher ────────────────────────────────────────────

    /// Start one action against the active region. The result arrives as a
    /// [`DashboardEvent::ActionCompleted`].
    ///
    /// A blank image search never reaches the network: it opens the
    /// "Image Search" error modal and returns `EmptySearchQuery`.
    pub fn dispatch(&mut self, action: DashboardAction) -> Result<(), CoreError> {
        if !self.logged_in {
            return Err(CoreError::SessionInactive);
        }

        if let Err(e) = action.validate() {
            self.modal = Some(Modal::error(EMPTY_SEARCH_TITLE, "Please enter a search query"));
            return Err(e);
        }

        if action == DashboardAction::RefreshStatus {
            self.refresh_status();
            return Ok(());
        }

        self.latest_request += 1;
        self.loading = true;
        let request_id = self.latest_request;
        let region = self.region;
        let base_url = self.base_url().clone();
        let backend = Arc::clone(&self.backend);
        let events = self.events_tx.clone();
        debug!(request_id, action = ?action, %region, "dispatching action");

        tokio::spawn(async move {
            let result = run_action(backend.as_ref(), &base_url, region, &action).await;
            let _ = events.send(DashboardEvent::ActionCompleted {
                request_id,
                action,
                result,
            });
        });
        Ok(())
    }

    /// Image search using the search input.
    pub fn search_images(&mut self) -> Result<(), CoreError> {
        let query = self.search_query.clone();
        self.dispatch(DashboardAction::ImageSearch { query })
    }

    /// One out-of-band status fetch. No modal, no loading flag; the result
    /// is tagged with the current poll epoch like any scheduled fetch.
    fn refresh_status(&mut self) {
        let epoch = self.poll_epoch;
        let region = self.region;
        let base_url = self.base_url().clone();
        let backend = Arc::clone(&self.backend);
        let events = self.events_tx.clone();

        tokio::spawn(async move {
            let result = fetch_status(backend.as_ref(), &base_url).await;
            let _ = events.send(DashboardEvent::StatusFetched {
                epoch,
                region,
                result,
            });
        });
    }

    // ── Modal presenter ──────────────────────────────────────────────

    pub fn show_modal(&mut self, title: impl Into<String>, payload: Value) {
        self.modal = Some(Modal::new(title, payload));
    }

    /// Dismiss the modal and re-enable the actions. A request still in
    /// flight is not cancelled; its result opens a fresh modal.
    pub fn close_modal(&mut self) {
        self.modal = None;
        self.loading = false;
    }

    // ── Event loop ───────────────────────────────────────────────────

    /// Apply every event that is already waiting. Returns how many were
    /// processed.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next event and apply it.
    pub async fn process_next(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.apply(event);
        }
    }

    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::StatusFetched {
                epoch,
                region,
                result,
            } => self.apply_status(epoch, region, result),
            DashboardEvent::ActionCompleted {
                request_id,
                action,
                result,
            } => self.apply_action(request_id, &action, result),
        }
    }

    fn apply_status(&mut self, epoch: u64, region: Region, result: Result<StatusSnapshot, CoreError>) {
        if epoch != self.poll_epoch || region != self.region {
            debug!(epoch, current = self.poll_epoch, %region, "discarding stale status");
            return;
        }
        match result {
            Ok(snapshot) => self.status = Some(snapshot),
            // Swallowed: the previous snapshot stays on screen.
            Err(e) => debug!(error = %e, "status unchanged after failed fetch"),
        }
    }

    fn apply_action(&mut self, request_id: u64, action: &DashboardAction, result: Result<Value, CoreError>) {
        if request_id != self.latest_request {
            debug!(request_id, latest = self.latest_request, "discarding stale action result");
            return;
        }
        self.loading = false;

        match result {
            Ok(body) => {
                let target = if *action == DashboardAction::SimulateFailover {
                    failover_target(&body)
                } else {
                    None
                };
                self.modal = Some(Modal::new(action.title(), body));
                if let Some(region) = target {
                    self.select_region(region);
                }
            }
            Err(e) => {
                warn!(error = %e, action = action.title(), "action failed");
                self.modal = Some(Modal::error(action.title(), action.failure_message()));
            }
        }
    }

    // ── Poller lifecycle ─────────────────────────────────────────────

    fn restart_poller(&mut self) {
        self.stop_poller();
        let handle = spawn_status_poller(
            Arc::clone(&self.backend),
            self.region,
            self.base_url().clone(),
            self.config.poll_interval,
            self.poll_epoch,
            self.events_tx.clone(),
        );
        self.poller = Some(handle);
    }

    /// Cancel the live schedule (if any) and invalidate its epoch.
    fn stop_poller(&mut self) {
        if let Some(handle) = self.poller.take() {
            handle.cancel();
        }
        self.poll_epoch += 1;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sreboard_api::Endpoint;

    use super::*;
    use crate::auth::StaticCredentials;
    use crate::region::RegionEndpoints;

    // ── Fake backend ─────────────────────────────────────────────────

    #[derive(Default)]
    struct FakeBackend {
        calls: Mutex<Vec<(String, Endpoint)>>,
        bodies: Mutex<Vec<(String, Value)>>,
        failing: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        fn respond(&self, path: &str, body: Value) {
            self.bodies.lock().unwrap().push((path.to_owned(), body));
        }

        fn fail(&self, path: &str) {
            self.failing.lock().unwrap().push(path.to_owned());
        }

        fn calls_to(&self, host: &str, path: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|(h, ep)| h == host && ep.path() == path)
                .count()
        }

        fn total_calls(&self, path: &str) -> usize {
            self.calls.lock().unwrap().iter().filter(|(_, ep)| ep.path() == path).count()
        }
    }

    impl Backend for FakeBackend {
        async fn send(&self, base_url: &Url, endpoint: &Endpoint) -> Result<Value, CoreError> {
            let host = base_url.host_str().unwrap_or_default().to_owned();
            let path = endpoint.path();
            self.calls.lock().unwrap().push((host.clone(), endpoint.clone()));

            if self.failing.lock().unwrap().contains(&path) {
                return Err(CoreError::Api {
                    message: "Internal Server Error".into(),
                    status: Some(500),
                });
            }
            let scripted = self
                .bodies
                .lock()
                .unwrap()
                .iter()
                .find(|(p, _)| *p == path)
                .map(|(_, body)| body.clone());
            Ok(scripted.unwrap_or_else(|| {
                json!({
                    "region": host,
                    "status": "healthy",
                    "version": "v1",
                    "active_devices": 3,
                    "active_users": 2
                })
            }))
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────

    const STATUS: &str = "/api/status";

    fn config() -> DashboardConfig {
        DashboardConfig {
            endpoints: RegionEndpoints::new(
                "http://one.test".parse().unwrap(),
                "http://two.test".parse().unwrap(),
            ),
            ..DashboardConfig::default()
        }
    }

    fn dashboard() -> (Dashboard<FakeBackend>, Arc<FakeBackend>) {
        let backend = Arc::new(FakeBackend::default());
        let dash = Dashboard::new(config(), Arc::clone(&backend), Arc::new(StaticCredentials::demo()));
        (dash, backend)
    }

    /// Let spawned tasks run, then apply what they produced.
    async fn settle(dash: &mut Dashboard<FakeBackend>) {
        tokio::time::sleep(Duration::from_millis(1)).await;
        dash.pump();
    }

    // ── Session gate ─────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn login_accepts_only_the_fixed_pair() {
        let (mut dash, _) = dashboard();

        let err = dash.login("admin", "wrong").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCredentials { .. }));
        assert_eq!(dash.login_error(), Some("Invalid credentials. Use admin / admin123"));
        assert!(!dash.is_logged_in());
        assert!(!dash.is_polling());

        dash.login("admin", "admin123").unwrap();
        assert!(dash.is_logged_in());
        assert_eq!(dash.login_error(), None);
        assert!(dash.is_polling());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_login_reads_the_form() {
        let (mut dash, _) = dashboard();
        dash.update_input(InputField::Username, "admin");
        dash.update_input(InputField::Password, "admin123");
        dash.submit_login().unwrap();
        assert!(dash.is_logged_in());
    }

    #[tokio::test(start_paused = true)]
    async fn logout_clears_fields_but_keeps_dashboard_state() {
        let (mut dash, _) = dashboard();
        dash.update_input(InputField::Username, "admin");
        dash.update_input(InputField::Password, "admin123");
        dash.submit_login().unwrap();
        dash.update_input(InputField::SearchQuery, "pumps");
        dash.show_modal("Active Users", json!({ "users": [] }));
        dash.select_region(Region::Region2);

        dash.logout();

        assert!(!dash.is_logged_in());
        assert!(!dash.is_polling());
        assert_eq!(dash.input(InputField::Username), "");
        assert_eq!(dash.input(InputField::Password), "");
        assert_eq!(dash.search_query(), "pumps");
        assert_eq!(dash.region(), Region::Region2);
        assert!(dash.modal().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn logout_when_logged_out_still_clears_fields() {
        let (mut dash, _) = dashboard();
        dash.update_input(InputField::Username, "someone");
        dash.logout();
        assert_eq!(dash.input(InputField::Username), "");
    }

    // ── Poller cadence ───────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn no_polling_without_session() {
        let (_dash, backend) = dashboard();
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(backend.total_calls(STATUS), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn polls_immediately_then_every_five_seconds() {
        let (mut dash, backend) = dashboard();
        dash.login("admin", "admin123").unwrap();

        settle(&mut dash).await;
        assert_eq!(backend.total_calls(STATUS), 1);
        assert_eq!(dash.status().unwrap().active_devices, 3);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(backend.total_calls(STATUS), 2);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(backend.total_calls(STATUS), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn logout_cancels_the_schedule() {
        let (mut dash, backend) = dashboard();
        dash.login("admin", "admin123").unwrap();
        settle(&mut dash).await;
        assert_eq!(backend.total_calls(STATUS), 1);

        dash.logout();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(backend.total_calls(STATUS), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn region_change_retargets_polling() {
        let (mut dash, backend) = dashboard();
        dash.login("admin", "admin123").unwrap();
        settle(&mut dash).await;
        assert_eq!(backend.calls_to("one.test", STATUS), 1);

        dash.select_region(Region::Region2);
        assert_eq!(dash.base_url().host_str(), Some("two.test"));
        settle(&mut dash).await;
        assert_eq!(backend.calls_to("two.test", STATUS), 1);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(backend.calls_to("one.test", STATUS), 1);
        assert_eq!(backend.calls_to("two.test", STATUS), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn reselecting_region_keeps_schedule() {
        let (mut dash, _) = dashboard();
        dash.login("admin", "admin123").unwrap();
        let epoch = dash.poll_epoch;
        dash.select_region(Region::Region1);
        assert_eq!(dash.poll_epoch, epoch);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_status_is_discarded() {
        let (mut dash, _) = dashboard();
        dash.login("admin", "admin123").unwrap();
        let old_epoch = dash.poll_epoch;
        dash.select_region(Region::Region2);

        dash.apply(DashboardEvent::StatusFetched {
            epoch: old_epoch,
            region: Region::Region1,
            result: Ok(StatusSnapshot {
                region: "region1".into(),
                ..StatusSnapshot::default()
            }),
        });
        assert_eq!(dash.status(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_poll_keeps_previous_snapshot() {
        let (mut dash, backend) = dashboard();
        dash.login("admin", "admin123").unwrap();
        settle(&mut dash).await;
        let before = dash.status().cloned();
        assert!(before.is_some());

        backend.fail(STATUS);
        tokio::time::sleep(Duration::from_secs(5)).await;
        dash.pump();
        assert_eq!(dash.status().cloned(), before);
        assert!(dash.modal().is_none());
    }

    // ── Dispatcher ───────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn dispatch_requires_session() {
        let (mut dash, backend) = dashboard();
        let err = dash.dispatch(DashboardAction::ActiveUsers).unwrap_err();
        assert!(matches!(err, CoreError::SessionInactive));
        settle(&mut dash).await;
        assert_eq!(backend.total_calls("/api/users/active"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn success_opens_titled_modal() {
        let (mut dash, backend) = dashboard();
        backend.respond("/api/users/active", json!({ "users": ["a", "b"] }));
        dash.login("admin", "admin123").unwrap();

        dash.dispatch(DashboardAction::ActiveUsers).unwrap();
        assert!(dash.is_loading());
        settle(&mut dash).await;

        assert!(!dash.is_loading());
        let modal = dash.modal().unwrap();
        assert_eq!(modal.title(), "Active Users");
        assert_eq!(modal.payload(), &json!({ "users": ["a", "b"] }));
    }

    #[tokio::test(start_paused = true)]
    async fn failure_opens_error_placeholder() {
        let (mut dash, backend) = dashboard();
        backend.fail("/api/diagnostics/logs/stats");
        dash.login("admin", "admin123").unwrap();

        dash.dispatch(DashboardAction::LogDiagnostics).unwrap();
        settle(&mut dash).await;

        assert!(!dash.is_loading());
        let modal = dash.modal().unwrap();
        assert_eq!(modal.title(), "Log Diagnostics");
        assert_eq!(modal.payload(), &json!({ "error": "Failed to fetch log stats" }));
    }

    #[tokio::test(start_paused = true)]
    async fn blank_search_never_hits_the_network() {
        let (mut dash, backend) = dashboard();
        dash.login("admin", "admin123").unwrap();
        dash.update_input(InputField::SearchQuery, "   \t ");

        let err = dash.search_images().unwrap_err();
        assert!(matches!(err, CoreError::EmptySearchQuery));
        settle(&mut dash).await;

        assert_eq!(backend.total_calls("/api/images/search"), 0);
        assert!(!dash.is_loading());
        let modal = dash.modal().unwrap();
        assert_eq!(modal.title(), "Image Search");
        assert_eq!(modal.payload(), &json!({ "error": "Please enter a search query" }));
    }

    #[tokio::test(start_paused = true)]
    async fn failover_adopts_target_region() {
        let (mut dash, backend) = dashboard();
        backend.respond(
            "/api/failover/simulate",
            json!({ "status": "failover_initiated", "source_region": "region1", "target_region": "region2" }),
        );
        dash.login("admin", "admin123").unwrap();
        settle(&mut dash).await;

        dash.dispatch(DashboardAction::SimulateFailover).unwrap();
        settle(&mut dash).await;

        assert_eq!(dash.region(), Region::Region2);
        assert_eq!(dash.modal().unwrap().title(), "Failover Simulation");
        settle(&mut dash).await;
        assert_eq!(backend.calls_to("two.test", STATUS), 1);

        dash.dispatch(DashboardAction::ActiveDevices).unwrap();
        settle(&mut dash).await;
        assert_eq!(backend.calls_to("two.test", "/api/devices/active"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failover_with_unknown_target_keeps_region() {
        let (mut dash, backend) = dashboard();
        backend.respond("/api/failover/simulate", json!({ "target_region": "mars" }));
        dash.login("admin", "admin123").unwrap();

        dash.dispatch(DashboardAction::SimulateFailover).unwrap();
        settle(&mut dash).await;

        assert_eq!(dash.region(), Region::Region1);
        assert_eq!(dash.modal().unwrap().title(), "Failover Simulation");
    }

    #[tokio::test(start_paused = true)]
    async fn only_latest_action_result_is_shown() {
        let (mut dash, _) = dashboard();
        dash.login("admin", "admin123").unwrap();

        dash.dispatch(DashboardAction::ActiveUsers).unwrap();
        dash.dispatch(DashboardAction::DeploymentVersion).unwrap();
        settle(&mut dash).await;

        assert!(!dash.is_loading());
        assert_eq!(dash.modal().unwrap().title(), "Deployment Version");
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_updates_status_without_modal() {
        let (mut dash, backend) = dashboard();
        dash.login("admin", "admin123").unwrap();
        settle(&mut dash).await;

        dash.dispatch(DashboardAction::RefreshStatus).unwrap();
        assert!(!dash.is_loading());
        settle(&mut dash).await;

        assert_eq!(backend.total_calls(STATUS), 2);
        assert!(dash.modal().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn close_modal_clears_it() {
        let (mut dash, _) = dashboard();
        dash.show_modal("Active Users", json!({}));
        dash.close_modal();
        assert!(dash.modal().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn close_modal_reenables_actions_while_request_in_flight() {
        let (mut dash, _) = dashboard();
        dash.login("admin", "admin123").unwrap();
        dash.show_modal("Active Users", json!({}));

        dash.dispatch(DashboardAction::ActiveDevices).unwrap();
        assert!(dash.is_loading());
        dash.close_modal();
        assert!(!dash.is_loading());
        assert!(dash.modal().is_none());

        settle(&mut dash).await;
        assert!(!dash.is_loading());
        assert_eq!(dash.modal().unwrap().title(), "Active Devices");
    }
}
