// ── Status poller ──
//
// One task per (session, region) pair. The task fetches immediately, then
// on a fixed cadence, until its token is cancelled. Each handle carries an
// epoch so results from a cancelled schedule can be recognised and dropped
// even if they were already in flight.

use std::sync::Arc;
use std::time::Duration;

use sreboard_api::{Endpoint, StatusSnapshot};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use crate::backend::Backend;
use crate::config::MIN_POLL_INTERVAL;
use crate::dashboard::DashboardEvent;
use crate::error::CoreError;
use crate::region::Region;

/// Handle to a running poll schedule. Dropping it cancels the schedule.
#[derive(Debug)]
pub struct PollHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
    region: Region,
    epoch: u64,
}

impl PollHandle {
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Stop the schedule. No fetch is started after this returns, and an
    /// in-flight fetch is abandoned at its next await point.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Fetch `/api/status` once and decode it.
pub async fn fetch_status<B: Backend>(backend: &B, base_url: &Url) -> Result<StatusSnapshot, CoreError> {
    let body = backend.send(base_url, &Endpoint::Status).await?;
    serde_json::from_value(body)
        .map_err(|e| CoreError::Internal(format!("Malformed status payload: {e}")))
}

/// Start polling `base_url` every `interval`, first fetch immediately.
///
/// Results are delivered as [`DashboardEvent::StatusFetched`] tagged with
/// `epoch`. The task exits when cancelled or when the receiver is gone.
pub fn spawn_status_poller<B: Backend>(
    backend: Arc<B>,
    region: Region,
    base_url: Url,
    interval: Duration,
    epoch: u64,
    events: mpsc::UnboundedSender<DashboardEvent>,
) -> PollHandle {
    let cancel = CancellationToken::new();
    let interval = interval.max(MIN_POLL_INTERVAL);
    let task = tokio::spawn(poll_task(
        backend,
        region,
        base_url,
        interval,
        epoch,
        events,
        cancel.clone(),
    ));
    debug!(%region, epoch, ?interval, "status poller started");

    PollHandle {
        cancel,
        task,
        region,
        epoch,
    }
}

async fn poll_task<B: Backend>(
    backend: Arc<B>,
    region: Region,
    base_url: Url,
    interval: Duration,
    epoch: u64,
    events: mpsc::UnboundedSender<DashboardEvent>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            result = fetch_status(backend.as_ref(), &base_url) => result,
        };

        if let Err(ref e) = result {
            warn!(error = %e, %region, "status poll failed");
        }

        if events
            .send(DashboardEvent::StatusFetched {
                epoch,
                region,
                result,
            })
            .is_err()
        {
            break;
        }
    }

    debug!(%region, epoch, "status poller stopped");
}
