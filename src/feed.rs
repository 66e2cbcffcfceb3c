//! Location status feed — fixed-cadence polling per visible group.
//!
//! DESIGN
//! ======
//! One task per open group polls the live-status endpoint every 10s
//! (override with `RACKBOARD_POLL_INTERVAL_MS`) and emits each snapshot as
//! a [`FeedEvent`] tagged with its group id. Snapshots replace the whole
//! per-group status set; there is no incremental patch, so consumers
//! re-resolve the full grid after every event.
//!
//! ERROR HANDLING
//! ==============
//! A failed poll logs a warning and emits nothing: last-known-good
//! statuses stay on screen and the next tick retries unchanged. There is
//! deliberately no backoff — the cadence is fixed. Dropping the
//! [`StatusFeed`] handle aborts the task, which is how a group's feed dies
//! on navigation away.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::api::RackApi;
use grid::model::WireStatus;

const DEFAULT_POLL_INTERVAL_MS: u64 = 10_000;

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Poll interval from `RACKBOARD_POLL_INTERVAL_MS`, defaulting to 10s.
#[must_use]
pub fn poll_interval() -> Duration {
    Duration::from_millis(env_parse("RACKBOARD_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS))
}

/// One wholesale status snapshot for one group.
#[derive(Debug, Clone)]
pub struct FeedEvent {
    /// The group this snapshot was polled for. Consumers must compare this
    /// against their active group before applying — a slow response for a
    /// previously-viewed group must never overwrite the current one.
    pub group_id: String,
    /// Full replacement set: `location_code → status`.
    pub statuses: std::collections::HashMap<String, WireStatus>,
}

/// Handle to a running poll task. Aborts the task on drop.
#[derive(Debug)]
pub struct StatusFeed {
    group_id: String,
    handle: JoinHandle<()>,
}

impl StatusFeed {
    /// Spawn a poll task for `group_id` at the configured cadence.
    #[must_use]
    pub fn spawn(api: Arc<dyn RackApi>, group_id: impl Into<String>, tx: mpsc::Sender<FeedEvent>) -> Self {
        Self::spawn_with_interval(api, group_id, tx, poll_interval())
    }

    /// Spawn with an explicit interval (tests, CLI overrides).
    #[must_use]
    pub fn spawn_with_interval(
        api: Arc<dyn RackApi>,
        group_id: impl Into<String>,
        tx: mpsc::Sender<FeedEvent>,
        interval: Duration,
    ) -> Self {
        let group_id = group_id.into();
        let task_group = group_id.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                match api.poll_status(&task_group).await {
                    Ok(statuses) => {
                        let event = FeedEvent { group_id: task_group.clone(), statuses };
                        if tx.send(event).await.is_err() {
                            // Receiver gone: the dashboard was dropped.
                            debug!(group_id = %task_group, "status feed channel closed; stopping");
                            break;
                        }
                    }
                    Err(e) => {
                        // Keep last-known-good; next tick retries unchanged.
                        warn!(group_id = %task_group, error = %e, "status poll failed; keeping stale statuses");
                    }
                }
            }
        });

        Self { group_id, handle }
    }

    /// The group this feed polls for.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }
}

impl Drop for StatusFeed {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
