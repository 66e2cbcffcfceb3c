//! Dashboard — ownership of the active group's session and feed.
//!
//! DESIGN
//! ======
//! Exactly one group is visible at a time. Opening a group lists its
//! racks, builds a fresh [`GroupSession`], and spawns its [`StatusFeed`];
//! the previous group's feed is dropped (task aborted) in the same move.
//! All feeds share one event channel, so a snapshot that was already
//! queued when the operator switched groups can still arrive — the pump
//! routes every event through the session's group-id guard and stale ones
//! fall on the floor.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::info;

use crate::api::{ApiError, RackApi};
use crate::feed::{FeedEvent, StatusFeed, poll_interval};
use crate::session::{GroupSession, SubmitError};

const EVENT_CHANNEL_CAPACITY: usize = 16;

struct ActiveGroup {
    session: GroupSession,
    // Held for its Drop: aborts the poll task when the group closes.
    _feed: StatusFeed,
}

/// Owns the active group session, its poll feed, and the event channel.
pub struct Dashboard {
    api: Arc<dyn RackApi>,
    interval: Duration,
    events_tx: mpsc::Sender<FeedEvent>,
    events_rx: mpsc::Receiver<FeedEvent>,
    active: Option<ActiveGroup>,
}

impl Dashboard {
    /// Create a dashboard with the configured poll cadence.
    #[must_use]
    pub fn new(api: Arc<dyn RackApi>) -> Self {
        Self::with_interval(api, poll_interval())
    }

    /// Create a dashboard with an explicit poll cadence.
    #[must_use]
    pub fn with_interval(api: Arc<dyn RackApi>, interval: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        Self { api, interval, events_tx, events_rx, active: None }
    }

    /// Open a group: list racks, build its session, start its feed. Any
    /// previously open group is closed first (selection and feed die with
    /// it).
    ///
    /// # Errors
    ///
    /// Returns the API error if the rack listing fails; the previous
    /// group stays closed in that case.
    pub async fn open_group(&mut self, group_id: &str) -> Result<(), ApiError> {
        self.active = None;
        let racks = self.api.list_racks(group_id).await?;
        info!(group_id = %group_id, racks = racks.len(), "group opened");

        let session = GroupSession::new(group_id, racks);
        let feed = StatusFeed::spawn_with_interval(
            Arc::clone(&self.api),
            group_id,
            self.events_tx.clone(),
            self.interval,
        );
        self.active = Some(ActiveGroup { session, _feed: feed });
        Ok(())
    }

    /// Close the active group, aborting its feed.
    pub fn close_group(&mut self) {
        if let Some(active) = self.active.take() {
            info!(group_id = %active.session.group_id(), "group closed");
        }
    }

    /// The active session, if a group is open.
    #[must_use]
    pub fn session(&self) -> Option<&GroupSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    /// Mutable access to the active session (selection gestures).
    pub fn session_mut(&mut self) -> Option<&mut GroupSession> {
        self.active.as_mut().map(|a| &mut a.session)
    }

    /// Drain all queued feed events into the active session. Returns how
    /// many were applied; stale events count as drained, not applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            if self.route(event) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next feed event and route it. Returns whether it was
    /// applied to the active session. Pending events are drained first.
    pub async fn pump_next(&mut self) -> bool {
        if self.pump() > 0 {
            return true;
        }
        // The dashboard holds a sender, so recv() cannot return None.
        match self.events_rx.recv().await {
            Some(event) => self.route(event),
            None => false,
        }
    }

    /// Submit the active selection with `materials` through the session.
    ///
    /// # Errors
    ///
    /// [`SubmitError::EmptySelection`] when no group is open (nothing can
    /// be selected), otherwise whatever the session's submit returns.
    pub async fn submit(&mut self, materials: Vec<String>) -> Result<(), SubmitError> {
        let api = Arc::clone(&self.api);
        let Some(active) = self.active.as_mut() else {
            return Err(SubmitError::EmptySelection);
        };
        active.session.submit(api.as_ref(), materials).await
    }

    fn route(&mut self, event: FeedEvent) -> bool {
        match self.active.as_mut() {
            Some(active) => active.session.apply_feed(event),
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn events_tx_for_tests(&self) -> mpsc::Sender<FeedEvent> {
        self.events_tx.clone()
    }
}
