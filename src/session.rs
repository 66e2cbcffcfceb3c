//! Per-group session: state machine, staleness guard, and submit flow.
//!
//! DESIGN
//! ======
//! A session is created when a group's grid is opened and dropped when the
//! operator navigates away; it owns that group's [`GridEngine`] and
//! nothing else holds grid state. Poll snapshots arrive as
//! [`FeedEvent`]s and are applied only if their group id still matches —
//! a late response for a previously-viewed group is dropped without a
//! trace beyond a debug line.
//!
//! The phase machine follows the screen: `Empty` (group has no racks) or
//! `Ready`, `Submitting` while a bulk configure is in flight, `Error`
//! after a failed submit. `Error` keeps the selection for retry and
//! behaves like `Ready` for every input; it is replaced by `Ready` on the
//! next applied snapshot, a successful submit, or an explicit dismissal.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracing::{debug, info, warn};

use grid::engine::GridEngine;
use grid::model::{ConfigurationRequest, RackLocation};

use crate::api::{ApiError, RackApi};
use crate::feed::FeedEvent;

/// Where a group's screen currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The group has no rack locations; nothing to render or select.
    Empty,
    /// Grid rendered; selection and submit available.
    Ready,
    /// A bulk configure is in flight; further submits are rejected.
    Submitting,
    /// The last submit failed; message kept, selection kept, retry open.
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("no locations selected")]
    EmptySelection,
    #[error("no materials chosen")]
    EmptyMaterials,
    #[error("a configure request for this group is already in flight")]
    InFlight,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// One group's live session: engine + phase machine.
#[derive(Debug)]
pub struct GroupSession {
    engine: GridEngine,
    phase: SessionPhase,
    last_error: Option<String>,
}

impl GroupSession {
    /// Create a session from a freshly listed rack set.
    #[must_use]
    pub fn new(group_id: impl Into<String>, racks: Vec<RackLocation>) -> Self {
        let engine = GridEngine::from_racks(group_id, racks);
        let phase = if engine.is_empty() { SessionPhase::Empty } else { SessionPhase::Ready };
        Self { engine, phase, last_error: None }
    }

    /// The group this session is scoped to.
    #[must_use]
    pub fn group_id(&self) -> &str {
        self.engine.group_id()
    }

    /// Read access to the engine for rendering and queries.
    #[must_use]
    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Mutable engine access for selection gestures.
    pub fn engine_mut(&mut self) -> &mut GridEngine {
        &mut self.engine
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Message from the last failed submit, if the banner is still up.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Clear the error banner without waiting for the next poll tick.
    pub fn dismiss_error(&mut self) {
        if self.phase == SessionPhase::Error {
            self.phase = self.ready_phase();
            self.last_error = None;
        }
    }

    /// Explicit cancel: drop the highlighted set, keep everything else.
    pub fn cancel_selection(&mut self) {
        self.engine.clear_selection();
    }

    /// Apply a poll snapshot. Returns `false` (and changes nothing) if the
    /// event belongs to another group — the mandatory staleness guard.
    pub fn apply_feed(&mut self, event: FeedEvent) -> bool {
        if event.group_id != self.group_id() {
            debug!(
                event_group = %event.group_id,
                active_group = %self.group_id(),
                "dropping stale status snapshot"
            );
            return false;
        }

        self.engine.apply_statuses(event.statuses);
        if self.phase == SessionPhase::Error {
            self.phase = self.ready_phase();
            self.last_error = None;
        }
        true
    }

    /// Submit the current selection with `materials`.
    ///
    /// Preconditions are enforced before any network call: a non-empty
    /// selection, non-empty materials, and no submit already in flight.
    /// On success the selection is cleared and both data sources are
    /// resynced. On failure the selection is untouched and the session
    /// moves to [`SessionPhase::Error`]; a conflict additionally triggers
    /// a fresh status poll so the operator sees why.
    ///
    /// # Errors
    ///
    /// [`SubmitError::EmptySelection`] / [`SubmitError::EmptyMaterials`] /
    /// [`SubmitError::InFlight`] pre-dispatch, [`SubmitError::Api`] after.
    pub async fn submit(&mut self, api: &dyn RackApi, materials: Vec<String>) -> Result<(), SubmitError> {
        if self.phase == SessionPhase::Submitting {
            return Err(SubmitError::InFlight);
        }

        let location_ids = self.engine.selected_codes();
        if location_ids.is_empty() {
            return Err(SubmitError::EmptySelection);
        }
        if materials.is_empty() {
            return Err(SubmitError::EmptyMaterials);
        }

        let request = ConfigurationRequest {
            location_ids,
            materials,
            group_id: self.group_id().to_string(),
        };

        self.phase = SessionPhase::Submitting;
        info!(group_id = %request.group_id, locations = request.location_ids.len(), "submitting bulk configuration");

        match api.bulk_configure(&request).await {
            Ok(()) => {
                self.engine.clear_selection();
                self.resync(api).await;
                self.phase = self.ready_phase();
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                let conflict = matches!(e, ApiError::Conflict(_));
                self.last_error = Some(e.to_string());
                self.phase = SessionPhase::Error;
                if conflict {
                    self.refresh_statuses(api).await;
                }
                Err(SubmitError::Api(e))
            }
        }
    }

    /// Refresh both data sources after a successful configure. Failures
    /// here only log: the periodic feed repairs statuses on its next tick
    /// and the stale rack list self-corrects on the next open.
    async fn resync(&mut self, api: &dyn RackApi) {
        match api.list_racks(self.group_id()).await {
            Ok(racks) => self.engine.load_racks(racks),
            Err(e) => warn!(group_id = %self.group_id(), error = %e, "rack resync failed after configure"),
        }
        self.refresh_statuses(api).await;
    }

    async fn refresh_statuses(&mut self, api: &dyn RackApi) {
        match api.poll_status(self.group_id()).await {
            Ok(statuses) => self.engine.apply_statuses(statuses),
            Err(e) => warn!(group_id = %self.group_id(), error = %e, "status refresh failed; keeping stale statuses"),
        }
    }

    fn ready_phase(&self) -> SessionPhase {
        if self.engine.is_empty() { SessionPhase::Empty } else { SessionPhase::Ready }
    }
}
