//! Display-status derivation.
//!
//! Two independently-refreshed sources meet here: the static rack record
//! (does this location have assigned materials?) and the live per-location
//! status poll. The merge rule is fixed: the live feed is authoritative
//! for operational states, and static assignment may only upgrade the
//! neutral `available` state to `configured` — never override an active
//! state like `fill` or `disable`.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::model::{RackLocation, WireStatus};

/// What a cell renders as. Derived per refresh, never persisted.
///
/// `Absent` is a placeholder for coordinates with no backing rack record.
/// It is not a wire value and absent cells are never selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Absent,
    Available,
    Unavailable,
    Disabled,
    Fill,
    WaitFill,
    WaitOutbound,
    Configured,
}

impl DisplayStatus {
    /// Absent cells cannot be toggled into a selection.
    #[must_use]
    pub fn is_selectable(self) -> bool {
        self != DisplayStatus::Absent
    }
}

/// Derive the display status for one cell.
///
/// Pure function of its two inputs:
/// 1. no rack at this coordinate → [`DisplayStatus::Absent`];
/// 2. base = live status, defaulting to `available` when the poll has no
///    entry for this code; a live `configured` is normalized to
///    `available` first (tolerated, not an error);
/// 3. base `available` with non-empty assigned materials → `Configured`;
/// 4. anything else passes through unchanged.
#[must_use]
pub fn resolve(rack: Option<&RackLocation>, live: Option<WireStatus>) -> DisplayStatus {
    let Some(rack) = rack else {
        return DisplayStatus::Absent;
    };

    let base = match live.unwrap_or(WireStatus::Available) {
        WireStatus::Configured => WireStatus::Available,
        other => other,
    };

    match base {
        WireStatus::Available => {
            if rack.assigned_materials.is_empty() {
                DisplayStatus::Available
            } else {
                DisplayStatus::Configured
            }
        }
        WireStatus::Unavailable => DisplayStatus::Unavailable,
        WireStatus::Disable => DisplayStatus::Disabled,
        WireStatus::Fill => DisplayStatus::Fill,
        WireStatus::WaitFill => DisplayStatus::WaitFill,
        WireStatus::WaitOutbound => DisplayStatus::WaitOutbound,
        // Normalized away above.
        WireStatus::Configured => DisplayStatus::Available,
    }
}
