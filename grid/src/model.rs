//! Wire types shared between the engine and the REST boundary.
//!
//! Field names follow the backend's camelCase JSON. Status values are the
//! exact lowercase strings the live-status endpoint emits; anything else
//! fails deserialization and is handled upstream as a failed poll.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A storage location inside one rack group, as stored on the backend.
///
/// Invariant: `(group_id, row, column)` uniquely determines
/// `location_code`. Rows and columns are 1-based. Read-only to the engine
/// except through bulk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RackLocation {
    /// Backend identifier for this location record.
    pub id: String,
    /// The rack group this location belongs to.
    pub group_id: String,
    /// 1-based row within the group.
    pub row: u32,
    /// 1-based column within the group.
    pub column: u32,
    /// Canonical wire code for this location (see [`crate::addressing`]).
    pub location_code: String,
    /// Materials statically assigned to this location. Empty = unconfigured.
    #[serde(default)]
    pub assigned_materials: BTreeSet<String>,
}

/// Live operational status of a location, as reported by the status poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireStatus {
    Available,
    Unavailable,
    /// Wire spelling is `"disable"`, not `"disabled"`.
    Disable,
    Fill,
    WaitFill,
    WaitOutbound,
    /// Some backends echo the derived state back on the live feed. The
    /// resolver treats this as `available` (see [`crate::status::resolve`]).
    Configured,
}

/// Bulk-configuration request: assign `materials` to every location in
/// `location_ids`, atomically, within one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRequest {
    pub location_ids: Vec<String>,
    pub materials: Vec<String>,
    pub group_id: String,
}
