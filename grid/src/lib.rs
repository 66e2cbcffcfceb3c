//! Rack-location grid engine for the warehouse dashboard.
//!
//! This crate is the pure core behind the rack visualization and
//! bulk-configuration workflow: it maps rack coordinates to canonical
//! location ids, assembles a sparse row×column grid from an unordered rack
//! list, merges static material assignment with live per-location status
//! into one display status, and owns the highlighted-cell selection set.
//! It performs no I/O; the polling feed and the configuration submitter
//! live in the `rackboard` crate and drive this engine with plain data.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`addressing`] | Coordinate ↔ canonical location-id mapping |
//! | [`model`] | Wire types: rack locations, live statuses, configure requests |
//! | [`layout`] | Sparse grid assembly from an unordered rack list |
//! | [`status`] | Display-status derivation (live feed × static assignment) |
//! | [`selection`] | Highlighted-cell set with row/column toggle rules |
//! | [`engine`] | [`engine::GridEngine`] — the facade both renderers consume |

pub mod addressing;
pub mod engine;
pub mod layout;
pub mod model;
pub mod selection;
pub mod status;
