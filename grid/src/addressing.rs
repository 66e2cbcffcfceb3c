//! Canonical location-id addressing.
//!
//! A cell is addressed by its group plus a 1-based `(row, column)` pair.
//! The canonical id is the wire identifier the backend uses for live
//! status and bulk configuration, so the format here must match it byte
//! for byte.

#[cfg(test)]
#[path = "addressing_test.rs"]
mod addressing_test;

/// Canonical id for the cell at `(row, col)` in `group_id`.
///
/// Format: `"{group_id}/{row:02}-{col:02}"`, e.g. `"A01-01/02-03"` for
/// row 2, column 3 of group `A01-01`.
///
/// Total and injective for `row, col` in `1..=99`. Coordinates above 99
/// are out of contract: the two-digit field widens and ids stop being
/// prefix-aligned with backend codes. Callers get garbage-in/garbage-out
/// rather than a panic.
#[must_use]
pub fn canonical_id(group_id: &str, row: u32, col: u32) -> String {
    format!("{group_id}/{row:02}-{col:02}")
}
