//! The grid engine — one implementation behind both renderers.
//!
//! DESIGN
//! ======
//! The table-oriented screen and the map-oriented screen historically
//! duplicated this logic; here both consume the same engine. The engine is
//! an explicit object with create-on-mount / dispose-on-unmount lifecycle,
//! scoped to one group, so no state can bleed across group switches. The
//! boundary layer feeds it plain data: a rack list on (re)load and a
//! wholesale live-status snapshot on every poll tick.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::HashMap;

use crate::layout::GridLayout;
use crate::model::{RackLocation, WireStatus};
use crate::selection::SelectionSet;
use crate::status::{self, DisplayStatus};

/// One renderable cell, derived on demand. Never stored.
#[derive(Debug, Clone, Copy)]
pub struct EffectiveCell<'a> {
    /// 1-based row of this cell.
    pub row: u32,
    /// 1-based column of this cell.
    pub column: u32,
    /// Derived display status (see [`crate::status::resolve`]).
    pub status: DisplayStatus,
    /// The backing rack record, absent for placeholder cells.
    pub rack: Option<&'a RackLocation>,
}

impl EffectiveCell<'_> {
    /// Canonical location code, if this cell has a backing rack.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.rack.map(|r| r.location_code.as_str())
    }

    /// Whether this cell is currently highlighted.
    #[must_use]
    pub fn is_selected(&self, engine: &GridEngine) -> bool {
        self.code().is_some_and(|c| engine.selection().contains(c))
    }
}

/// Grid state for one rack group: layout, latest live statuses, selection.
#[derive(Debug, Clone, Default)]
pub struct GridEngine {
    layout: GridLayout,
    live: HashMap<String, WireStatus>,
    selection: SelectionSet,
}

impl GridEngine {
    /// Build an engine from a group's rack list.
    #[must_use]
    pub fn from_racks(group_id: impl Into<String>, racks: Vec<RackLocation>) -> Self {
        Self {
            layout: GridLayout::from_racks(group_id, racks),
            live: HashMap::new(),
            selection: SelectionSet::new(),
        }
    }

    /// The group this engine is scoped to.
    #[must_use]
    pub fn group_id(&self) -> &str {
        self.layout.group_id()
    }

    /// The assembled layout.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns `true` if the group has no rack locations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    // --- Data inputs ---

    /// Replace the rack list (same group), e.g. after a bulk configure.
    ///
    /// The selection keeps codes that still exist and silently drops codes
    /// whose locations vanished in the refresh. Live statuses are kept;
    /// the next poll tick replaces them anyway.
    pub fn load_racks(&mut self, racks: Vec<RackLocation>) {
        self.layout = GridLayout::from_racks(self.layout.group_id().to_string(), racks);
        let layout = &self.layout;
        self.selection.retain(|code| layout.contains_code(code));
    }

    /// Replace the entire live-status set with a fresh poll snapshot.
    /// There is no incremental merge: codes missing from `statuses` fall
    /// back to the `available` default at resolve time.
    pub fn apply_statuses(&mut self, statuses: HashMap<String, WireStatus>) {
        self.live = statuses;
    }

    // --- Queries ---

    /// Derive the cell at `(row, col)`.
    #[must_use]
    pub fn cell(&self, row: u32, col: u32) -> EffectiveCell<'_> {
        let rack = self.layout.rack_at(row, col);
        let live = rack.and_then(|r| self.live.get(&r.location_code).copied());
        EffectiveCell { row, column: col, status: status::resolve(rack, live), rack }
    }

    /// Derive the full grid in row-major order (the table renderer's
    /// shape). Empty layout yields no rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<EffectiveCell<'_>>> {
        (1..=self.layout.max_row())
            .map(|row| (1..=self.layout.max_col()).map(|col| self.cell(row, col)).collect())
            .collect()
    }

    /// Selected location codes in deterministic order.
    #[must_use]
    pub fn selected_codes(&self) -> Vec<String> {
        self.selection.iter().map(str::to_string).collect()
    }

    // --- Selection mutations ---

    /// Toggle a single cell by location code. Codes not present in the
    /// layout (absent placeholders, stale codes) are ignored. Returns
    /// `true` if the selection changed.
    pub fn toggle_cell(&mut self, code: &str) -> bool {
        if !self.layout.contains_code(code) {
            return false;
        }
        self.selection.toggle(code);
        true
    }

    /// Collapse-toggle every present cell in `row`.
    pub fn toggle_row(&mut self, row: u32) {
        let codes = self.layout.codes_in_row(row);
        self.selection.toggle_line(&codes);
    }

    /// Collapse-toggle every present cell in `col`.
    pub fn toggle_column(&mut self, col: u32) {
        let codes = self.layout.codes_in_column(col);
        self.selection.toggle_line(&codes);
    }

    /// Whether every present cell in `row` is selected (false for a row
    /// with no present cells).
    #[must_use]
    pub fn is_row_fully_selected(&self, row: u32) -> bool {
        let codes = self.layout.codes_in_row(row);
        self.selection.is_fully_selected(codes.iter().map(String::as_str))
    }

    /// Whether every present cell in `col` is selected (false for a column
    /// with no present cells).
    #[must_use]
    pub fn is_column_fully_selected(&self, col: u32) -> bool {
        let codes = self.layout.codes_in_column(col);
        self.selection.is_fully_selected(codes.iter().map(String::as_str))
    }

    /// Empty the selection (submit success, cancel, group change).
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}
