//! Grid assembly: an unordered rack list becomes an addressable layout.
//!
//! The backend returns a group's locations as a flat list in no particular
//! order, and not every `(row, column)` pair is present — racks get
//! decommissioned, aisles cut through blocks. The layout keeps two
//! indexes (by location code and by coordinate) plus the row/column
//! maxima that size the rendered grid.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashMap;

use crate::model::RackLocation;

/// Assembled row×column layout for one rack group.
///
/// Missing coordinates are simply absent from the indexes; the engine
/// renders them as absent placeholders, never as available locations.
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    group_id: String,
    max_row: u32,
    max_col: u32,
    by_code: HashMap<String, RackLocation>,
    by_coord: HashMap<(u32, u32), String>,
}

impl GridLayout {
    /// Assemble a layout from an unordered rack list.
    ///
    /// An empty list yields a 0×0 layout. If two records claim the same
    /// coordinate (an upstream invariant violation), the later one wins.
    #[must_use]
    pub fn from_racks(group_id: impl Into<String>, racks: Vec<RackLocation>) -> Self {
        let mut layout = Self { group_id: group_id.into(), ..Self::default() };
        for rack in racks {
            layout.max_row = layout.max_row.max(rack.row);
            layout.max_col = layout.max_col.max(rack.column);
            layout.by_coord.insert((rack.row, rack.column), rack.location_code.clone());
            layout.by_code.insert(rack.location_code.clone(), rack);
        }
        layout
    }

    /// The rack group this layout was assembled for.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Highest row number present, or 0 for an empty layout.
    #[must_use]
    pub fn max_row(&self) -> u32 {
        self.max_row
    }

    /// Highest column number present, or 0 for an empty layout.
    #[must_use]
    pub fn max_col(&self) -> u32 {
        self.max_col
    }

    /// Number of present locations (not `max_row × max_col` — sparse).
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Returns `true` if the layout holds no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// The rack at `(row, col)`, if one is present.
    #[must_use]
    pub fn rack_at(&self, row: u32, col: u32) -> Option<&RackLocation> {
        let code = self.by_coord.get(&(row, col))?;
        self.by_code.get(code)
    }

    /// Look up a rack by its location code.
    #[must_use]
    pub fn rack_by_code(&self, code: &str) -> Option<&RackLocation> {
        self.by_code.get(code)
    }

    /// Returns `true` if `code` is a present location in this layout.
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Codes of present racks along `row`, ordered by column.
    #[must_use]
    pub fn codes_in_row(&self, row: u32) -> Vec<String> {
        (1..=self.max_col)
            .filter_map(|col| self.by_coord.get(&(row, col)).cloned())
            .collect()
    }

    /// Codes of present racks along `col`, ordered by row.
    #[must_use]
    pub fn codes_in_column(&self, col: u32) -> Vec<String> {
        (1..=self.max_row)
            .filter_map(|row| self.by_coord.get(&(row, col)).cloned())
            .collect()
    }
}
