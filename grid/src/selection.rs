//! The highlighted-cell selection set.
//!
//! Scoped to one group and cleared on successful submit, explicit cancel,
//! or group change. Row and column toggles collapse to all-or-none: if
//! every present cell on the line is already selected the whole line is
//! deselected, otherwise the whole line is selected — never a per-cell
//! merge of prior partial state.
//!
//! The set is deliberately uncapped. Screens that limit how many cells may
//! be configured at once enforce that policy before calling in.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

/// Set of selected location codes. `BTreeSet` keeps iteration (and thus
/// submitted id order) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    codes: BTreeSet<String>,
}

impl SelectionSet {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Symmetric-difference toggle of a single code. Returns `true` if the
    /// code is selected after the call.
    pub fn toggle(&mut self, code: &str) -> bool {
        if self.codes.remove(code) {
            false
        } else {
            self.codes.insert(code.to_string());
            true
        }
    }

    /// Returns `true` iff `codes` is non-empty and every code is selected.
    pub fn is_fully_selected<'a, I>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut any = false;
        for code in codes {
            if !self.codes.contains(code) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Collapse-toggle a whole line of codes: if fully selected, remove
    /// them all; otherwise select them all (dedup union). Empty input is a
    /// no-op.
    pub fn toggle_line(&mut self, codes: &[String]) {
        if self.is_fully_selected(codes.iter().map(String::as_str)) {
            for code in codes {
                self.codes.remove(code);
            }
        } else {
            for code in codes {
                self.codes.insert(code.clone());
            }
        }
    }

    /// Returns `true` if `code` is currently selected.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Drop every code not accepted by `keep`. Used when a rack list
    /// refresh removes locations that were still highlighted.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&String) -> bool,
    {
        self.codes.retain(keep);
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.codes.clear();
    }

    /// Selected codes in deterministic (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Number of selected codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
