//! Terminal renderers over one [`GridEngine`].
//!
//! Two views, same engine: [`table`] draws the row×column grid the way the
//! rack-table screen does, [`map`] lists present locations the way the
//! rack-map screen does. Neither holds state; both derive everything per
//! call.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use grid::engine::GridEngine;
use grid::status::DisplayStatus;

/// One-character glyph per display status.
#[must_use]
pub fn glyph(status: DisplayStatus) -> char {
    match status {
        DisplayStatus::Absent => '·',
        DisplayStatus::Available => '.',
        DisplayStatus::Unavailable => 'x',
        DisplayStatus::Disabled => 'D',
        DisplayStatus::Fill => 'F',
        DisplayStatus::WaitFill => 'f',
        DisplayStatus::WaitOutbound => 'o',
        DisplayStatus::Configured => 'C',
    }
}

/// Row×column grid with axes; selected cells carry a `*` marker.
#[must_use]
pub fn table(engine: &GridEngine) -> String {
    let mut out = String::new();
    if engine.is_empty() {
        let _ = writeln!(out, "group {}: no rack locations", engine.group_id());
        return out;
    }

    let _ = write!(out, "    ");
    for col in 1..=engine.layout().max_col() {
        let _ = write!(out, "{col:02} ");
    }
    let _ = writeln!(out);

    for row in engine.rows() {
        let _ = write!(out, "{:02}  ", row[0].row);
        for cell in row {
            let marker = if cell.is_selected(engine) { '*' } else { ' ' };
            let _ = write!(out, "{}{marker} ", glyph(cell.status));
        }
        let _ = writeln!(out);
    }
    out
}

/// Flat per-location listing, ordered by location code.
#[must_use]
pub fn map(engine: &GridEngine) -> String {
    let mut out = String::new();
    let mut lines = Vec::new();
    for row in engine.rows() {
        for cell in row {
            if let Some(code) = cell.code() {
                let marker = if cell.is_selected(engine) { " [selected]" } else { "" };
                lines.push(format!("{code}  {:?}{marker}", cell.status));
            }
        }
    }
    lines.sort();
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    out
}

/// Legend for the table glyphs.
#[must_use]
pub fn legend() -> String {
    "legend: . available  C configured  F fill  f wait_fill  o wait_outbound  x unavailable  D disabled  · absent\n"
        .to_string()
}
