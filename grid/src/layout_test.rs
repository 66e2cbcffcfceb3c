use super::*;
use crate::addressing::canonical_id;

fn make_rack(group_id: &str, row: u32, col: u32) -> RackLocation {
    let code = canonical_id(group_id, row, col);
    RackLocation {
        id: format!("id-{code}"),
        group_id: group_id.to_string(),
        row,
        column: col,
        location_code: code,
        assigned_materials: std::collections::BTreeSet::new(),
    }
}

// =============================================================
// Assembly
// =============================================================

#[test]
fn empty_input_yields_zero_by_zero() {
    let layout = GridLayout::from_racks("A01-01", vec![]);
    assert_eq!(layout.max_row(), 0);
    assert_eq!(layout.max_col(), 0);
    assert!(layout.is_empty());
    assert_eq!(layout.len(), 0);
}

#[test]
fn maxima_from_unordered_input() {
    let racks = vec![
        make_rack("G", 3, 1),
        make_rack("G", 1, 5),
        make_rack("G", 2, 2),
    ];
    let layout = GridLayout::from_racks("G", racks);
    assert_eq!(layout.max_row(), 3);
    assert_eq!(layout.max_col(), 5);
    assert_eq!(layout.len(), 3);
}

#[test]
fn maxima_roundtrip_exact() {
    // Assembling then re-deriving the maxima reproduces the input values.
    let racks: Vec<RackLocation> =
        (1..=7).map(|row| make_rack("G", row, 11 - row)).collect();
    let max_row = racks.iter().map(|r| r.row).max().unwrap();
    let max_col = racks.iter().map(|r| r.column).max().unwrap();
    let layout = GridLayout::from_racks("G", racks);
    assert_eq!(layout.max_row(), max_row);
    assert_eq!(layout.max_col(), max_col);
}

#[test]
fn duplicate_coordinate_last_wins() {
    let mut first = make_rack("G", 1, 1);
    first.id = "first".into();
    let mut second = make_rack("G", 1, 1);
    second.id = "second".into();
    let layout = GridLayout::from_racks("G", vec![first, second]);
    assert_eq!(layout.len(), 1);
    assert_eq!(layout.rack_at(1, 1).unwrap().id, "second");
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn rack_at_present_coordinate() {
    let layout = GridLayout::from_racks("G", vec![make_rack("G", 2, 3)]);
    let rack = layout.rack_at(2, 3).unwrap();
    assert_eq!(rack.location_code, "G/02-03");
}

#[test]
fn rack_at_missing_coordinate_is_none() {
    // Sparse grids are expected: a hole is absent, never a default rack.
    let layout = GridLayout::from_racks("G", vec![make_rack("G", 2, 3)]);
    assert!(layout.rack_at(1, 1).is_none());
    assert!(layout.rack_at(2, 2).is_none());
}

#[test]
fn rack_by_code_and_contains_code() {
    let layout = GridLayout::from_racks("G", vec![make_rack("G", 1, 2)]);
    assert!(layout.contains_code("G/01-02"));
    assert!(layout.rack_by_code("G/01-02").is_some());
    assert!(!layout.contains_code("G/09-09"));
    assert!(layout.rack_by_code("G/09-09").is_none());
}

#[test]
fn group_id_is_kept() {
    let layout = GridLayout::from_racks("A01-01", vec![]);
    assert_eq!(layout.group_id(), "A01-01");
}

// =============================================================
// Line queries
// =============================================================

#[test]
fn codes_in_row_ordered_by_column() {
    let racks = vec![
        make_rack("G", 1, 3),
        make_rack("G", 1, 1),
        make_rack("G", 2, 2),
    ];
    let layout = GridLayout::from_racks("G", racks);
    assert_eq!(layout.codes_in_row(1), vec!["G/01-01", "G/01-03"]);
}

#[test]
fn codes_in_column_ordered_by_row() {
    let racks = vec![
        make_rack("G", 3, 2),
        make_rack("G", 1, 2),
        make_rack("G", 2, 1),
    ];
    let layout = GridLayout::from_racks("G", racks);
    assert_eq!(layout.codes_in_column(2), vec!["G/01-02", "G/03-02"]);
}

#[test]
fn codes_in_empty_line_is_empty() {
    let layout = GridLayout::from_racks("G", vec![make_rack("G", 1, 1)]);
    assert!(layout.codes_in_row(5).is_empty());
    assert!(layout.codes_in_column(5).is_empty());
}
