use std::collections::BTreeSet;

use super::*;

fn rack_with_materials(materials: &[&str]) -> RackLocation {
    RackLocation {
        id: "loc-1".into(),
        group_id: "A01-01".into(),
        row: 2,
        column: 3,
        location_code: "A01-01/02-03".into(),
        assigned_materials: materials.iter().map(ToString::to_string).collect::<BTreeSet<_>>(),
    }
}

// =============================================================
// Absence
// =============================================================

#[test]
fn no_rack_resolves_absent() {
    assert_eq!(resolve(None, None), DisplayStatus::Absent);
}

#[test]
fn no_rack_resolves_absent_even_with_live_status() {
    // A live entry without a backing rack record is still a hole.
    assert_eq!(resolve(None, Some(WireStatus::Fill)), DisplayStatus::Absent);
}

#[test]
fn absent_is_not_selectable() {
    assert!(!DisplayStatus::Absent.is_selectable());
    assert!(DisplayStatus::Available.is_selectable());
    assert!(DisplayStatus::Configured.is_selectable());
}

// =============================================================
// Default and configured upgrade
// =============================================================

#[test]
fn missing_live_entry_defaults_available() {
    let rack = rack_with_materials(&[]);
    assert_eq!(resolve(Some(&rack), None), DisplayStatus::Available);
}

#[test]
fn assigned_materials_upgrade_available_to_configured() {
    // Spec example A: materials assigned, no live entry.
    let rack = rack_with_materials(&["SKU1"]);
    assert_eq!(resolve(Some(&rack), None), DisplayStatus::Configured);
}

#[test]
fn assigned_materials_upgrade_explicit_available() {
    let rack = rack_with_materials(&["SKU1"]);
    assert_eq!(resolve(Some(&rack), Some(WireStatus::Available)), DisplayStatus::Configured);
}

// =============================================================
// Live feed precedence
// =============================================================

#[test]
fn live_disable_overrides_static_upgrade() {
    // Spec example B: operational state beats the configured upgrade.
    let rack = rack_with_materials(&["SKU1"]);
    assert_eq!(resolve(Some(&rack), Some(WireStatus::Disable)), DisplayStatus::Disabled);
}

#[test]
fn operational_states_pass_through_unchanged() {
    let rack = rack_with_materials(&["SKU1"]);
    let cases = [
        (WireStatus::Unavailable, DisplayStatus::Unavailable),
        (WireStatus::Disable, DisplayStatus::Disabled),
        (WireStatus::Fill, DisplayStatus::Fill),
        (WireStatus::WaitFill, DisplayStatus::WaitFill),
        (WireStatus::WaitOutbound, DisplayStatus::WaitOutbound),
    ];
    for (live, expected) in cases {
        assert_eq!(resolve(Some(&rack), Some(live)), expected);
    }
}

#[test]
fn operational_states_pass_through_without_materials() {
    let rack = rack_with_materials(&[]);
    assert_eq!(resolve(Some(&rack), Some(WireStatus::Fill)), DisplayStatus::Fill);
}

// =============================================================
// Live "configured" normalization
// =============================================================

#[test]
fn live_configured_with_materials_resolves_configured() {
    let rack = rack_with_materials(&["SKU1"]);
    assert_eq!(resolve(Some(&rack), Some(WireStatus::Configured)), DisplayStatus::Configured);
}

#[test]
fn live_configured_without_materials_resolves_available() {
    // The feed echoing "configured" is tolerated as available, so the
    // materials rule alone decides the upgrade.
    let rack = rack_with_materials(&[]);
    assert_eq!(resolve(Some(&rack), Some(WireStatus::Configured)), DisplayStatus::Available);
}

// =============================================================
// Purity
// =============================================================

#[test]
fn resolve_depends_only_on_inputs() {
    let rack = rack_with_materials(&["SKU1"]);
    let first = resolve(Some(&rack), Some(WireStatus::WaitFill));
    // Interleave unrelated calls; the same inputs must give the same output.
    let _ = resolve(None, None);
    let _ = resolve(Some(&rack), Some(WireStatus::Available));
    let second = resolve(Some(&rack), Some(WireStatus::WaitFill));
    assert_eq!(first, second);
}
