use serde_json::json;

use super::*;

// =============================================================
// WireStatus serde — exact wire spellings
// =============================================================

#[test]
fn wire_status_serializes_exact_values() {
    let cases = [
        (WireStatus::Available, "\"available\""),
        (WireStatus::Unavailable, "\"unavailable\""),
        (WireStatus::Disable, "\"disable\""),
        (WireStatus::Fill, "\"fill\""),
        (WireStatus::WaitFill, "\"wait_fill\""),
        (WireStatus::WaitOutbound, "\"wait_outbound\""),
        (WireStatus::Configured, "\"configured\""),
    ];
    for (status, expected) in cases {
        assert_eq!(serde_json::to_string(&status).unwrap(), expected);
    }
}

#[test]
fn wire_status_deserializes_exact_values() {
    let cases = [
        ("\"available\"", WireStatus::Available),
        ("\"unavailable\"", WireStatus::Unavailable),
        ("\"disable\"", WireStatus::Disable),
        ("\"fill\"", WireStatus::Fill),
        ("\"wait_fill\"", WireStatus::WaitFill),
        ("\"wait_outbound\"", WireStatus::WaitOutbound),
        ("\"configured\"", WireStatus::Configured),
    ];
    for (input, expected) in cases {
        let status: WireStatus = serde_json::from_str(input).unwrap();
        assert_eq!(status, expected);
    }
}

#[test]
fn wire_status_rejects_unknown_value() {
    assert!(serde_json::from_str::<WireStatus>("\"disabled\"").is_err());
}

#[test]
fn wire_status_is_case_sensitive() {
    assert!(serde_json::from_str::<WireStatus>("\"Available\"").is_err());
}

// =============================================================
// RackLocation serde
// =============================================================

#[test]
fn rack_location_deserializes_camel_case() {
    let rack: RackLocation = serde_json::from_value(json!({
        "id": "loc-77",
        "groupId": "A01-01",
        "row": 2,
        "column": 3,
        "locationCode": "A01-01/02-03",
        "assignedMaterials": ["SKU1", "SKU2"]
    }))
    .unwrap();
    assert_eq!(rack.group_id, "A01-01");
    assert_eq!(rack.row, 2);
    assert_eq!(rack.column, 3);
    assert_eq!(rack.location_code, "A01-01/02-03");
    assert!(rack.assigned_materials.contains("SKU1"));
}

#[test]
fn rack_location_missing_materials_defaults_empty() {
    let rack: RackLocation = serde_json::from_value(json!({
        "id": "loc-1",
        "groupId": "A01-01",
        "row": 1,
        "column": 1,
        "locationCode": "A01-01/01-01"
    }))
    .unwrap();
    assert!(rack.assigned_materials.is_empty());
}

#[test]
fn rack_location_serde_roundtrip() {
    let rack = RackLocation {
        id: "loc-9".into(),
        group_id: "B02".into(),
        row: 4,
        column: 6,
        location_code: "B02/04-06".into(),
        assigned_materials: ["SKU9".to_string()].into(),
    };
    let serialized = serde_json::to_string(&rack).unwrap();
    assert!(serialized.contains("\"groupId\""));
    assert!(serialized.contains("\"locationCode\""));
    let back: RackLocation = serde_json::from_str(&serialized).unwrap();
    assert_eq!(back, rack);
}

// =============================================================
// ConfigurationRequest serde
// =============================================================

#[test]
fn configuration_request_serializes_camel_case() {
    let request = ConfigurationRequest {
        location_ids: vec!["A01-01/01-01".into(), "A01-01/01-02".into()],
        materials: vec!["SKU1".into()],
        group_id: "A01-01".into(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["locationIds"], json!(["A01-01/01-01", "A01-01/01-02"]));
    assert_eq!(value["materials"], json!(["SKU1"]));
    assert_eq!(value["groupId"], "A01-01");
}
