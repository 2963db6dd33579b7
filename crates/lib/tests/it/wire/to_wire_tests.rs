//! Canonical output tests

use folio::{
    Kind, Value, Version,
    constants::{V2_CONTEXT, V3_CONTEXT},
    resource::ResourceError,
    wire::{self, JsonStyle, WireOptions},
};

use super::helpers::*;
use crate::helpers::*;

// ===== VALIDATION GATING =====

#[test]
fn test_manifest_scenario() {
    let mut manifest = node(Version::V3, Kind::Manifest);
    manifest.set("label", "Book 1").unwrap();

    let err = manifest.to_wire(WireOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ResourceError::MissingRequiredKey {
            kind: "Manifest".to_string(),
            key: "id".to_string()
        }
    );

    manifest.set("id", format!("{BASE}/manifest")).unwrap();
    let mut sequence = node(Version::V3, Kind::Sequence);
    sequence.push("items", v3_canvas(1)).unwrap();
    manifest.set("items", vec![sequence]).unwrap();

    let wire = manifest.to_wire(WireOptions::default()).unwrap();
    assert_eq!(keys_of(&wire), ["@context", "type", "label", "id", "items"]);
    assert_eq!(wire.get("@context"), Some(&Value::from(V3_CONTEXT.to_vec())));
}

#[test]
fn test_v2_linked_data_keys_hoisted_and_sorted() {
    let mut manifest = node(Version::V2, Kind::Manifest);
    manifest.set("label", "Book 1").unwrap();
    manifest.set("@id", format!("{BASE}/manifest")).unwrap();
    let mut sequence = node(Version::V2, Kind::Sequence);
    sequence.push("canvases", v2_canvas(1)).unwrap();
    manifest.push("sequences", sequence).unwrap();

    let wire = manifest.to_wire(WireOptions::default()).unwrap();
    assert_eq!(
        keys_of(&wire),
        ["@context", "@id", "@type", "label", "sequences"]
    );
    assert_eq!(wire.get("@context"), Some(&Value::from(V2_CONTEXT)));
}

#[test]
fn test_force_skips_validation() {
    let mut manifest = node(Version::V3, Kind::Manifest);
    manifest.set("label", "Draft").unwrap();
    let wire = manifest
        .to_wire(WireOptions::default().force(true))
        .unwrap();
    assert_eq!(keys_of(&wire), ["@context", "type", "label"]);
}

#[test]
fn test_nested_nodes_are_validated() {
    let mut manifest = v3_manifest(2);
    let sequence = manifest
        .get_mut("items")
        .and_then(Value::as_list_mut)
        .and_then(|items| items[0].as_node_mut())
        .unwrap();
    sequence
        .array_mut("items")
        .unwrap()
        .push(Value::from(node(Version::V3, Kind::Canvas)));

    let err = manifest.to_wire(WireOptions::default()).unwrap_err();
    assert!(err.is_missing_key());
    assert_eq!(err.kind(), "Canvas");
    assert_eq!(err.key(), Some("id"));

    manifest
        .to_wire(WireOptions::default().force(true))
        .unwrap();
}

// ===== CONTEXT AND ORDERING =====

#[test]
fn test_context_only_at_top_level() {
    let wire = v2_manifest(1).to_wire(WireOptions::default()).unwrap();
    let sequence = wire_member(&wire, "sequences", 0);
    let canvas = wire_member(sequence, "canvases", 0);
    assert!(!sequence.contains_key("@context"));
    assert!(!canvas.contains_key("@context"));
    assert_eq!(keys_of(canvas), ["@id", "@type", "label", "width", "height"]);
}

#[test]
fn test_include_context_disabled() {
    let wire = v3_manifest(1)
        .to_wire(WireOptions::default().include_context(false))
        .unwrap();
    assert!(!wire.contains_key("@context"));
    assert_eq!(wire.keys().next(), Some("type"));
}

#[test]
fn test_existing_context_is_kept() {
    let mut manifest = v3_manifest(1);
    manifest.insert_raw("@context", "https://example.org/custom-context.json");
    let wire = manifest.to_wire(WireOptions::default()).unwrap();
    assert_eq!(
        wire.get("@context"),
        Some(&Value::from("https://example.org/custom-context.json"))
    );
    assert_eq!(wire.keys().next(), Some("@context"));
}

#[test]
fn test_unsorted_output_keeps_node_order() {
    let mut manifest = node(Version::V2, Kind::Manifest);
    manifest.set("label", "Book 1").unwrap();
    manifest.set("@id", format!("{BASE}/manifest")).unwrap();
    let mut sequence = node(Version::V2, Kind::Sequence);
    sequence.push("canvases", v2_canvas(1)).unwrap();
    manifest.push("sequences", sequence).unwrap();

    let wire = manifest
        .to_wire(WireOptions::default().sort_ld_keys(false))
        .unwrap();
    assert_eq!(
        keys_of(&wire),
        ["@context", "@type", "label", "@id", "sequences"]
    );
}

#[test]
fn test_nested_linked_data_keys_are_sorted() {
    let mut service = node(Version::V2, Kind::Service);
    service
        .set("profile", "http://iiif.io/api/image/2/level2.json")
        .unwrap();
    service.set("@id", IMAGE_BASE).unwrap();
    service
        .set("@context", "http://iiif.io/api/image/2/context.json")
        .unwrap();

    let mut image = node(Version::V2, Kind::ImageResource);
    image
        .set("@id", format!("{IMAGE_BASE}/full/full/0/default.jpg"))
        .unwrap();
    image.set("service", service).unwrap();

    let wire = image.to_wire(WireOptions::default()).unwrap();
    let service = wire_map(&wire, "service");
    assert_eq!(keys_of(service), ["@context", "@id", "profile"]);
}

// ===== ELISION AND CASE =====

#[test]
fn test_untouched_arrays_are_elided() {
    let mut manifest = v3_manifest(1);
    manifest.array_mut("structures").unwrap();
    manifest.array_mut("seeAlso").unwrap();
    manifest.set("summary", Value::Null).unwrap();
    assert!(manifest.contains_key("structures"));

    let wire = manifest.to_wire(WireOptions::default()).unwrap();
    assert!(!wire.contains_key("structures"));
    assert!(!wire.contains_key("seeAlso"));
    assert!(!wire.contains_key("summary"));
    // The node itself is untouched
    assert!(manifest.contains_key("structures"));
}

#[test]
fn test_nested_empty_arrays_are_elided() {
    let mut manifest = v3_manifest(1);
    let sequence = manifest
        .get_mut("items")
        .and_then(Value::as_list_mut)
        .and_then(|items| items[0].as_node_mut())
        .unwrap();
    let canvas = sequence
        .get_mut("items")
        .and_then(Value::as_list_mut)
        .and_then(|items| items[0].as_node_mut())
        .unwrap();
    canvas.array_mut("items").unwrap();

    let wire = manifest.to_wire(WireOptions::default()).unwrap();
    let canvas = wire_member(wire_member(&wire, "items", 0), "items", 0);
    assert!(!canvas.contains_key("items"));
}

#[test]
fn test_keys_are_camelized_in_place() {
    let mut manifest = v3_manifest(1);
    manifest
        .insert_before(
            "items",
            "see_also",
            vec![Value::from("https://example.org/about")],
        )
        .unwrap();
    manifest.set("nav_date", "1856-01-01T00:00:00Z").unwrap();

    let wire = manifest.to_wire(WireOptions::default()).unwrap();
    assert_eq!(
        keys_of(&wire),
        ["@context", "type", "id", "label", "seeAlso", "items", "navDate"]
    );
}

#[test]
fn test_plain_maps_are_rebuilt() {
    let mut manifest = v3_manifest(1);
    let statement = json_map(
        r#"{"label": {"en-GB": ["Attribution"]}, "value": {"none": ["Example"]}, "extra_note": null}"#,
    );
    manifest.set("required_statement", statement).unwrap();

    let wire = manifest.to_wire(WireOptions::default()).unwrap();
    let statement = wire_map(&wire, "requiredStatement");
    assert_eq!(keys_of(statement), ["label", "value", "extraNote"]);
    assert_eq!(keys_of(wire_map(statement, "label")), ["en-GB"]);
}

// ===== TEXT OUTPUT =====

#[test]
fn test_json_styles() {
    let manifest = v3_manifest(1);
    let compact = manifest
        .to_json(WireOptions::default(), JsonStyle::Compact)
        .unwrap();
    let pretty = wire::to_json(&manifest, WireOptions::default(), JsonStyle::Pretty).unwrap();

    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
    assert!(compact.starts_with(r#"{"@context":["http://www.w3.org/ns/anno.jsonld""#));

    let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
    let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_to_json_surfaces_validation_errors() {
    let manifest = node(Version::V3, Kind::Manifest);
    let err = manifest
        .to_json(WireOptions::default(), JsonStyle::Compact)
        .unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(err.module(), "resource");
}
