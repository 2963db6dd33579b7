//! Round trips between wire form and resource trees

use folio::{Resource, Value, Version, wire::WireOptions};

use super::helpers::*;
use crate::helpers::*;

fn round_trip(node: &Resource, version: Version) -> Resource {
    let wire = node
        .to_wire(WireOptions::default())
        .expect("Failed to canonicalize");
    match folio::wire::from_wire(&wire, version).expect("Failed to parse") {
        Value::Node(node) => *node,
        other => panic!("Expected a node, got {other:?}"),
    }
}

#[test]
fn test_wire_documents_round_trip() {
    for (text, version) in [
        (V2_MANIFEST_JSON, Version::V2),
        (V3_MANIFEST_JSON, Version::V3),
        (V3_COLLECTION_JSON, Version::V3),
    ] {
        let parsed = parse_node(text, version);
        assert_eq!(round_trip(&parsed, version), parsed);
    }
}

#[test]
fn test_wire_output_matches_input_document() {
    let parsed = parse_node(V3_MANIFEST_JSON, Version::V3);
    let wire = parsed.to_wire(WireOptions::default()).unwrap();

    let expected: serde_json::Value = serde_json::from_str(V3_MANIFEST_JSON).unwrap();
    let actual = serde_json::to_value(&wire).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_built_manifest_round_trips() {
    let built = v3_manifest(3);
    let parsed = round_trip(&built, Version::V3);

    // Parsing adds back the injected context, everything else is identical
    let mut expected = built.clone();
    expected
        .raw_mut()
        .unshift("@context", Version::V3.context())
        .unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn test_case_conversion_round_trips() {
    let mut manifest = v3_manifest(1);
    manifest
        .set("see_also", vec![Value::from("https://example.org/about")])
        .unwrap();

    let wire = manifest.to_wire(WireOptions::default()).unwrap();
    assert!(wire.contains_key("seeAlso"));
    assert!(!wire.contains_key("see_also"));

    let parsed = round_trip(&manifest, Version::V3);
    assert!(parsed.raw().contains_key("see_also"));
    assert!(!parsed.raw().contains_key("seeAlso"));
}

#[test]
fn test_acronym_keys_round_trip_unchanged() {
    let mut manifest = v3_manifest(1);
    manifest.insert_raw("profileURL", "https://example.org/profile");

    let wire = manifest.to_wire(WireOptions::default()).unwrap();
    assert!(wire.contains_key("profileURL"));

    let parsed = round_trip(&manifest, Version::V3);
    assert_eq!(
        parsed.get("profileURL"),
        Some(&Value::from("https://example.org/profile"))
    );
}
