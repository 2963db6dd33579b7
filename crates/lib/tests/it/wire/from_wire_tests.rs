//! Polymorphic parsing tests

use folio::{Kind, Value, Version, wire};

use super::helpers::*;
use crate::helpers::*;

// ===== KIND RESOLUTION =====

#[test]
fn test_v3_manifest_tree_kinds() {
    let manifest = parse_node(V3_MANIFEST_JSON, Version::V3);
    assert_eq!(manifest.kind(), Kind::Manifest);

    let sequence = member_node(&manifest, "items", 0);
    assert_eq!(sequence.kind(), Kind::Sequence);
    let canvas = member_node(sequence, "items", 0);
    assert_eq!(canvas.kind(), Kind::Canvas);
    let page = member_node(canvas, "items", 0);
    assert_eq!(page.kind(), Kind::AnnotationPage);
    let annotation = member_node(page, "items", 0);
    assert_eq!(annotation.kind(), Kind::Annotation);

    let body = annotation.get("body").and_then(Value::as_node).unwrap();
    assert_eq!(body.kind(), Kind::ImageResource);
    let service = member_node(body, "service", 0);
    assert_eq!(service.kind(), Kind::Service);
    assert_eq!(service.type_name(), Some("ImageService2"));
}

#[test]
fn test_v2_manifest_tree_kinds() {
    let manifest = parse_node(V2_MANIFEST_JSON, Version::V2);
    assert_eq!(manifest.kind(), Kind::Manifest);

    let sequence = member_node(&manifest, "sequences", 0);
    let canvas = member_node(sequence, "canvases", 0);
    let annotation = member_node(canvas, "images", 0);
    assert_eq!(annotation.kind(), Kind::Annotation);

    let image = annotation.get("resource").and_then(Value::as_node).unwrap();
    assert_eq!(image.kind(), Kind::ImageResource);
    let service = image.get("service").and_then(Value::as_node).unwrap();
    assert_eq!(service.kind(), Kind::Service);
    assert_eq!(
        service.raw().keys().collect::<Vec<_>>(),
        ["@context", "@id", "profile"]
    );
}

#[test]
fn test_unregistered_discriminator_becomes_plain_map() {
    let manifest = parse_node(V3_MANIFEST_JSON, Version::V3);
    let see_also = member(&manifest, "see_also", 0);
    let entry = see_also.as_map().unwrap();
    assert_eq!(entry.get("type"), Some(&Value::from("Dataset")));
}

#[test]
fn test_default_kinds_by_key() {
    let annotation = json_map(
        r#"{
          "id": "https://example.org/anno/1",
          "type": "Annotation",
          "motivation": "commenting",
          "body": {"type": "TextualBody", "value": "A note", "format": "text/plain"},
          "service": {"id": "https://example.org/search", "profile": "search"},
          "target": {"type": "SpecificResource", "source": "https://example.org/canvas/p1"}
        }"#,
    );
    let parsed = wire::from_wire(&annotation, Version::V3).unwrap();
    let annotation = parsed.as_node().unwrap();

    let body = annotation.get("body").and_then(Value::as_node).unwrap();
    assert_eq!(body.kind(), Kind::Resource);
    assert_eq!(body.type_name(), Some("TextualBody"));

    let service = annotation.get("service").and_then(Value::as_node).unwrap();
    assert_eq!(service.kind(), Kind::Service);

    assert!(annotation.get("target").unwrap().as_map().is_some());
}

#[test]
fn test_body_lists_are_not_defaulted() {
    let annotation = json_map(
        r#"{"type": "Annotation", "body": [{"type": "TextualBody", "value": "A"}]}"#,
    );
    let parsed = wire::from_wire(&annotation, Version::V3).unwrap();
    let body = member(parsed.as_node().unwrap(), "body", 0);
    assert!(body.as_map().is_some());
}

#[test]
fn test_registered_discriminator_wins_over_key_default() {
    let annotation = json_map(
        r#"{"type": "Annotation", "body": {"type": "Choice", "items": [{"type": "Image", "id": "https://example.org/a.jpg"}]}}"#,
    );
    let parsed = wire::from_wire(&annotation, Version::V3).unwrap();
    let choice = parsed
        .as_node()
        .and_then(|a| a.get("body"))
        .and_then(Value::as_node)
        .unwrap();
    assert_eq!(choice.kind(), Kind::Choice);
    assert_eq!(member_node(choice, "items", 0).kind(), Kind::ImageResource);
}

#[test]
fn test_untyped_document_is_a_plain_map() {
    let raw = json_map(r#"{"profile": "level2", "width": 10}"#);
    let parsed = wire::from_wire(&raw, Version::V3).unwrap();
    assert!(matches!(parsed, Value::Map(_)));
}

#[test]
fn test_discriminator_must_match_version() {
    let raw = json_map(r#"{"@type": "sc:Manifest", "label": "Book"}"#);
    assert!(wire::from_wire(&raw, Version::V3).unwrap().as_map().is_some());
    assert!(wire::from_wire(&raw, Version::V2).unwrap().as_node().is_some());
}

// ===== COLLECTIONS =====

#[test]
fn test_manifest_in_collection_is_a_reference() {
    let collection = parse_node(V3_COLLECTION_JSON, Version::V3);
    assert_eq!(collection.kind(), Kind::Collection);

    let reference = member_node(&collection, "items", 0);
    assert_eq!(reference.kind(), Kind::Resource);
    assert_eq!(reference.type_name(), Some("Manifest"));

    let sub = member_node(&collection, "items", 1);
    assert_eq!(sub.kind(), Kind::Collection);
    assert_eq!(member_node(sub, "items", 0).kind(), Kind::Resource);
}

#[test]
fn test_manifest_outside_collection_is_a_manifest() {
    let manifest = parse_node(
        r#"{"id": "https://example.org/m", "type": "Manifest", "label": "M"}"#,
        Version::V3,
    );
    assert_eq!(manifest.kind(), Kind::Manifest);
}

#[test]
fn test_v2_collection_members_stay_manifests() {
    let collection = parse_node(
        r#"{
          "@id": "https://example.org/collection",
          "@type": "sc:Collection",
          "label": "Books",
          "manifests": [{"@id": "https://example.org/m1", "@type": "sc:Manifest", "label": "M1"}]
        }"#,
        Version::V2,
    );
    assert_eq!(member_node(&collection, "manifests", 0).kind(), Kind::Manifest);
}

// ===== KEYS AND VALUES =====

#[test]
fn test_keys_are_internalized_in_place() {
    let manifest = parse_node(V3_MANIFEST_JSON, Version::V3);
    assert_eq!(
        manifest.keys().collect::<Vec<_>>(),
        [
            "@context",
            "id",
            "type",
            "label",
            "see_also",
            "viewing_direction",
            "nav_date",
            "items"
        ]
    );
    // Language maps are left alone
    let label = manifest.label().and_then(Value::as_map).unwrap();
    assert!(label.contains_key("en"));
}

#[test]
fn test_defaults_seeded_after_input_keys() {
    let annotation = parse_node(
        r#"{"id": "https://example.org/anno/1", "type": "Annotation", "target": "https://example.org/c1"}"#,
        Version::V3,
    );
    assert_eq!(
        annotation.keys().collect::<Vec<_>>(),
        ["id", "type", "target", "motivation"]
    );
    assert_eq!(annotation.get("motivation"), Some(&Value::from("painting")));
}

#[test]
fn test_scalar_list_members_pass_through() {
    let range = parse_node(
        r#"{"id": "https://example.org/r1", "type": "Range", "items": ["https://example.org/c1", 3, null]}"#,
        Version::V3,
    );
    assert_eq!(
        range.get("items"),
        Some(&Value::from(vec![
            Value::from("https://example.org/c1"),
            Value::from(3),
            Value::Null
        ]))
    );
}

#[test]
fn test_parsed_documents_validate() {
    parse_node(V2_MANIFEST_JSON, Version::V2).validate().unwrap();
    parse_node(V3_MANIFEST_JSON, Version::V3).validate().unwrap();
    parse_node(V3_COLLECTION_JSON, Version::V3).validate().unwrap();
}
