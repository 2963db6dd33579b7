//! Value conversion and JSON tests

use folio::{Kind, OrderedMap, Resource, Value, Version, value::TypeMismatch};

use crate::helpers::*;

#[test]
fn test_json_numbers() {
    let value: Value = serde_json::from_str("[1, -2, 2.5, 18446744073709551615]").unwrap();
    let items = value.as_list().unwrap();
    assert_eq!(items[0], Value::Int(1));
    assert_eq!(items[1], Value::Int(-2));
    assert_eq!(items[2], Value::Float(2.5));
    assert!(matches!(items[3], Value::Float(_)));
}

#[test]
fn test_from_serde_json_value_keeps_order() {
    let raw = serde_json::json!({"b": 1, "a": [true, null, "x"]});
    let value = Value::from(raw);
    let map = value.as_map().unwrap();
    assert_eq!(keys_of(map), ["b", "a"]);
    assert_eq!(
        map.get("a"),
        Some(&Value::from(vec![Value::Bool(true), Value::Null, Value::from("x")]))
    );
}

#[test]
fn test_try_from() {
    let text = Value::from("hello");
    assert_eq!(String::try_from(&text).unwrap(), "hello");
    assert_eq!(<&str>::try_from(&text).unwrap(), "hello");
    assert_eq!(
        i64::try_from(&text).unwrap_err(),
        TypeMismatch {
            expected: "int",
            actual: "text"
        }
    );
    assert!(bool::try_from(&Value::Bool(true)).unwrap());

    let wrapped = Value::from(node(Version::V3, Kind::Canvas));
    let canvas = Resource::try_from(wrapped).unwrap();
    assert_eq!(canvas.kind(), Kind::Canvas);

    let err: folio::Error = OrderedMap::<Value>::try_from(Value::from(3)).unwrap_err().into();
    assert!(err.is_type_error());
}

#[test]
fn test_empty_values() {
    assert!(Value::Null.is_empty_value());
    assert!(Value::List(vec![]).is_empty_value());
    assert!(!Value::from("").is_empty_value());
    assert!(!Value::Map(OrderedMap::new()).is_empty_value());
}

#[test]
fn test_node_serializes_stored_form() {
    let mut canvas = node(Version::V3, Kind::Canvas);
    canvas.set("id", format!("{BASE}/canvas/p1")).unwrap();
    let text = Value::from(canvas).to_string();
    assert_eq!(
        text,
        r#"{"type":"Canvas","id":"https://example.org/iiif/book1/canvas/p1"}"#
    );
}
