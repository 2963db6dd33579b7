use folio::{Kind, OrderedMap, Resource, Value, Version};

pub const BASE: &str = "https://example.org/iiif/book1";
pub const IMAGE_BASE: &str = "https://images.example.org/iiif/page1";

// ==========================
// NODE FACTORIES
// ==========================

/// Creates a node of `kind`, panicking on failure
pub fn node(version: Version, kind: Kind) -> Resource {
    Resource::new(version, kind).expect("Failed to create resource")
}

/// Creates a node and sets each `(key, value)` through the category checks
pub fn node_with(version: Version, kind: Kind, entries: Vec<(&str, Value)>) -> Resource {
    let mut resource = node(version, kind);
    for (key, value) in entries {
        resource
            .set(key, value)
            .unwrap_or_else(|err| panic!("Failed to set '{key}': {err}"));
    }
    resource
}

/// A valid version 3 canvas numbered `n`
pub fn v3_canvas(n: usize) -> Resource {
    node_with(
        Version::V3,
        Kind::Canvas,
        vec![
            ("id", Value::from(format!("{BASE}/canvas/p{n}"))),
            ("label", Value::from(format!("p. {n}"))),
            ("width", Value::from(1000)),
            ("height", Value::from(1500)),
        ],
    )
}

/// A valid version 3 manifest with one sequence of `canvases` canvases
pub fn v3_manifest(canvases: usize) -> Resource {
    let mut sequence = node(Version::V3, Kind::Sequence);
    for n in 1..=canvases {
        sequence.push("items", v3_canvas(n)).unwrap();
    }
    let mut manifest = node_with(
        Version::V3,
        Kind::Manifest,
        vec![
            ("id", Value::from(format!("{BASE}/manifest"))),
            ("label", Value::from("Book 1")),
        ],
    );
    manifest.push("items", sequence).unwrap();
    manifest
}

/// A valid version 2 canvas numbered `n`
pub fn v2_canvas(n: usize) -> Resource {
    node_with(
        Version::V2,
        Kind::Canvas,
        vec![
            ("@id", Value::from(format!("{BASE}/canvas/p{n}"))),
            ("label", Value::from(format!("p. {n}"))),
            ("width", Value::from(1000)),
            ("height", Value::from(1500)),
        ],
    )
}

/// A valid version 2 manifest with one sequence of `canvases` canvases
pub fn v2_manifest(canvases: usize) -> Resource {
    let mut sequence = node(Version::V2, Kind::Sequence);
    for n in 1..=canvases {
        sequence.push("canvases", v2_canvas(n)).unwrap();
    }
    let mut manifest = node_with(
        Version::V2,
        Kind::Manifest,
        vec![
            ("@id", Value::from(format!("{BASE}/manifest"))),
            ("label", Value::from("Book 1")),
        ],
    );
    manifest.push("sequences", sequence).unwrap();
    manifest
}

/// Parses JSON text into an ordered mapping
pub fn json_map(text: &str) -> OrderedMap<Value> {
    serde_json::from_str(text).expect("Failed to parse JSON fixture")
}

/// The keys of a mapping, in order
pub fn keys_of(map: &OrderedMap<Value>) -> Vec<&str> {
    map.keys().collect()
}

// ==========================
// WIRE FIXTURES
// ==========================

pub const V2_MANIFEST_JSON: &str = r#"{
  "@context": "http://iiif.io/api/presentation/2/context.json",
  "@id": "https://example.org/iiif/book1/manifest",
  "@type": "sc:Manifest",
  "label": "Book 1",
  "metadata": [{"label": "Author", "value": "Anne Author"}],
  "viewingHint": "paged",
  "seeAlso": "https://example.org/library/catalog/book1.xml",
  "sequences": [
    {
      "@id": "https://example.org/iiif/book1/sequence/normal",
      "@type": "sc:Sequence",
      "label": "Current Page Order",
      "canvases": [
        {
          "@id": "https://example.org/iiif/book1/canvas/p1",
          "@type": "sc:Canvas",
          "label": "p. 1",
          "width": 1000,
          "height": 1500,
          "images": [
            {
              "@id": "https://example.org/iiif/book1/annotation/p0001-image",
              "@type": "oa:Annotation",
              "motivation": "sc:painting",
              "resource": {
                "@id": "https://images.example.org/iiif/page1/full/full/0/default.jpg",
                "@type": "dctypes:Image",
                "format": "image/jpeg",
                "width": 1000,
                "height": 1500,
                "service": {
                  "@context": "http://iiif.io/api/image/2/context.json",
                  "@id": "https://images.example.org/iiif/page1",
                  "profile": "http://iiif.io/api/image/2/level2.json"
                }
              },
              "on": "https://example.org/iiif/book1/canvas/p1"
            }
          ]
        }
      ]
    }
  ]
}"#;

pub const V3_MANIFEST_JSON: &str = r#"{
  "@context": [
    "http://www.w3.org/ns/anno.jsonld",
    "http://iiif.io/api/presentation/3/context.json"
  ],
  "id": "https://example.org/iiif/book1/manifest",
  "type": "Manifest",
  "label": {"en": ["Book 1"]},
  "seeAlso": [
    {
      "id": "https://example.org/library/catalog/book1.xml",
      "type": "Dataset",
      "format": "text/xml"
    }
  ],
  "viewingDirection": "right-to-left",
  "navDate": "1856-01-01T00:00:00Z",
  "items": [
    {
      "type": "Sequence",
      "items": [
        {
          "id": "https://example.org/iiif/book1/canvas/p1",
          "type": "Canvas",
          "label": {"none": ["p. 1"]},
          "width": 1000,
          "height": 1500,
          "items": [
            {
              "id": "https://example.org/iiif/book1/page/p1/1",
              "type": "AnnotationPage",
              "items": [
                {
                  "id": "https://example.org/iiif/book1/annotation/p0001-image",
                  "type": "Annotation",
                  "motivation": "painting",
                  "body": {
                    "id": "https://images.example.org/iiif/page1/full/full/0/default.jpg",
                    "type": "Image",
                    "format": "image/jpeg",
                    "width": 1000,
                    "height": 1500,
                    "service": [
                      {
                        "id": "https://images.example.org/iiif/page1",
                        "type": "ImageService2",
                        "profile": "level2"
                      }
                    ]
                  },
                  "target": "https://example.org/iiif/book1/canvas/p1"
                }
              ]
            }
          ]
        }
      ]
    }
  ]
}"#;

pub const V3_COLLECTION_JSON: &str = r#"{
  "@context": [
    "http://www.w3.org/ns/anno.jsonld",
    "http://iiif.io/api/presentation/3/context.json"
  ],
  "id": "https://example.org/iiif/collection/top",
  "type": "Collection",
  "label": {"en": ["Top"]},
  "items": [
    {
      "id": "https://example.org/iiif/book1/manifest",
      "type": "Manifest",
      "label": {"en": ["Book 1"]}
    },
    {
      "id": "https://example.org/iiif/collection/sub",
      "type": "Collection",
      "label": {"en": ["Sub"]},
      "items": [
        {
          "id": "https://example.org/iiif/book2/manifest",
          "type": "Manifest",
          "label": {"en": ["Book 2"]}
        }
      ]
    }
  ]
}"#;
