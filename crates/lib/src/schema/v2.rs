//! Presentation API 2.x kind table.

use super::{Category::*, Kind, KindDef};
use crate::constants::VIEWING_DIRECTIONS;

const PAGED_HINTS: &[&str] = &["individuals", "paged", "continuous"];

pub static KINDS: &[KindDef] = &[
    KindDef {
        is_abstract: true,
        required: &["@type"],
        fields: &[
            ("@id", Uri),
            ("label", Any),
            ("description", Any),
            ("attribution", Any),
            ("license", Any),
            ("logo", Any),
            ("thumbnail", Any),
            ("see_also", Any),
            ("rendering", Any),
            ("related", Any),
            ("within", Any),
            ("service", Any),
            ("viewing_hint", Any),
            ("viewing_direction", Text),
            ("nav_date", Text),
            ("metadata", Array),
        ],
        enumerations: &[("viewing_direction", VIEWING_DIRECTIONS), ("viewing_hint", &[])],
        ..KindDef::base(Kind::AbstractResource)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("sc:Manifest"),
        required: &["@id", "label"],
        fields: &[("sequences", Array), ("structures", Array)],
        enumerations: &[("viewing_hint", PAGED_HINTS)],
        ..KindDef::base(Kind::Manifest)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("sc:Collection"),
        required: &["@id", "label"],
        fields: &[
            ("collections", Array),
            ("manifests", Array),
            ("members", Array),
        ],
        enumerations: &[("viewing_hint", &["individuals", "multi-part", "top"])],
        ..KindDef::base(Kind::Collection)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("sc:Sequence"),
        fields: &[("canvases", Array), ("start_canvas", Uri)],
        enumerations: &[("viewing_hint", PAGED_HINTS)],
        ..KindDef::base(Kind::Sequence)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("sc:Canvas"),
        required: &["@id", "label", "width", "height"],
        fields: &[
            ("width", Int),
            ("height", Int),
            ("images", Array),
            ("other_content", Array),
        ],
        enumerations: &[("viewing_hint", &["non-paged", "facing-pages"])],
        ..KindDef::base(Kind::Canvas)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("sc:Range"),
        required: &["@id", "label"],
        fields: &[
            ("ranges", Array),
            ("canvases", Array),
            ("members", Array),
            ("start_canvas", Uri),
        ],
        enumerations: &[("viewing_hint", &["top"])],
        ..KindDef::base(Kind::Range)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("sc:Layer"),
        required: &["@id", "label"],
        fields: &[("other_content", Array)],
        ..KindDef::base(Kind::Layer)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("sc:AnnotationList"),
        required: &["@id"],
        fields: &[("resources", Array)],
        ..KindDef::base(Kind::AnnotationList)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("oa:Annotation"),
        fields: &[("motivation", Text), ("on", Any), ("resource", Any)],
        defaults: &[("motivation", "sc:painting")],
        ..KindDef::base(Kind::Annotation)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        fields: &[("format", Text), ("width", Int), ("height", Int)],
        ..KindDef::base(Kind::Resource)
    },
    KindDef {
        parent: Some(Kind::Resource),
        discriminator: Some("dctypes:Image"),
        ..KindDef::base(Kind::ImageResource)
    },
    KindDef {
        fields: &[("@id", Uri), ("@context", Any), ("profile", Any)],
        ..KindDef::base(Kind::Service)
    },
];
