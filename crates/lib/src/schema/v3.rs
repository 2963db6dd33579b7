//! Presentation API 3.x kind table.

use super::{Category::*, Kind, KindDef};
use crate::constants::VIEWING_DIRECTIONS;

const PAGED_HINTS: &[&str] = &["individuals", "paged", "continuous"];

/// Keys that only make sense on timed or sized content.
const PRESENTATION_ONLY: &[&str] = &["format", "height", "width", "duration"];

pub static KINDS: &[KindDef] = &[
    KindDef {
        is_abstract: true,
        required: &["type"],
        fields: &[
            ("id", Uri),
            ("rights", Uri),
            ("label", Any),
            ("summary", Any),
            ("attribution", Any),
            ("viewing_hint", Any),
            ("start", Any),
            ("behavior", Any),
            ("required_statement", Hash),
            ("viewing_direction", Text),
            ("nav_date", Text),
            ("metadata", Array),
            ("thumbnail", Array),
            ("rendering", Array),
            ("service", Array),
            ("see_also", Array),
            ("homepage", Array),
            ("logo", Array),
            ("part_of", Array),
            ("provider", Array),
            ("annotations", Array),
        ],
        enumerations: &[("viewing_direction", VIEWING_DIRECTIONS), ("viewing_hint", &[])],
        ..KindDef::base(Kind::AbstractResource)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("Manifest"),
        required: &["id", "label"],
        prohibited: &["format", "height", "width", "duration", "time_mode"],
        fields: &[
            ("items", Array),
            ("structures", Array),
            ("placeholder_canvas", Node(Kind::Canvas)),
            ("accompanying_canvas", Node(Kind::Canvas)),
        ],
        enumerations: &[(
            "viewing_hint",
            &["individuals", "paged", "continuous", "auto-advance"],
        )],
        ..KindDef::base(Kind::Manifest)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("Collection"),
        required: &["id", "label"],
        prohibited: &["format", "height", "width", "duration", "time_mode"],
        fields: &[("items", Array)],
        enumerations: &[("viewing_hint", &["individuals", "multi-part", "top"])],
        ..KindDef::base(Kind::Collection)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("Sequence"),
        prohibited: &["nav_date", "format", "height", "width", "duration"],
        fields: &[("items", Array)],
        enumerations: &[("viewing_hint", PAGED_HINTS)],
        ..KindDef::base(Kind::Sequence)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("Canvas"),
        required: &["id"],
        prohibited: &["format", "viewing_direction", "nav_date"],
        fields: &[
            ("width", Int),
            ("height", Int),
            ("duration", Numeric),
            ("items", Array),
            ("placeholder_canvas", Node(Kind::Canvas)),
            ("accompanying_canvas", Node(Kind::Canvas)),
        ],
        enumerations: &[(
            "viewing_hint",
            &["non-paged", "facing-pages", "auto-advance"],
        )],
        ..KindDef::base(Kind::Canvas)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("Range"),
        required: &["id"],
        prohibited: PRESENTATION_ONLY,
        fields: &[("items", Array)],
        enumerations: &[("viewing_hint", &["top", "no-nav", "auto-advance"])],
        ..KindDef::base(Kind::Range)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("AnnotationPage"),
        required: &["id"],
        prohibited: &["nav_date", "viewing_direction"],
        fields: &[("items", Array)],
        ..KindDef::base(Kind::AnnotationPage)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("AnnotationCollection"),
        required: &["id"],
        fields: &[
            ("items", Array),
            ("first", Any),
            ("last", Any),
            ("total", Int),
        ],
        ..KindDef::base(Kind::AnnotationCollection)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("Annotation"),
        prohibited: &["nav_date", "viewing_direction"],
        fields: &[
            ("motivation", Text),
            ("time_mode", Text),
            ("body", Any),
            ("target", Any),
        ],
        enumerations: &[("time_mode", &["trim", "scale", "loop"])],
        defaults: &[("motivation", "painting")],
        ..KindDef::base(Kind::Annotation)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        discriminator: Some("Choice"),
        fields: &[("items", Array), ("choice_hint", Text)],
        enumerations: &[("choice_hint", &["user", "client"])],
        ..KindDef::base(Kind::Choice)
    },
    KindDef {
        parent: Some(Kind::AbstractResource),
        fields: &[
            ("format", Text),
            ("language", Text),
            ("width", Int),
            ("height", Int),
            ("duration", Numeric),
        ],
        ..KindDef::base(Kind::Resource)
    },
    KindDef {
        parent: Some(Kind::Resource),
        discriminator: Some("Image"),
        ..KindDef::base(Kind::ImageResource)
    },
    KindDef {
        fields: &[
            ("id", Uri),
            ("type", Any),
            ("profile", Any),
            ("@context", Any),
        ],
        ..KindDef::base(Kind::Service)
    },
];
