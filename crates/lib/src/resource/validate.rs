//! Schema validation for resources.
//!
//! Checks run in a fixed order and stop at the first violation:
//! required keys, prohibited keys, URI keys, enumerations, entry shapes,
//! `nav_date`, then the structural rules of the node's kind.

use chrono::NaiveDateTime;
use tracing::debug;
use url::Url;

use super::{Resource, ResourceError};
use crate::{
    Value,
    constants::NAV_DATE_FORMAT,
    schema::{Category, Kind, Version},
};

/// Returns true for a syntactically valid absolute http or https URI.
pub(crate) fn is_http_uri(s: &str) -> bool {
    Url::parse(s).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// A URI, or a list of URIs.
pub(super) fn is_uri_value(value: &Value) -> bool {
    match value {
        Value::Text(s) => is_http_uri(s),
        Value::List(items) => items
            .iter()
            .all(|item| item.as_text().is_some_and(is_http_uri)),
        _ => false,
    }
}

/// Matches `YYYY-MM-DDThh:mm:ssZ` exactly, including calendar validity.
fn is_nav_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 20 {
        return false;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b'T',
        13 | 16 => *b == b':',
        19 => *b == b'Z',
        _ => b.is_ascii_digit(),
    });
    shape_ok && NaiveDateTime::parse_from_str(s, NAV_DATE_FORMAT).is_ok()
}

/// A single value or each member of a list.
fn one_or_many(value: &Value) -> Vec<&Value> {
    match value {
        Value::List(items) => items.iter().collect(),
        other => vec![other],
    }
}

impl Resource {
    /// Validates this node against its schema.
    ///
    /// Nested nodes are not validated here; canonicalization validates each
    /// node as it reaches it.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MissingRequiredKey`] for an absent required key
    /// - [`ResourceError::ProhibitedKey`] for a present prohibited key
    /// - [`ResourceError::IllegalValue`] for any other violation
    pub fn validate(&self) -> Result<(), ResourceError> {
        let result = self.run_checks();
        if let Err(err) = &result {
            debug!(
                kind = %self.kind(),
                version = %self.version(),
                key = err.key().unwrap_or_default(),
                "Validation failed"
            );
        }
        result
    }

    fn run_checks(&self) -> Result<(), ResourceError> {
        self.check_required()?;
        self.check_prohibited()?;
        self.check_uris()?;
        self.check_viewing_direction()?;
        self.check_viewing_hint()?;
        self.check_enumerations()?;
        self.check_metadata()?;
        if self.version() == Version::V3 {
            self.check_entry_keys("thumbnail", &["id", "type"])?;
            self.check_entry_keys("rendering", &["label", "format"])?;
        }
        self.check_nav_date()?;
        self.check_structure()
    }

    fn check_required(&self) -> Result<(), ResourceError> {
        match self
            .schema
            .required_keys()
            .iter()
            .find(|key| !self.fields.contains_key(key))
        {
            Some(key) => Err(ResourceError::MissingRequiredKey {
                kind: self.kind().to_string(),
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn check_prohibited(&self) -> Result<(), ResourceError> {
        match self
            .schema
            .prohibited_keys()
            .iter()
            .find(|key| self.fields.contains_key(key))
        {
            Some(key) => Err(ResourceError::ProhibitedKey {
                kind: self.kind().to_string(),
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn check_uris(&self) -> Result<(), ResourceError> {
        for field in self.schema.fields() {
            if field.category != Category::Uri {
                continue;
            }
            if let Some(value) = self.fields.get(field.key)
                && !is_uri_value(value)
            {
                return Err(self.illegal(field.key, "must be an http(s) URI"));
            }
        }
        Ok(())
    }

    fn check_viewing_direction(&self) -> Result<(), ResourceError> {
        let Some(value) = self.fields.get("viewing_direction") else {
            return Ok(());
        };
        let legal = self
            .schema
            .legal_values("viewing_direction")
            .unwrap_or_default();
        if value.as_text().is_some_and(|s| legal.contains(&s)) {
            Ok(())
        } else {
            Err(self.illegal(
                "viewing_direction",
                format!("must be one of: {}", legal.join(", ")),
            ))
        }
    }

    fn check_viewing_hint(&self) -> Result<(), ResourceError> {
        let Some(value) = self.fields.get("viewing_hint") else {
            return Ok(());
        };
        let legal = self.schema.legal_values("viewing_hint").unwrap_or_default();
        for hint in one_or_many(value) {
            let ok = hint
                .as_text()
                .is_some_and(|s| legal.contains(&s) || is_http_uri(s));
            if !ok {
                return Err(self.illegal(
                    "viewing_hint",
                    format!("{hint} is neither a URI nor one of: {}", legal.join(", ")),
                ));
            }
        }
        Ok(())
    }

    fn check_enumerations(&self) -> Result<(), ResourceError> {
        for (key, legal) in self.schema.enumerations() {
            if matches!(key, "viewing_direction" | "viewing_hint") {
                continue;
            }
            if let Some(value) = self.fields.get(key)
                && !value.as_text().is_some_and(|s| legal.contains(&s))
            {
                return Err(self.illegal(key, format!("must be one of: {}", legal.join(", "))));
            }
        }
        Ok(())
    }

    fn check_metadata(&self) -> Result<(), ResourceError> {
        let Some(value) = self.fields.get("metadata") else {
            return Ok(());
        };
        let Some(entries) = value.as_list() else {
            return Err(self.illegal("metadata", "must be an array"));
        };
        for entry in entries {
            let ok = entry.as_map().is_some_and(|pair| {
                pair.len() == 2 && pair.contains_key("label") && pair.contains_key("value")
            });
            if !ok {
                return Err(self.illegal(
                    "metadata",
                    "each entry must have exactly the keys 'label' and 'value'",
                ));
            }
        }
        Ok(())
    }

    fn check_entry_keys(&self, key: &str, required: &[&str]) -> Result<(), ResourceError> {
        let Some(value) = self.fields.get(key) else {
            return Ok(());
        };
        for entry in one_or_many(value) {
            let ok = entry
                .entries()
                .is_some_and(|map| required.iter().all(|k| map.contains_key(k)));
            if !ok {
                return Err(self.illegal(
                    key,
                    format!("each entry must have '{}'", required.join("' and '")),
                ));
            }
        }
        Ok(())
    }

    fn check_nav_date(&self) -> Result<(), ResourceError> {
        match self.fields.get("nav_date") {
            Some(value) if !value.as_text().is_some_and(is_nav_date) => Err(self.illegal(
                "nav_date",
                "must be an ISO 8601 date-time of the form YYYY-MM-DDThh:mm:ssZ",
            )),
            _ => Ok(()),
        }
    }

    fn check_structure(&self) -> Result<(), ResourceError> {
        match (self.version(), self.kind()) {
            (Version::V2, Kind::Manifest) => self.check_manifest("sequences", "canvases"),
            (Version::V3, Kind::Manifest) => self.check_manifest("items", "items"),
            (Version::V2, Kind::Sequence) => self.check_members("canvases", &[Kind::Canvas]),
            (Version::V3, Kind::Sequence) => self.check_members("items", &[Kind::Canvas]),
            (Version::V2, Kind::Canvas) => self.check_members("images", &[Kind::Annotation]),
            (Version::V3, Kind::Canvas) => {
                self.check_dimensions()?;
                self.check_members("items", &[Kind::AnnotationPage])
            }
            (Version::V2, Kind::AnnotationList) => {
                self.check_members("resources", &[Kind::Annotation])
            }
            (Version::V3, Kind::AnnotationPage) => {
                self.check_members("items", &[Kind::Annotation])
            }
            (Version::V2, Kind::Collection) => {
                self.check_members("collections", &[Kind::Collection])?;
                self.check_members("manifests", &[Kind::Manifest])
            }
            (Version::V3, Kind::Collection) => self.check_members(
                "items",
                &[Kind::Collection, Kind::Manifest, Kind::Resource],
            ),
            (Version::V3, Kind::Choice) => {
                let offers = self
                    .fields
                    .get("items")
                    .and_then(Value::as_list)
                    .is_some_and(|items| !items.is_empty());
                if offers {
                    Ok(())
                } else {
                    Err(self.illegal("items", "a Choice must offer at least one item"))
                }
            }
            (Version::V2, Kind::Annotation) => self.check_painting("resource", "sc:painting"),
            (Version::V3, Kind::Annotation) => self.check_painting("body", "painting"),
            _ => Ok(()),
        }
    }

    /// Every member of `key`, if present, is a node of one of `allowed`.
    fn check_members(&self, key: &str, allowed: &[Kind]) -> Result<(), ResourceError> {
        let Some(value) = self.fields.get(key) else {
            return Ok(());
        };
        let Some(members) = value.as_list() else {
            return Err(self.illegal(key, "must be an array"));
        };
        let fits = |member: &Value| {
            member
                .as_node()
                .is_some_and(|node| allowed.iter().any(|kind| node.is_a(*kind)))
        };
        if members.iter().all(fits) {
            Ok(())
        } else {
            let names: Vec<_> = allowed.iter().map(|kind| kind.name()).collect();
            Err(self.illegal(
                key,
                format!("must contain only {} nodes", names.join(" or ")),
            ))
        }
    }

    fn check_manifest(&self, sequences_key: &str, canvases_key: &str) -> Result<(), ResourceError> {
        let sequences = match self.fields.get(sequences_key).and_then(Value::as_list) {
            Some(list) if !list.is_empty() => list,
            _ => {
                return Err(self.illegal(sequences_key, "must contain at least one Sequence"));
            }
        };
        self.check_members(sequences_key, &[Kind::Sequence])?;

        let default_inlined = sequences
            .first()
            .and_then(Value::as_node)
            .and_then(|sequence| sequence.get(canvases_key))
            .and_then(Value::as_list)
            .is_some_and(|canvases| {
                !canvases.is_empty()
                    && canvases
                        .iter()
                        .all(|c| c.as_node().is_some_and(|n| n.is_a(Kind::Canvas)))
            });
        if !default_inlined {
            return Err(self.illegal(
                sequences_key,
                "the default sequence must embed at least one Canvas",
            ));
        }

        if sequences.len() > 1 {
            let all_labelled = sequences
                .iter()
                .all(|s| s.as_node().is_some_and(|n| n.contains_key("label")));
            if !all_labelled {
                return Err(self.illegal(
                    sequences_key,
                    "every sequence must have a label when there is more than one",
                ));
            }
        }

        self.check_members("structures", &[Kind::Range])
    }

    fn check_dimensions(&self) -> Result<(), ResourceError> {
        match (
            self.fields.contains_key("width"),
            self.fields.contains_key("height"),
        ) {
            (true, false) => Err(self.illegal("height", "width and height must be given together")),
            (false, true) => Err(self.illegal("width", "width and height must be given together")),
            _ => Ok(()),
        }
    }

    fn check_painting(&self, body_key: &str, painting: &str) -> Result<(), ResourceError> {
        let Some(image) = self
            .fields
            .get(body_key)
            .and_then(Value::as_node)
            .filter(|body| body.is_a(Kind::ImageResource))
        else {
            return Ok(());
        };
        let motivation = self.fields.get("motivation").and_then(Value::as_text);
        if motivation != Some(painting) {
            return Err(self.illegal(
                "motivation",
                format!("must be '{painting}' when the {body_key} is an image"),
            ));
        }
        if !image.id().is_some_and(is_http_uri) {
            return Err(self.illegal(body_key, "an image must have an http(s) id"));
        }
        Ok(())
    }
}
