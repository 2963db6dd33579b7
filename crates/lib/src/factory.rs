//! Convenience constructors.

use tracing::debug;

use crate::{
    OrderedMap, Resource, Value,
    constants::{CONTEXT_KEY, FULL_IMAGE_PATH, V2_ID_KEY, V3_ID_KEY},
    resource::ResourceError,
    schema::{Kind, Version},
};

/// Builds an image resource from an image service's `info.json` document.
///
/// The caller fetches and parses `info`; `base` is the image service's base
/// URI. The resource addresses the full-size JPEG rendition and carries a
/// service node pointing back at the image service.
///
/// # Errors
///
/// [`ResourceError::IllegalValue`] if `info` lacks a positive integer
/// `width` or `height`.
///
/// # Example
///
/// ```
/// use folio::{OrderedMap, Value, factory::image_resource_from_info, schema::Version};
///
/// let info: OrderedMap = serde_json::from_str(
///     r#"{"@context": "http://iiif.io/api/image/2/context.json",
///         "@id": "https://images.example.org/iiif/page1",
///         "profile": "http://iiif.io/api/image/2/level2.json",
///         "width": 2000, "height": 3000}"#,
/// ).unwrap();
///
/// let image = image_resource_from_info(Version::V2, "https://images.example.org/iiif/page1", &info).unwrap();
/// assert_eq!(image.id(), Some("https://images.example.org/iiif/page1/full/full/0/default.jpg"));
/// assert_eq!(image.get("width"), Some(&Value::from(2000)));
/// ```
pub fn image_resource_from_info(
    version: Version,
    base: &str,
    info: &OrderedMap<Value>,
) -> Result<Resource, ResourceError> {
    let base = base.trim_end_matches('/');
    let mut image = Resource::new(version, Kind::ImageResource)?;
    image.set(version.id_key(), format!("{base}/{FULL_IMAGE_PATH}"))?;
    image.set("format", "image/jpeg")?;

    for key in ["width", "height"] {
        let Some(value) = info.get(key) else {
            return Err(image.illegal(key, "missing from the image information"));
        };
        image.set(key, value.clone())?;
    }

    let mut service = Resource::new(version, Kind::Service)?;
    if let Some(context) = info.get(CONTEXT_KEY) {
        service.insert_raw(CONTEXT_KEY, context.clone());
    }
    let service_id = info
        .get(V2_ID_KEY)
        .or_else(|| info.get(V3_ID_KEY))
        .cloned()
        .unwrap_or_else(|| Value::from(base));
    service.set(version.id_key(), service_id)?;
    if let Some(profile) = info.get("profile") {
        service.set("profile", profile.clone())?;
    }

    match version {
        Version::V2 => image.set("service", service)?,
        Version::V3 => image.set("service", vec![service])?,
    };

    debug!(version = %version, base, "Built image resource from image information");
    Ok(image)
}
