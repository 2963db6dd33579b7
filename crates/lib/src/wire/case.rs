//! Key case conversion between internal and wire form.
//!
//! Only plain identifier keys are converted. JSON-LD markers (`@id`),
//! private keys (`_x`) and keys carrying other characters, such as the
//! language tag `en-GB`, pass through unchanged in both directions. So do
//! keys carrying an acronym (`profileURL`), which could not be rebuilt from
//! their snake_case form.

use heck::{ToLowerCamelCase, ToSnakeCase};

/// Converts an internal snake_case key to its external camelCase form.
///
/// ```
/// # use folio::wire::case::to_external;
/// assert_eq!(to_external("see_also"), "seeAlso");
/// assert_eq!(to_external("@context"), "@context");
/// assert_eq!(to_external("label"), "label");
/// ```
pub fn to_external(key: &str) -> String {
    let plain = !key.starts_with(['@', '_'])
        && key.contains('_')
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
    if plain {
        key.to_lower_camel_case()
    } else {
        key.to_string()
    }
}

/// Converts an external camelCase key to its internal snake_case form.
///
/// ```
/// # use folio::wire::case::to_internal;
/// assert_eq!(to_internal("seeAlso"), "see_also");
/// assert_eq!(to_internal("en-GB"), "en-GB");
/// assert_eq!(to_internal("profileURL"), "profileURL");
/// ```
pub fn to_internal(key: &str) -> String {
    let bytes = key.as_bytes();
    let plain = key.starts_with(|c: char| c.is_ascii_lowercase())
        && bytes.iter().all(u8::is_ascii_alphanumeric)
        && bytes.iter().any(u8::is_ascii_uppercase)
        && !bytes
            .windows(2)
            .any(|pair| pair[0].is_ascii_uppercase() && pair[1].is_ascii_uppercase());
    if plain {
        key.to_snake_case()
    } else {
        key.to_string()
    }
}
