//! Field-path extraction from JSON response bodies.
//!
//! Response envelopes differ between endpoints: some wrap results in a
//! `resources` array, some return the created object directly, some nest
//! result lists. Instead of modelling each shape, callers name the value they
//! want with a dotted path such as `resources.0.id`.
//!
//! Values are sliced out of the original body without re-serializing, so a
//! returned object or array is byte-for-byte what the server sent.

use std::collections::HashMap;

use serde_json::value::RawValue;

use crate::error::{DecodingError, Error, InvalidInputError};

/// Path of the collection array in list and delete responses.
pub const RESOURCES: &str = "resources";

/// Path of the identifier in most create responses.
pub const ID: &str = "id";

/// Extract the value at `path` from a JSON document.
///
/// Path segments are separated by `.`; a literal dot inside a key is written
/// `\.`. A numeric segment indexes into an array.
///
/// - a string value yields its unescaped contents
/// - any other value yields its raw JSON text
/// - a missing path or a `null` value yields the empty string
///
/// # Errors
///
/// Returns [`DecodingError`] if `body` is not valid JSON and
/// [`InvalidInputError::FieldPath`] if `path` is empty.
///
/// # Example
///
/// ```
/// use kmgr_core::extract::extract;
///
/// let body = br#"{"resources":[{"id":"a"},{"id":"b"}]}"#;
/// assert_eq!(extract(body, "resources").unwrap(), r#"[{"id":"a"},{"id":"b"}]"#);
/// assert_eq!(extract(body, "resources.1.id").unwrap(), "b");
/// assert_eq!(extract(body, "total").unwrap(), "");
/// ```
pub fn extract(body: &[u8], path: &str) -> Result<String, Error> {
    if path.is_empty() {
        return Err(InvalidInputError::FieldPath {
            value: path.to_string(),
            reason: "path must not be empty".to_string(),
        }
        .into());
    }

    let root: &RawValue = serde_json::from_slice(body)
        .map_err(|e| DecodingError::new("response body", e))?;

    let mut current = root;
    for segment in split_path(path) {
        match lookup(current, &segment) {
            Some(next) => current = next,
            None => return Ok(String::new()),
        }
    }

    render(current)
}

fn split_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => current.push('\\'),
            },
            '.' => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    segments.push(current);
    segments
}

fn lookup<'a>(value: &'a RawValue, segment: &str) -> Option<&'a RawValue> {
    let text: &'a str = value.get();
    match text.as_bytes().first()? {
        b'{' => {
            let fields: HashMap<String, &'a RawValue> = serde_json::from_str(text).ok()?;
            fields.get(segment).copied()
        }
        b'[' => {
            let index: usize = segment.parse().ok()?;
            let items: Vec<&'a RawValue> = serde_json::from_str(text).ok()?;
            items.get(index).copied()
        }
        _ => None,
    }
}

fn render(value: &RawValue) -> Result<String, Error> {
    let text = value.get();
    if text.starts_with('"') {
        let unescaped: String =
            serde_json::from_str(text).map_err(|e| DecodingError::new("string value", e))?;
        Ok(unescaped)
    } else if text == "null" {
        Ok(String::new())
    } else {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_top_level_string_unquoted() {
        let body = br#"{"id":"xyz","name":"foo"}"#;
        assert_eq!(extract(body, ID).unwrap(), "xyz");
    }

    #[test]
    fn extracts_array_verbatim() {
        let body = br#"{"skip": 0, "resources": [ {"name":"b", "id":"1"}, {"id":"2"} ]}"#;
        assert_eq!(
            extract(body, RESOURCES).unwrap(),
            r#"[ {"name":"b", "id":"1"}, {"id":"2"} ]"#
        );
    }

    #[test]
    fn follows_nested_objects_and_indices() {
        let body = br#"{"result":{"items":[{"id":"first"},{"id":"second","meta":{"size":256}}]}}"#;
        assert_eq!(extract(body, "result.items.1.id").unwrap(), "second");
        assert_eq!(extract(body, "result.items.1.meta.size").unwrap(), "256");
        assert_eq!(extract(body, "result.items.1.meta").unwrap(), r#"{"size":256}"#);
    }

    #[test]
    fn escaped_dot_matches_literal_key() {
        let body = br#"{"a.b":{"c":true}}"#;
        assert_eq!(extract(body, r"a\.b.c").unwrap(), "true");
    }

    #[test]
    fn missing_path_and_null_yield_empty() {
        let body = br#"{"id":null,"resources":[]}"#;
        assert_eq!(extract(body, "id").unwrap(), "");
        assert_eq!(extract(body, "name").unwrap(), "");
        assert_eq!(extract(body, "resources.0").unwrap(), "");
        assert_eq!(extract(body, "id.nested").unwrap(), "");
        assert_eq!(extract(body, "resources.first").unwrap(), "");
    }

    #[test]
    fn string_escapes_are_decoded() {
        let body = br#"{"label":"line\nbreak \"quoted\""}"#;
        assert_eq!(extract(body, "label").unwrap(), "line\nbreak \"quoted\"");
    }

    #[test]
    fn non_json_body_is_a_decoding_error() {
        let result = extract(b"internal error", RESOURCES);
        assert!(matches!(result, Err(Error::Decoding(_))));
    }

    #[test]
    fn empty_path_is_rejected() {
        let result = extract(b"{}", "");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
