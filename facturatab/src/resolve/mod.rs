// Nested-path resolution - dotted paths into invoice documents

use crate::document::{Document, FieldValue};
use serde_json::Value;
use thiserror::Error;

/// Why a path could not be walked at all. A path that walks fine but lands
/// on nothing is not a fault — that is an ordinary miss and resolves to
/// `FieldValue::Null`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolutionFault {
    #[error("empty path")]
    EmptyPath,

    #[error("empty segment at position {position} in path '{path}'")]
    EmptySegment { path: String, position: usize },
}

/// Resolve a dotted path against a document.
///
/// Segments that parse as non-negative integers index into arrays;
/// everything else is an object key lookup. A numeric segment against an
/// object is still a key lookup (`"a.0"` reads key `"0"` when `a` is an
/// object). Misses of any kind — absent key, out-of-range index, scalar or
/// null encountered mid-walk — yield `FieldValue::Null`.
///
/// When the walk ends on an array or object, the structure is returned as
/// its JSON serialization in `FieldValue::Text`, so callers always receive
/// a scalar-shaped value.
///
/// Never fails: malformed paths are logged and collapsed to `Null`. Use
/// [`resolve_strict`] to observe the fault.
pub fn resolve(document: &Document, path: &str) -> FieldValue {
    match resolve_strict(document, path) {
        Ok(value) => value,
        Err(fault) => {
            log::warn!("Path resolution fault, treating as no value: {fault}");
            FieldValue::Null
        }
    }
}

/// Resolve a dotted path, surfacing malformed-path faults instead of
/// collapsing them. `Ok(FieldValue::Null)` means the path is well-formed
/// but nothing is there.
pub fn resolve_strict(document: &Document, path: &str) -> Result<FieldValue, ResolutionFault> {
    if path.is_empty() {
        return Err(ResolutionFault::EmptyPath);
    }

    let mut current = document;
    for (position, segment) in path.split('.').enumerate() {
        if segment.is_empty() {
            return Err(ResolutionFault::EmptySegment {
                path: path.to_string(),
                position,
            });
        }

        let next = match current {
            Value::Array(items) => match segment.parse::<usize>() {
                Ok(index) => items.get(index),
                Err(_) => None,
            },
            Value::Object(map) => map.get(segment),
            // Scalar or null mid-walk: the remaining segments address
            // nothing. Same outcome as an absent key.
            _ => None,
        };

        match next {
            Some(value) => current = value,
            None => return Ok(FieldValue::Null),
        }
    }

    Ok(flatten(current))
}

/// Collapse a terminal JSON value into a cell-shaped `FieldValue`.
fn flatten(value: &Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => FieldValue::Number(f),
            None => FieldValue::Text(n.to_string()),
        },
        Value::String(s) => FieldValue::Text(s.clone()),
        // Serializing a Value cannot fail, but keep the structure's raw
        // Debug form rather than panicking if it ever does.
        Value::Array(_) | Value::Object(_) => match serde_json::to_string(value) {
            Ok(json) => FieldValue::Text(json),
            Err(e) => {
                log::warn!("Failed to serialize nested structure: {e}");
                FieldValue::Null
            }
        },
    }
}
