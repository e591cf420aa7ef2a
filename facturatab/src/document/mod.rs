// Document values - the JSON shapes the projection core reads

use serde::{Deserialize, Serialize};

/// One imported invoice record: arbitrarily nested JSON as delivered by the
/// document store. The core only reads it, never mutates.
pub type Document = serde_json::Value;

/// A value resolved out of a document, flattened to what a table cell can
/// hold. Nested structures are serialized to JSON text before they reach
/// this type, so consumers only ever see scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}
