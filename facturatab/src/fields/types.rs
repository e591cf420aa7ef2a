use serde::{Deserialize, Serialize};

/// A named, addressable projection rule: where a table column gets its
/// value from and how it is labeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique within a registry; doubles as the row key.
    pub id: String,
    /// Column header shown to users and written by exporters.
    pub label: String,
    /// Dot-delimited address into a document. Empty and unused when
    /// `calculated` is true.
    #[serde(default)]
    pub path: String,
    /// Grouping used by the field-selection UI.
    pub category: String,
    /// True when the value is derived by the caller instead of resolved
    /// from the document.
    #[serde(default)]
    pub calculated: bool,
}

impl FieldDescriptor {
    pub fn new(id: &str, label: &str, path: &str, category: &str) -> Self {
        FieldDescriptor {
            id: id.to_string(),
            label: label.to_string(),
            path: path.to_string(),
            category: category.to_string(),
            calculated: false,
        }
    }

    pub fn calculated(id: &str, label: &str, category: &str) -> Self {
        FieldDescriptor {
            id: id.to_string(),
            label: label.to_string(),
            path: String::new(),
            category: category.to_string(),
            calculated: true,
        }
    }
}

/// The persistable field configuration: the full catalog plus which field
/// ids are currently selected, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub selected: Vec<String>,
}
