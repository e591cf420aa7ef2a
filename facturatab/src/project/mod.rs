// Tabular projection - selected fields over documents, one row each

use crate::document::Document;
use crate::fields::types::FieldDescriptor;
use crate::format::{format_value, PLACEHOLDER};
use crate::resolve::resolve;
use std::collections::BTreeMap;

/// The formatted, flattened output of applying the selected fields to one
/// document: field id → display string. Built fresh per projection call.
pub type Row = BTreeMap<String, String>;

/// Project documents through the given fields, in the given field order.
///
/// Calculated fields have no document path to resolve; without a hook they
/// render as the placeholder. See [`project_with`].
pub fn project(documents: &[Document], fields: &[FieldDescriptor]) -> Vec<Row> {
    project_with(documents, fields, |_, _| None)
}

/// Project documents, with a caller hook supplying calculated-field
/// values. The hook is consulted only for descriptors with `calculated`
/// set; returning `None` renders the placeholder.
///
/// One row per document, document order preserved. Inputs are never
/// mutated, and a miss or fault in one cell degrades that cell alone.
pub fn project_with<F>(documents: &[Document], fields: &[FieldDescriptor], calc: F) -> Vec<Row>
where
    F: Fn(&Document, &FieldDescriptor) -> Option<String>,
{
    documents
        .iter()
        .map(|doc| {
            let mut row = Row::new();
            for field in fields {
                let cell = if field.calculated {
                    calc(doc, field).unwrap_or_else(|| PLACEHOLDER.to_string())
                } else {
                    format_value(&resolve(doc, &field.path), &field.id)
                };
                row.insert(field.id.clone(), cell);
            }
            row
        })
        .collect()
}
