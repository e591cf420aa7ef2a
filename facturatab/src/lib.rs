pub mod document;
pub mod error;
pub mod export;
pub mod fields;
pub mod format;
pub mod project;
pub mod registry;
pub mod resolve;

pub use document::{Document, FieldValue};
pub use error::{FacturaTabError, Result};
pub use fields::{FieldConfig, FieldDescriptor};
pub use format::{format_value, PLACEHOLDER};
pub use project::{project, project_with, Row};
pub use registry::FieldRegistry;
pub use resolve::{resolve, resolve_strict, ResolutionFault};
