pub mod defaults;
pub mod parser;
pub mod types;

pub use defaults::{default_fields, DEFAULT_SELECTED};
pub use parser::{config_to_string, parse_config, parse_config_str};
pub use types::{FieldConfig, FieldDescriptor};
