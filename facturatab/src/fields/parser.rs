use super::types::FieldConfig;
use crate::error::{FacturaTabError, Result};
use std::collections::HashSet;
use std::path::Path;

/// Parse a fields.yaml file into a FieldConfig
pub fn parse_config(path: &Path) -> Result<FieldConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse a field config YAML string into a FieldConfig
pub fn parse_config_str(content: &str) -> Result<FieldConfig> {
    let config: FieldConfig = serde_yaml::from_str(content)?;
    check_config(&config)?;
    Ok(config)
}

/// Serialize a FieldConfig back to YAML for persistence
pub fn config_to_string(config: &FieldConfig) -> Result<String> {
    Ok(serde_yaml::to_string(config)?)
}

/// Structural checks serde cannot express: unique ids, paths on
/// non-calculated fields, selection referencing known ids.
fn check_config(config: &FieldConfig) -> Result<()> {
    let mut seen = HashSet::new();
    for field in &config.fields {
        if !seen.insert(field.id.as_str()) {
            return Err(FacturaTabError::Config(format!(
                "Duplicate field id '{}'",
                field.id
            )));
        }
        if !field.calculated && field.path.is_empty() {
            return Err(FacturaTabError::Config(format!(
                "Field '{}' has no path and is not calculated",
                field.id
            )));
        }
    }

    for id in &config.selected {
        if !seen.contains(id.as_str()) {
            return Err(FacturaTabError::Config(format!(
                "Selected id '{id}' is not in the field list"
            )));
        }
    }

    Ok(())
}
