// Field registry - which columns exist and which are currently shown

use crate::fields::defaults::{default_fields, DEFAULT_SELECTED};
use crate::fields::types::{FieldConfig, FieldDescriptor};

/// The stateful holder of available vs. selected field descriptors.
///
/// One registry is constructed per application context and passed to
/// whatever needs it; there is no process-wide instance. All mutation goes
/// through the selection operations below, which read-then-write the
/// selection list — callers sharing a registry across threads must
/// serialize writers (a `Mutex<FieldRegistry>` is enough).
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    available: Vec<FieldDescriptor>,
    /// Selected ids in selection (insertion) order. Invariant: every id
    /// here exists in `available`, with no duplicates.
    selected: Vec<String>,
    /// The selection `reset_to_defaults` restores.
    defaults: Vec<String>,
}

impl FieldRegistry {
    /// Registry over the built-in DTE catalog with the standard default
    /// selection.
    pub fn with_defaults() -> Self {
        let available = default_fields();
        let defaults: Vec<String> = DEFAULT_SELECTED.iter().map(|s| s.to_string()).collect();
        let selected = defaults.clone();
        FieldRegistry {
            available,
            selected,
            defaults,
        }
    }

    /// Registry over a persisted field config. The config's selection
    /// becomes both the current selection and the reset target. Unknown
    /// selected ids were already rejected by the parser, but are filtered
    /// here as well so a hand-built config cannot break the invariant.
    pub fn from_config(config: FieldConfig) -> Self {
        let selected: Vec<String> = config
            .selected
            .iter()
            .filter(|id| config.fields.iter().any(|f| f.id == **id))
            .cloned()
            .collect();
        FieldRegistry {
            available: config.fields,
            defaults: selected.clone(),
            selected,
        }
    }

    /// Snapshot the registry back into the persistable config shape.
    pub fn to_config(&self) -> FieldConfig {
        FieldConfig {
            fields: self.available.clone(),
            selected: self.selected.clone(),
        }
    }

    /// Copy of the full catalog, in catalog order.
    pub fn available_fields(&self) -> Vec<FieldDescriptor> {
        self.available.clone()
    }

    /// Copy of the current selection, in selection order.
    pub fn selected_fields(&self) -> Vec<FieldDescriptor> {
        self.selected
            .iter()
            .filter_map(|id| self.find(id).cloned())
            .collect()
    }

    /// Replace the selection with the given ids. Ordering follows catalog
    /// order, not input order; ids not in the catalog are ignored.
    pub fn set_selected<S: AsRef<str>>(&mut self, ids: &[S]) {
        self.selected = self
            .available
            .iter()
            .filter(|f| ids.iter().any(|id| id.as_ref() == f.id))
            .map(|f| f.id.clone())
            .collect();
    }

    /// Append a field to the selection. No-op when the id is unknown or
    /// already selected.
    pub fn add_selected(&mut self, id: &str) {
        if self.find(id).is_some() && !self.is_selected(id) {
            self.selected.push(id.to_string());
        }
    }

    /// Remove a field from the selection. No-op when absent.
    pub fn remove_selected(&mut self, id: &str) {
        self.selected.retain(|s| s != id);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Group the catalog by category, preserving first-seen category order
    /// and catalog order within each category.
    pub fn fields_by_category(&self) -> Vec<(String, Vec<FieldDescriptor>)> {
        let mut groups: Vec<(String, Vec<FieldDescriptor>)> = Vec::new();
        for field in &self.available {
            match groups.iter_mut().find(|(c, _)| *c == field.category) {
                Some((_, fields)) => fields.push(field.clone()),
                None => groups.push((field.category.clone(), vec![field.clone()])),
            }
        }
        groups
    }

    /// Restore the default selection (the built-in set, or the config's
    /// selection for a config-backed registry).
    pub fn reset_to_defaults(&mut self) {
        self.selected = self
            .defaults
            .iter()
            .filter(|id| self.find(id.as_str()).is_some())
            .cloned()
            .collect();
    }

    fn find(&self, id: &str) -> Option<&FieldDescriptor> {
        self.available.iter().find(|f| f.id == id)
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        FieldRegistry::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(fields: &[FieldDescriptor]) -> Vec<&str> {
        fields.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_default_selection() {
        let registry = FieldRegistry::with_defaults();
        assert_eq!(
            ids(&registry.selected_fields()),
            vec![
                "numeroControl",
                "codigoGeneracion",
                "fecEmi",
                "emisorNombre",
                "receptorNombre",
                "totalPagar"
            ]
        );
    }

    #[test]
    fn test_set_selected_follows_catalog_order() {
        let mut registry = FieldRegistry::with_defaults();
        registry.set_selected(&["totalPagar", "numeroControl", "emisorNombre"]);
        // Input order was reversed; selection comes back in catalog order
        assert_eq!(
            ids(&registry.selected_fields()),
            vec!["numeroControl", "emisorNombre", "totalPagar"]
        );
    }

    #[test]
    fn test_set_selected_ignores_unknown_ids() {
        let mut registry = FieldRegistry::with_defaults();
        registry.set_selected(&["totalPagar", "nonexistent"]);
        assert_eq!(ids(&registry.selected_fields()), vec!["totalPagar"]);
    }

    #[test]
    fn test_add_selected_is_idempotent() {
        let mut registry = FieldRegistry::with_defaults();
        registry.set_selected(&["numeroControl"]);
        registry.add_selected("totalIva");
        registry.add_selected("totalIva");
        assert_eq!(ids(&registry.selected_fields()), vec!["numeroControl", "totalIva"]);
    }

    #[test]
    fn test_add_selected_appends_in_selection_order() {
        let mut registry = FieldRegistry::with_defaults();
        registry.set_selected(&["totalPagar"]);
        // numeroControl precedes totalPagar in the catalog but appends here
        registry.add_selected("numeroControl");
        assert_eq!(ids(&registry.selected_fields()), vec!["totalPagar", "numeroControl"]);
    }

    #[test]
    fn test_add_selected_unknown_id_is_noop() {
        let mut registry = FieldRegistry::with_defaults();
        let before = registry.selected_fields();
        registry.add_selected("ghost");
        assert_eq!(registry.selected_fields(), before);
    }

    #[test]
    fn test_remove_selected() {
        let mut registry = FieldRegistry::with_defaults();
        registry.remove_selected("fecEmi");
        assert!(!registry.is_selected("fecEmi"));
        // Absent id is a no-op
        registry.remove_selected("fecEmi");
        registry.remove_selected("ghost");
    }

    #[test]
    fn test_returned_lists_are_copies() {
        let registry = FieldRegistry::with_defaults();
        let mut copy = registry.available_fields();
        copy.clear();
        assert!(!registry.available_fields().is_empty());
    }

    #[test]
    fn test_fields_by_category_first_seen_order() {
        let registry = FieldRegistry::with_defaults();
        let groups = registry.fields_by_category();
        let categories: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Identificación", "Emisor", "Receptor", "Resumen", "Detalle", "Estado"]
        );
        let (_, resumen) = &groups[3];
        assert_eq!(
            ids(resumen),
            vec!["totalGravada", "totalIva", "totalPagar", "condicionOperacion"]
        );
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut registry = FieldRegistry::with_defaults();
        registry.set_selected(&["tipoDte"]);
        registry.add_selected("horEmi");
        registry.reset_to_defaults();
        assert_eq!(
            ids(&registry.selected_fields()),
            vec![
                "numeroControl",
                "codigoGeneracion",
                "fecEmi",
                "emisorNombre",
                "receptorNombre",
                "totalPagar"
            ]
        );
    }

    #[test]
    fn test_config_round_trip() {
        let mut registry = FieldRegistry::with_defaults();
        registry.set_selected(&["numeroControl", "totalPagar"]);
        let config = registry.to_config();
        let restored = FieldRegistry::from_config(config);
        assert_eq!(
            ids(&restored.selected_fields()),
            vec!["numeroControl", "totalPagar"]
        );
        assert_eq!(restored.available_fields(), registry.available_fields());
    }

    #[test]
    fn test_from_config_filters_unknown_selection() {
        let config = FieldConfig {
            fields: vec![FieldDescriptor::new("a", "A", "x.a", "C")],
            selected: vec!["a".into(), "ghost".into()],
        };
        let registry = FieldRegistry::from_config(config);
        assert_eq!(ids(&registry.selected_fields()), vec!["a"]);
    }
}
