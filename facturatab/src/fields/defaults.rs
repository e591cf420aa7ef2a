// Built-in DTE field catalog - mirrors the fields the importer produces

use super::types::FieldDescriptor;

pub const CATEGORY_IDENTIFICACION: &str = "Identificación";
pub const CATEGORY_EMISOR: &str = "Emisor";
pub const CATEGORY_RECEPTOR: &str = "Receptor";
pub const CATEGORY_RESUMEN: &str = "Resumen";
pub const CATEGORY_DETALLE: &str = "Detalle";
pub const CATEGORY_ESTADO: &str = "Estado";

/// Field ids selected out of the box. `reset_to_defaults` restores this
/// exact set.
pub const DEFAULT_SELECTED: &[&str] = &[
    "numeroControl",
    "codigoGeneracion",
    "fecEmi",
    "emisorNombre",
    "receptorNombre",
    "totalPagar",
];

/// The full built-in catalog, in catalog order.
pub fn default_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(
            "numeroControl",
            "Número de Control",
            "identificacion.numeroControl",
            CATEGORY_IDENTIFICACION,
        ),
        FieldDescriptor::new(
            "codigoGeneracion",
            "Código de Generación",
            "identificacion.codigoGeneracion",
            CATEGORY_IDENTIFICACION,
        ),
        FieldDescriptor::new(
            "tipoDte",
            "Tipo de DTE",
            "identificacion.tipoDte",
            CATEGORY_IDENTIFICACION,
        ),
        FieldDescriptor::new(
            "fecEmi",
            "Fecha de Emisión",
            "identificacion.fecEmi",
            CATEGORY_IDENTIFICACION,
        ),
        FieldDescriptor::new(
            "horEmi",
            "Hora de Emisión",
            "identificacion.horEmi",
            CATEGORY_IDENTIFICACION,
        ),
        FieldDescriptor::new("emisorNombre", "Emisor", "emisor.nombre", CATEGORY_EMISOR),
        FieldDescriptor::new("emisorNit", "NIT Emisor", "emisor.nit", CATEGORY_EMISOR),
        FieldDescriptor::new("emisorNrc", "NRC Emisor", "emisor.nrc", CATEGORY_EMISOR),
        FieldDescriptor::new(
            "receptorNombre",
            "Receptor",
            "receptor.nombre",
            CATEGORY_RECEPTOR,
        ),
        FieldDescriptor::new(
            "receptorNumDocumento",
            "Documento Receptor",
            "receptor.numDocumento",
            CATEGORY_RECEPTOR,
        ),
        FieldDescriptor::new(
            "totalGravada",
            "Total Gravado",
            "resumen.totalGravada",
            CATEGORY_RESUMEN,
        ),
        FieldDescriptor::new(
            "totalIva",
            "IVA",
            "resumen.totalIva",
            CATEGORY_RESUMEN,
        ),
        FieldDescriptor::new(
            "totalPagar",
            "Total a Pagar",
            "resumen.totalPagar",
            CATEGORY_RESUMEN,
        ),
        FieldDescriptor::new(
            "condicionOperacion",
            "Condición de Operación",
            "resumen.condicionOperacion",
            CATEGORY_RESUMEN,
        ),
        FieldDescriptor::new(
            "primerItemDescripcion",
            "Primer Ítem",
            "cuerpoDocumento.0.descripcion",
            CATEGORY_DETALLE,
        ),
        FieldDescriptor::calculated("estado", "Estado", CATEGORY_ESTADO),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let fields = default_fields();
        let ids: HashSet<&str> = fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), fields.len());
    }

    #[test]
    fn test_default_selection_exists_in_catalog() {
        let fields = default_fields();
        for id in DEFAULT_SELECTED {
            assert!(
                fields.iter().any(|f| f.id == *id),
                "default selection '{id}' missing from catalog"
            );
        }
    }

    #[test]
    fn test_only_calculated_fields_lack_paths() {
        for field in default_fields() {
            assert_eq!(field.path.is_empty(), field.calculated, "field {}", field.id);
        }
    }
}
