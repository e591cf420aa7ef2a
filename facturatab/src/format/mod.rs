// Display formatting - resolved values to the strings a table cell shows

use crate::document::FieldValue;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// What a cell shows when there is nothing to show.
pub const PLACEHOLDER: &str = "-";

static ISO_DATE_PREFIX: OnceLock<Regex> = OnceLock::new();

fn iso_date_prefix() -> &'static Regex {
    ISO_DATE_PREFIX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap())
}

/// Format a resolved value for display. Pure and deterministic.
///
/// - `Null` → [`PLACEHOLDER`]
/// - booleans → `Sí` / `No`
/// - numbers → thousands-grouped with two decimals (`1234.5` → `1,234.50`)
/// - strings opening with an ISO-8601 date → `dd/mm/YYYY`; if the prefix
///   does not parse as a real date the string passes through unchanged
/// - everything else verbatim
///
/// `field_id` identifies the originating field in diagnostics; it does not
/// influence the rendering.
pub fn format_value(value: &FieldValue, field_id: &str) -> String {
    match value {
        FieldValue::Null => PLACEHOLDER.to_string(),
        FieldValue::Bool(true) => "Sí".to_string(),
        FieldValue::Bool(false) => "No".to_string(),
        FieldValue::Number(n) => format_number(*n),
        FieldValue::Text(s) => format_text(s, field_id),
    }
}

fn format_text(s: &str, field_id: &str) -> String {
    if iso_date_prefix().is_match(s) {
        // Prefix match only: "2026-03-15T10:30:00-06:00" renders the date
        // part, and a malformed prefix falls back to the raw string.
        match NaiveDate::parse_from_str(&s[..10], "%Y-%m-%d") {
            Ok(date) => return date.format("%d/%m/%Y").to_string(),
            Err(e) => {
                log::debug!("Field '{field_id}': date-like value '{s}' did not parse: {e}");
            }
        }
    }
    s.to_string()
}

/// Two fixed decimals with comma thousands grouping.
fn format_number(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_is_placeholder() {
        assert_eq!(format_value(&FieldValue::Null, "x"), "-");
    }

    #[test]
    fn test_booleans_are_localized() {
        assert_eq!(format_value(&FieldValue::Bool(true), "x"), "Sí");
        assert_eq!(format_value(&FieldValue::Bool(false), "x"), "No");
    }

    #[test]
    fn test_numbers_group_thousands_with_two_decimals() {
        assert_eq!(format_value(&FieldValue::Number(1234.5), "x"), "1,234.50");
        assert_eq!(format_value(&FieldValue::Number(113.0), "x"), "113.00");
        assert_eq!(format_value(&FieldValue::Number(0.0), "x"), "0.00");
        assert_eq!(format_value(&FieldValue::Number(1_000_000.0), "x"), "1,000,000.00");
        assert_eq!(format_value(&FieldValue::Number(999.999), "x"), "1,000.00");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(format_value(&FieldValue::Number(-1234.5), "x"), "-1,234.50");
        assert_eq!(format_value(&FieldValue::Number(-0.25), "x"), "-0.25");
    }

    #[test]
    fn test_iso_date_prefix_is_reformatted() {
        let v = FieldValue::Text("2026-03-15".into());
        assert_eq!(format_value(&v, "fecEmi"), "15/03/2026");

        let v = FieldValue::Text("2026-03-15T10:30:00-06:00".into());
        assert_eq!(format_value(&v, "fecEmi"), "15/03/2026");
    }

    #[test]
    fn test_malformed_date_prefix_passes_through() {
        // Matches the prefix shape but is not a real date
        let v = FieldValue::Text("2026-13-99 almost a date".into());
        assert_eq!(format_value(&v, "fecEmi"), "2026-13-99 almost a date");
    }

    #[test]
    fn test_plain_strings_are_verbatim() {
        let v = FieldValue::Text("ACME S.A. de C.V.".into());
        assert_eq!(format_value(&v, "emisorNombre"), "ACME S.A. de C.V.");

        // Date-ish but not at the start
        let v = FieldValue::Text("emitido 2026-03-15".into());
        assert_eq!(format_value(&v, "x"), "emitido 2026-03-15");
    }

    #[test]
    fn test_determinism() {
        let v = FieldValue::Number(98765.432);
        assert_eq!(format_value(&v, "x"), format_value(&v, "x"));
    }
}
