//! Compact XML tree → registry rows.
//!
//! Expected shape:
//!
//! ```xml
//! <registries>
//!   <national_commercial_registry>
//!     <row>
//!       <status>…</status>
//!       …twelve fields…
//!     </row>
//!   </national_commercial_registry>
//! </registries>
//! ```
//!
//! Rows are validated one by one. A row missing a field element is skipped
//! and reported; the remaining rows still render.

use super::aggregate::{RegistryDate, RegistryField, RegistryRow};
use crate::shared::xml_compact::{parse_compact, CompactNode, XmlError};

pub const ROOT_ELEMENT: &str = "registries";
pub const REGISTRY_ELEMENT: &str = "national_commercial_registry";
pub const ROW_ELEMENT: &str = "row";

/// A `<row>` that could not be mapped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row {index} is missing fields: {}", .missing.join(", "))]
pub struct RowError {
    /// Position of the `<row>` in the document.
    pub index: usize,
    pub missing: Vec<&'static str>,
}

/// A mapped row whose content looks suspicious. The row is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowWarning {
    NonNumericDate { id: String, raw: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryReport {
    pub rows: Vec<RegistryRow>,
    pub rejected: Vec<RowError>,
    pub warnings: Vec<RowWarning>,
}

impl RegistryReport {
    /// Number of `<row>` elements seen, mapped or not.
    pub fn total(&self) -> usize {
        self.rows.len() + self.rejected.len()
    }
}

/// Maps a parsed document to registry rows.
///
/// Returns `None` when the document has no `registries` root or no
/// `national_commercial_registry` inside it: there is nothing to render.
pub fn map_registry(document: &CompactNode) -> Option<RegistryReport> {
    let registry = document.child(ROOT_ELEMENT)?.child(REGISTRY_ELEMENT)?;

    let mut report = RegistryReport::default();
    for (index, node) in registry.children(ROW_ELEMENT).iter().enumerate() {
        match map_row(index, node) {
            Ok(row) => {
                if !row.registry_date.is_numeric() {
                    report.warnings.push(RowWarning::NonNumericDate {
                        id: row.id.clone(),
                        raw: row.registry_date.raw().to_string(),
                    });
                }
                report.rows.push(row);
            }
            Err(error) => report.rejected.push(error),
        }
    }
    Some(report)
}

/// Parses raw XML text and maps it in one step.
pub fn parse_registry(xml: &str) -> Result<Option<RegistryReport>, XmlError> {
    let document = parse_compact(xml)?;
    Ok(map_registry(&document))
}

/// Maps one `<row>`. An empty element is an empty value; only an absent
/// element is missing.
pub fn map_row(index: usize, node: &CompactNode) -> Result<RegistryRow, RowError> {
    let mut fields = FieldReader {
        node,
        missing: Vec::new(),
    };

    let row = RegistryRow {
        id: index.to_string(),
        status: fields.take(RegistryField::Status),
        eik_pik: fields.take(RegistryField::EikPik),
        registry_zdds: fields.take(RegistryField::RegistryZdds),
        registry_date: RegistryDate::new(fields.take(RegistryField::RegistryDate)),
        name: fields.take(RegistryField::Name),
        transliteration: fields.take(RegistryField::Transliteration),
        legal_form: fields.take(RegistryField::LegalForm),
        permanent_address: fields.take(RegistryField::PermanentAddress),
        activity_area: fields.take(RegistryField::ActivityArea),
        managers: fields.take(RegistryField::Managers),
        partners: fields.take(RegistryField::Partners),
        capital: fields.take(RegistryField::Capital),
    };

    if fields.missing.is_empty() {
        Ok(row)
    } else {
        Err(RowError {
            index,
            missing: fields.missing,
        })
    }
}

struct FieldReader<'a> {
    node: &'a CompactNode,
    missing: Vec<&'static str>,
}

impl FieldReader<'_> {
    fn take(&mut self, field: RegistryField) -> String {
        match self.node.child(field.key()) {
            Some(element) => element.text().unwrap_or_default().to_string(),
            None => {
                self.missing.push(field.key());
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row(name: &str, date: &str) -> String {
        format!(
            "<row><id>ignored</id><status>Вписана</status><eik_pik>123</eik_pik>\
             <registry_zdds>BG123</registry_zdds><registry_date>{date}</registry_date>\
             <name>{name}</name><transliteration>{name}</transliteration>\
             <legal_form>ООД</legal_form><permanent_address>София</permanent_address>\
             <activity_area>търговия</activity_area><managers>Иван</managers>\
             <partners>Петър</partners><capital>5000</capital></row>"
        )
    }

    fn document(rows: &str) -> CompactNode {
        parse_compact(&format!(
            "<registries><national_commercial_registry>{rows}</national_commercial_registry></registries>"
        ))
        .unwrap()
    }

    #[test]
    fn test_missing_root_renders_nothing() {
        assert!(map_registry(&parse_compact("").unwrap()).is_none());
        assert!(map_registry(&parse_compact("<other/>").unwrap()).is_none());
        assert!(map_registry(&parse_compact("<registries><x/></registries>").unwrap()).is_none());
    }

    #[test]
    fn test_registry_without_rows_is_empty_report() {
        let report = map_registry(&document("")).unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_own_id_element_is_ignored() {
        let report = map_registry(&document(&full_row("А", "1"))).unwrap();
        assert_eq!(report.rows[0].id, "0");
    }

    #[test]
    fn test_row_missing_fields_is_skipped_and_reported() {
        let broken = "<row><status>x</status><name>y</name></row>";
        let rows = format!("{}{}{}", full_row("A", "1"), broken, full_row("C", "3"));
        let report = map_registry(&document(&rows)).unwrap();

        let ids: Vec<_> = report.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "2"]);
        assert_eq!(report.total(), 3);
        assert_eq!(report.rejected.len(), 1);

        let error = &report.rejected[0];
        assert_eq!(error.index, 1);
        assert!(error.missing.contains(&"eik_pik"));
        assert!(error.missing.contains(&"capital"));
        assert!(!error.missing.contains(&"name"));
        assert_eq!(error.missing.len(), 10);
        assert!(error.to_string().starts_with("row 1 is missing fields: eik_pik"));
    }

    #[test]
    fn test_empty_field_element_is_empty_value() {
        let row = full_row("A", "1").replace("<partners>Петър</partners>", "<partners/>");
        let report = map_registry(&document(&row)).unwrap();
        assert!(report.rejected.is_empty());
        assert_eq!(report.rows[0].partners, "");
    }

    #[test]
    fn test_field_text_is_copied_verbatim() {
        let row = full_row("  ALFA  ", " 20080115 ")
            .replace("<partners>Петър</partners>", "<partners>   </partners>");
        let report = map_registry(&document(&row)).unwrap();

        let row = &report.rows[0];
        assert_eq!(row.name, "  ALFA  ");
        assert_eq!(row.transliteration, "  ALFA  ");
        assert_eq!(row.partners, "");
        assert_eq!(row.registry_date.raw(), " 20080115 ");
        assert_eq!(row.registry_date.value(), Some(20080115.0));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_non_numeric_date_is_warning_not_rejection() {
        let report = map_registry(&document(&full_row("A", "15.01.2008"))).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(
            report.warnings,
            vec![RowWarning::NonNumericDate {
                id: "0".to_string(),
                raw: "15.01.2008".to_string(),
            }]
        );
    }

    #[test]
    fn test_mapping_is_pure() {
        let doc = document(&format!("{}{}", full_row("A", "1"), full_row("B", "x")));
        assert_eq!(map_registry(&doc), map_registry(&doc));
    }

    #[test]
    fn test_parse_registry_propagates_xml_errors() {
        assert!(parse_registry("<registries><row></registries>").is_err());
        assert_eq!(parse_registry("").unwrap(), None);
    }
}
