use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// Fields
// ============================================================================

/// Поле записи регистра; `key()` совпадает с именем XML-элемента и ключом колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryField {
    Status,
    EikPik,
    RegistryZdds,
    RegistryDate,
    Name,
    Transliteration,
    LegalForm,
    PermanentAddress,
    ActivityArea,
    Managers,
    Partners,
    Capital,
}

impl RegistryField {
    pub const ALL: [RegistryField; 12] = [
        RegistryField::Status,
        RegistryField::EikPik,
        RegistryField::RegistryZdds,
        RegistryField::RegistryDate,
        RegistryField::Name,
        RegistryField::Transliteration,
        RegistryField::LegalForm,
        RegistryField::PermanentAddress,
        RegistryField::ActivityArea,
        RegistryField::Managers,
        RegistryField::Partners,
        RegistryField::Capital,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            RegistryField::Status => "status",
            RegistryField::EikPik => "eik_pik",
            RegistryField::RegistryZdds => "registry_zdds",
            RegistryField::RegistryDate => "registry_date",
            RegistryField::Name => "name",
            RegistryField::Transliteration => "transliteration",
            RegistryField::LegalForm => "legal_form",
            RegistryField::PermanentAddress => "permanent_address",
            RegistryField::ActivityArea => "activity_area",
            RegistryField::Managers => "managers",
            RegistryField::Partners => "partners",
            RegistryField::Capital => "capital",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for RegistryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Registration date
// ============================================================================

/// Дата регистрации: исходный текст и его числовое значение, если текст - число
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryDate {
    raw: String,
    value: Option<f64>,
}

impl RegistryDate {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite());
        Self { raw, value }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_numeric(&self) -> bool {
        self.value.is_some()
    }
}

impl Serialize for RegistryDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl fmt::Display for RegistryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// ============================================================================
// Row
// ============================================================================

/// Одна запись торгового регистра в плоской форме для таблицы
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryRow {
    /// Позиция `<row>` в документе ("0", "1", ...); не стабильна между загрузками
    pub id: String,
    pub status: String,
    pub eik_pik: String,
    pub registry_zdds: String,
    pub registry_date: RegistryDate,
    pub name: String,
    pub transliteration: String,
    pub legal_form: String,
    pub permanent_address: String,
    pub activity_area: String,
    pub managers: String,
    pub partners: String,
    pub capital: String,
}

impl RegistryRow {
    /// Cell text for a column.
    pub fn value(&self, field: RegistryField) -> &str {
        match field {
            RegistryField::Status => &self.status,
            RegistryField::EikPik => &self.eik_pik,
            RegistryField::RegistryZdds => &self.registry_zdds,
            RegistryField::RegistryDate => self.registry_date.raw(),
            RegistryField::Name => &self.name,
            RegistryField::Transliteration => &self.transliteration,
            RegistryField::LegalForm => &self.legal_form,
            RegistryField::PermanentAddress => &self.permanent_address,
            RegistryField::ActivityArea => &self.activity_area,
            RegistryField::Managers => &self.managers,
            RegistryField::Partners => &self.partners,
            RegistryField::Capital => &self.capital,
        }
    }

    /// Ordering used by the grid's column sort.
    ///
    /// Text compares case-insensitively, dates numerically when both sides
    /// are numeric. Equal values compare `Equal`; the grid breaks ties with
    /// [`position`](Self::position) independently of the sort direction.
    pub fn compare_by(&self, other: &Self, field: RegistryField) -> Ordering {
        match field {
            RegistryField::RegistryDate => {
                match (self.registry_date.value(), other.registry_date.value()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => self.registry_date.raw().cmp(other.registry_date.raw()),
                }
            }
            _ => self
                .value(field)
                .to_lowercase()
                .cmp(&other.value(field).to_lowercase()),
        }
    }

    /// Position of the `<row>` in the document, taken from `id`.
    pub fn position(&self) -> usize {
        self.id.parse().unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, date: &str) -> RegistryRow {
        RegistryRow {
            id: id.to_string(),
            status: "Нова".to_string(),
            eik_pik: "201234567".to_string(),
            registry_zdds: String::new(),
            registry_date: RegistryDate::new(date),
            name: name.to_string(),
            transliteration: String::new(),
            legal_form: "ЕООД".to_string(),
            permanent_address: String::new(),
            activity_area: String::new(),
            managers: String::new(),
            partners: String::new(),
            capital: String::new(),
        }
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in RegistryField::ALL {
            assert_eq!(RegistryField::from_key(field.key()), Some(field));
        }
        assert_eq!(RegistryField::from_key("id"), None);
    }

    #[test]
    fn test_registry_date_numeric_detection() {
        assert_eq!(RegistryDate::new("20080115").value(), Some(20080115.0));
        assert_eq!(RegistryDate::new(" 42 ").value(), Some(42.0));
        assert!(!RegistryDate::new("15.01.2008").is_numeric());
        assert!(!RegistryDate::new("").is_numeric());
        assert!(!RegistryDate::new("NaN").is_numeric());
        assert_eq!(RegistryDate::new(" 42 ").raw(), " 42 ");
    }

    #[test]
    fn test_compare_text_case_insensitive() {
        let a = row("0", "алфа", "1");
        let b = row("1", "Бета", "1");
        assert_eq!(a.compare_by(&b, RegistryField::Name), Ordering::Less);
        assert_eq!(b.compare_by(&a, RegistryField::Name), Ordering::Greater);
    }

    #[test]
    fn test_compare_dates_numerically() {
        let early = row("0", "x", "9");
        let late = row("1", "x", "10");
        let text = row("2", "x", "неизвестна");
        assert_eq!(early.compare_by(&late, RegistryField::RegistryDate), Ordering::Less);
        assert_eq!(late.compare_by(&text, RegistryField::RegistryDate), Ordering::Less);
    }

    #[test]
    fn test_equal_values_compare_equal_positions_differ() {
        let first = row("2", "same", "1");
        let second = row("10", "SAME", "1");
        assert_eq!(first.compare_by(&second, RegistryField::Name), Ordering::Equal);
        assert!(first.position() < second.position());
    }
}
