use super::aggregate::RegistryField;

/// Колонка таблицы регистра: поле, заголовок (bg) и ширина в px
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub field: RegistryField,
    pub header: &'static str,
    pub width: u32,
}

impl ColumnDef {
    const fn new(field: RegistryField, header: &'static str, width: u32) -> Self {
        Self {
            field,
            header,
            width,
        }
    }

    pub const fn key(&self) -> &'static str {
        self.field.key()
    }
}

pub const REGISTRY_COLUMNS: [ColumnDef; 12] = [
    ColumnDef::new(RegistryField::Status, "Статус", 150),
    ColumnDef::new(RegistryField::EikPik, "ЕИК/ПИК", 150),
    ColumnDef::new(RegistryField::RegistryZdds, "Регистрация по ЗДДС", 250),
    ColumnDef::new(RegistryField::RegistryDate, "Дата на регистрация", 250),
    ColumnDef::new(RegistryField::Name, "Наименование", 200),
    ColumnDef::new(RegistryField::Transliteration, "Транслитерация", 200),
    ColumnDef::new(RegistryField::LegalForm, "Правна форма", 200),
    ColumnDef::new(RegistryField::PermanentAddress, "Постоянен адрес", 200),
    ColumnDef::new(RegistryField::ActivityArea, "Предмет на дейност", 300),
    ColumnDef::new(RegistryField::Managers, "Управители", 300),
    ColumnDef::new(RegistryField::Partners, "Съдружници", 250),
    ColumnDef::new(RegistryField::Capital, "Капитал размер", 200),
];

/// Columns are declared in `RegistryField` order, so the discriminant is the index.
pub fn column(field: RegistryField) -> &'static ColumnDef {
    &REGISTRY_COLUMNS[field as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_field_order() {
        let fields: Vec<_> = REGISTRY_COLUMNS.iter().map(|c| c.field).collect();
        assert_eq!(fields, RegistryField::ALL.to_vec());
    }

    #[test]
    fn test_column_widths_within_bounds() {
        for column in &REGISTRY_COLUMNS {
            assert!((150..=300).contains(&column.width), "{}", column.key());
            assert!(!column.header.is_empty());
        }
    }

    #[test]
    fn test_column_lookup() {
        assert_eq!(column(RegistryField::ActivityArea).header, "Предмет на дейност");
        assert_eq!(column(RegistryField::Capital).width, 200);
    }
}
