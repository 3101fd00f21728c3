use crate::shared::list_utils::total_pages;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CommercialRegistryState {
    /// Пустая строка - порядок документа
    pub sort_field: String,
    pub sort_ascending: bool,
    // Пагинация (клиентская, весь файл уже загружен)
    pub page: usize,
    pub page_size: usize,
}

impl CommercialRegistryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort_field: String::new(),
            sort_ascending: true,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Клик по заголовку: та же колонка - сменить направление, другая - по возрастанию
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize, total_count: usize) {
        self.page = page.min(total_pages(total_count, self.page_size) - 1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }
}

/// Create state signal
pub fn create_state(page_size: usize) -> RwSignal<CommercialRegistryState> {
    RwSignal::new(CommercialRegistryState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort() {
        let mut state = CommercialRegistryState::new(100);
        state.page = 3;

        state.toggle_sort("name");
        assert_eq!(state.sort_field, "name");
        assert!(state.sort_ascending);
        assert_eq!(state.page, 0);

        state.toggle_sort("name");
        assert!(!state.sort_ascending);

        state.toggle_sort("capital");
        assert_eq!(state.sort_field, "capital");
        assert!(state.sort_ascending);
    }

    #[test]
    fn test_page_bounds() {
        let mut state = CommercialRegistryState::new(100);
        state.set_page(5, 250);
        assert_eq!(state.page, 2);

        state.set_page_size(25);
        assert_eq!(state.page, 0);
        assert_eq!(state.page_size, 25);

        state.set_page_size(0);
        assert_eq!(state.page_size, 1);
    }
}
