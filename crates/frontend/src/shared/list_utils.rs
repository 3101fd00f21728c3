//! Универсальные утилиты для работы со списками (сортировка, страницы)

use contracts::domain::a001_commercial_registry::{RegistryField, RegistryRow};
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;

    /// Порядок при равных значениях; не зависит от направления сортировки
    fn compare_position(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}

impl Sortable for RegistryRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match RegistryField::from_key(field) {
            Some(field) => self.compare_by(other, field),
            None => Ordering::Equal,
        }
    }

    fn compare_position(&self, other: &Self) -> Ordering {
        self.position().cmp(&other.position())
    }
}

/// Сортирует список по указанному полю.
/// Пустое поле - порядок документа. Равные значения всегда идут в порядке
/// документа, в том числе при сортировке по убыванию.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    if field.is_empty() {
        return;
    }
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        let cmp = if ascending { cmp } else { cmp.reverse() };
        cmp.then_with(|| a.compare_position(b))
    });
}

/// Количество страниц (минимум одна, даже для пустого списка)
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1)).max(1)
}

/// Возвращает элементы страницы `page` (с нуля); страница за концом списка
/// прижимается к последней
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Vec<T> {
    let page_size = page_size.max(1);
    let page = page.min(total_pages(items.len(), page_size) - 1);
    items
        .into_iter()
        .skip(page * page_size)
        .take(page_size)
        .collect()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора: активная колонка выделяется
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}
