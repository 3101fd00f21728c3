//! Нижняя панель таблицы: размер страницы, диапазон строк, переходы.

use crate::shared::icons::icon;
use crate::shared::list_utils::total_pages;
use leptos::prelude::*;

/// Допустимые размеры страницы
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [25, 50, 100];

/// Диапазон строк на странице для подписи "1–100 от 250" (с единицы).
/// Пустой список - `(0, 0)`.
pub fn visible_range(page: usize, page_size: usize, total_count: usize) -> (usize, usize) {
    if total_count == 0 {
        return (0, 0);
    }
    let page_size = page_size.max(1);
    let page = page.min(total_pages(total_count, page_size) - 1);
    let from = page * page_size + 1;
    let to = (from + page_size - 1).min(total_count);
    (from, to)
}

/// Размер страницы из `<select>`; чужие значения отбрасываются
pub fn parse_page_size(value: &str) -> Option<usize> {
    value
        .parse()
        .ok()
        .filter(|size| PAGE_SIZE_OPTIONS.contains(size))
}

#[component]
pub fn GridFooter(
    /// Текущая страница (с нуля)
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    /// Всего строк после разбора
    #[prop(into)]
    total_count: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let last_page = Signal::derive(move || total_pages(total_count.get(), page_size.get()) - 1);
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() >= last_page.get();

    let nav_button = move |title: &'static str, icon_name: &'static str, target: Signal<usize>, disabled: Signal<bool>| {
        view! {
            <button
                class="grid-footer__nav"
                title=title
                disabled=move || disabled.get()
                on:click=move |_| on_page_change.run(target.get_untracked())
            >
                {icon(icon_name)}
            </button>
        }
    };

    view! {
        <div class="grid-footer">
            <label class="grid-footer__size">
                "Редове на страница:"
                <select
                    prop:value=move || page_size.get().to_string()
                    on:change=move |ev| {
                        if let Some(size) = parse_page_size(&event_target_value(&ev)) {
                            on_page_size_change.run(size);
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|&size| view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
            <span class="grid-footer__range">
                {move || {
                    let (from, to) = visible_range(current_page.get(), page_size.get(), total_count.get());
                    format!("{}–{} от {}", from, to, total_count.get())
                }}
            </span>
            {nav_button("Първа страница", "chevrons-left", Signal::derive(|| 0), Signal::derive(at_start))}
            {nav_button(
                "Предишна страница",
                "chevron-left",
                Signal::derive(move || current_page.get().saturating_sub(1)),
                Signal::derive(at_start),
            )}
            {nav_button(
                "Следваща страница",
                "chevron-right",
                Signal::derive(move || (current_page.get() + 1).min(last_page.get())),
                Signal::derive(at_end),
            )}
            {nav_button("Последна страница", "chevrons-right", last_page, Signal::derive(at_end))}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(0, 100, 250), (1, 100));
        assert_eq!(visible_range(2, 100, 250), (201, 250));
        assert_eq!(visible_range(1, 25, 30), (26, 30));
        // страница за концом - последняя
        assert_eq!(visible_range(7, 100, 250), (201, 250));
        assert_eq!(visible_range(0, 100, 0), (0, 0));
    }

    #[test]
    fn test_parse_page_size_accepts_only_offered_sizes() {
        assert_eq!(parse_page_size("50"), Some(50));
        assert_eq!(parse_page_size("7"), None);
        assert_eq!(parse_page_size("много"), None);
    }
}
