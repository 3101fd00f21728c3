pub mod state;

use self::state::create_state;
use crate::config::PageConfig;
use crate::domain::a001_commercial_registry::api::fetch_registry_xml;
use crate::shared::async_action::use_async;
use crate::shared::components::table::{CellExpand, SortableHeaderCell};
use crate::shared::components::{GridFooter, PageHeader};
use crate::shared::list_utils::{paginate, sort_list};
use contracts::domain::a001_commercial_registry::{
    parse_registry, RegistryReport, RegistryRow, RowWarning, REGISTRY_COLUMNS,
};
use leptos::prelude::*;
use thaw::*;

const TITLE: &str = "Национален търговски регистър";
const SUBTITLE: &str = "Модел на данните";

/// Разбор загруженного XML в отчёт для таблицы.
///
/// `None` - рисовать нечего: данных ещё нет, XML битый или в документе
/// нет `registries/national_commercial_registry`.
pub fn build_report(xml: Option<&str>) -> Option<RegistryReport> {
    let xml = xml?;
    match parse_registry(xml) {
        Ok(Some(report)) => {
            for rejected in &report.rejected {
                log::warn!("Skipping registry {}", rejected);
            }
            for warning in &report.warnings {
                match warning {
                    RowWarning::NonNumericDate { id, raw } => {
                        log::debug!("Row {}: registry_date '{}' is not numeric", id, raw);
                    }
                }
            }
            log::info!(
                "Registry loaded: {} rows, {} skipped",
                report.rows.len(),
                report.rejected.len()
            );
            Some(report)
        }
        Ok(None) => {
            log::warn!("Registry document has no registries/national_commercial_registry element");
            None
        }
        Err(e) => {
            log::error!("Failed to parse registry XML: {}", e);
            None
        }
    }
}

#[component]
pub fn CommercialRegistryList() -> impl IntoView {
    let config = use_context::<PageConfig>().unwrap_or_default();
    let state = create_state(config.page_size);

    // Загрузка при монтировании
    let source_url = config.source_url.clone();
    let file = use_async(move || fetch_registry_xml(source_url.clone()), || ());

    Effect::new(move |_| {
        if let Some(error) = file.state().with(|s| s.error.clone()) {
            log::error!("Failed to load registry: {}", error);
        }
    });

    let report = Memo::new(move |_| file.state().with(|s| build_report(s.data.as_deref())));

    let total_count = Signal::derive(move || {
        report.with(|report| report.as_ref().map_or(0, |r| r.rows.len()))
    });

    let visible_rows = Memo::new(move |_| {
        let Some(mut rows) = report.with(|report| report.as_ref().map(|r| r.rows.clone())) else {
            return Vec::new();
        };
        let (sort_field, sort_ascending, page, page_size) = state.with(|s| {
            (s.sort_field.clone(), s.sort_ascending, s.page, s.page_size)
        });
        sort_list(&mut rows, &sort_field, sort_ascending);
        paginate(rows, page, page_size)
    });

    let toggle_sort = Callback::new(move |field: String| {
        state.update(|s| s.toggle_sort(&field));
    });

    let grid = move || {
        report.with(|report| {
            report.as_ref().map(|report| {
                view! {
                    <RegistryGrid
                        skipped=report.rejected.len()
                        rows=visible_rows
                        total_count=total_count
                        sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                        sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_sort=toggle_sort
                        on_page_change=Callback::new(move |page: usize| {
                            let total = total_count.get_untracked();
                            state.update(|s| s.set_page(page, total));
                        })
                        on_page_size_change=Callback::new(move |size: usize| {
                            state.update(|s| s.set_page_size(size));
                        })
                    />
                }
            })
        })
    };

    view! {
        <div
            class="page"
            style="max-width: 1536px; margin: 0 auto; padding: 0 24px; display: grid; grid-template-columns: 1fr;"
        >
            <PageHeader title=TITLE subtitle=SUBTITLE.to_string() />
            {grid}
        </div>
    }
}

#[component]
fn RegistryGrid(
    /// Сколько строк пропущено из-за отсутствующих полей
    skipped: usize,
    #[prop(into)] rows: Signal<Vec<RegistryRow>>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] sort_field: Signal<String>,
    #[prop(into)] sort_ascending: Signal<bool>,
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_sort: Callback<String>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let table_width: u32 = REGISTRY_COLUMNS.iter().map(|column| column.width).sum();

    view! {
        <div
            class="registry-grid"
            style="margin: 50px; background-color: #fff9e6; border: 1px solid rgba(224, 224, 224, 1); border-radius: 4px;"
        >
            {(skipped > 0).then(|| view! {
                <div class="registry-grid__notice" style="padding: 8px 16px; color: #8a6d3b;">
                    {format!("Пропуснати {} записа с непълни данни", skipped)}
                </div>
            })}
            <div style="overflow-x: auto;">
                <Table attr:style=format!("table-layout: fixed; width: {}px;", table_width)>
                    <TableHeader>
                        <TableRow>
                            {REGISTRY_COLUMNS
                                .iter()
                                .map(|column| view! {
                                    <SortableHeaderCell
                                        label=column.header
                                        sort_field=column.key()
                                        width=column.width
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show when=move || total_count.get() == 0>
                            <TableRow>
                                <TableCell attr:colspan=REGISTRY_COLUMNS.len().to_string()>
                                    <TableCellLayout>
                                        <span class="text-muted">"Няма данни"</span>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|row| row.id.clone()
                            children=move |row: RegistryRow| {
                                view! {
                                    <TableRow>
                                        {REGISTRY_COLUMNS
                                            .iter()
                                            .map(|column| {
                                                let value = row.value(column.field).to_string();
                                                view! {
                                                    <TableCell>
                                                        <CellExpand
                                                            value=value
                                                            width=column.width
                                                        />
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view()}
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
            <GridFooter
                current_page=current_page
                page_size=page_size
                total_count=total_count
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />
        </div>
    }
}
