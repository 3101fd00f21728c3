//! Ячейка таблицы, показывающая полный текст во всплывающей панели,
//! если текст обрезан по ширине или высоте.
//!
//! ```rust,ignore
//! <TableCell>
//!     <CellExpand value=row.name.clone() width=200 />
//! </TableCell>
//! ```

use super::cell_expansion::{CellExpansion, Extents, ListenerSlot};
use crate::shared::document_listener::DocumentKeyListener;
use leptos::html;
use leptos::prelude::*;

/// Позиция ячейки на экране в момент наведения
#[derive(Debug, Clone, Copy, PartialEq)]
struct Anchor {
    left: f64,
    top: f64,
    height: f64,
}

impl Anchor {
    fn of(element: &web_sys::Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            left: rect.left(),
            top: rect.top(),
            height: rect.height(),
        }
    }
}

#[component]
pub fn CellExpand(
    /// Полный текст ячейки
    #[prop(into)]
    value: String,
    /// Ширина колонки в px, она же ширина всплывающей панели
    width: u32,
) -> impl IntoView {
    let wrapper = NodeRef::<html::Div>::new();
    let cell_value = NodeRef::<html::Div>::new();
    let expansion = RwSignal::new(CellExpansion::Collapsed);
    let anchor = RwSignal::new(None::<Anchor>);
    let key_listener = StoredValue::new_local(ListenerSlot::<DocumentKeyListener>::default());

    // Escape слушаем только пока ячейка раскрыта
    Effect::new(move |_| {
        let state = expansion.get();
        let _ = key_listener.try_update_value(|slot| {
            slot.sync(state, || {
                DocumentKeyListener::attach(move |event| {
                    expansion.update(|state| *state = state.key_down(&event.key()));
                })
            })
        });
    });

    on_cleanup(move || {
        let _ = key_listener.try_update_value(ListenerSlot::release);
    });

    let handle_mouse_enter = move |_| {
        let overflown = cell_value
            .get_untracked()
            .map(|element| Extents::of(&element).is_overflown())
            .unwrap_or(false);
        anchor.set(wrapper.get_untracked().map(|element| Anchor::of(&element)));
        expansion.update(|state| *state = state.hover_enter(overflown));
    };

    let handle_mouse_leave = move |_| {
        expansion.update(|state| *state = state.hover_leave());
    };

    let popover_value = value.clone();
    let popover = move || {
        if !expansion.get().shows_popover() {
            return None;
        }
        anchor.get().map(|anchor| {
            let style = format!(
                "position: fixed; left: {}px; top: {}px; width: {}px; min-height: {}px; \
                 z-index: 1300; background: #fff; border-radius: 4px; \
                 box-shadow: 0 1px 3px rgba(0,0,0,0.2), 0 1px 1px rgba(0,0,0,0.14); \
                 pointer-events: none;",
                anchor.left,
                anchor.top,
                width,
                (anchor.height - 3.0).max(0.0),
            );
            view! {
                <div class="cell-expand__popover" style=style>
                    <div style="padding: 8px; font-size: 14px; line-height: 1.43; white-space: normal; word-break: break-word;">
                        {popover_value.clone()}
                    </div>
                </div>
            }
        })
    };

    view! {
        <div
            node_ref=wrapper
            class="cell-expand"
            style="display: flex; align-items: center; position: relative; width: 100%; height: 100%; line-height: 24px;"
            on:mouseenter=handle_mouse_enter
            on:mouseleave=handle_mouse_leave
        >
            <div
                node_ref=cell_value
                class="cell-expand__value"
                style=move || format!(
                    "white-space: nowrap; overflow: hidden; text-overflow: ellipsis; opacity: {};",
                    if expansion.get().is_expanded() { "1" } else { "0.87" }
                )
            >
                {value}
            </div>
            {popover}
        </div>
    }
}
