//! Состояние ячейки с раскрытием полного текста.
//!
//! ```text
//! Collapsed --hover, overflow-->    Expanded { popover: true }
//! Collapsed --hover, fits-->        Expanded { popover: false }
//! Expanded  --leave | Escape-->     Collapsed
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellExpansion {
    #[default]
    Collapsed,
    Expanded {
        popover: bool,
    },
}

impl CellExpansion {
    pub fn hover_enter(self, overflown: bool) -> Self {
        CellExpansion::Expanded { popover: overflown }
    }

    pub fn hover_leave(self) -> Self {
        CellExpansion::Collapsed
    }

    pub fn key_down(self, key: &str) -> Self {
        if self.is_expanded() && is_escape_key(key) {
            CellExpansion::Collapsed
        } else {
            self
        }
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, CellExpansion::Expanded { .. })
    }

    pub fn shows_popover(self) -> bool {
        matches!(self, CellExpansion::Expanded { popover: true })
    }

    /// The document key listener exists exactly while expanded.
    pub fn needs_key_listener(self) -> bool {
        self.is_expanded()
    }
}

/// Holds the document key listener while the cell needs it.
///
/// The listener is released by dropping it, so a slot that is reset or
/// dropped itself unsubscribes.
#[derive(Debug)]
pub struct ListenerSlot<L> {
    listener: Option<L>,
}

impl<L> Default for ListenerSlot<L> {
    fn default() -> Self {
        Self { listener: None }
    }
}

impl<L> ListenerSlot<L> {
    /// Brings the slot in line with `state`: attaches on the first expanded
    /// state, keeps the same listener while expanded, drops it on collapse.
    pub fn sync(&mut self, state: CellExpansion, attach: impl FnOnce() -> Option<L>) {
        if !state.needs_key_listener() {
            self.listener = None;
        } else if self.listener.is_none() {
            self.listener = attach();
        }
    }

    /// Unmount.
    pub fn release(&mut self) {
        self.listener = None;
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }
}

/// Old Edge and IE report "Esc".
pub fn is_escape_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Scroll vs client extents of the element that holds the cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extents {
    pub scroll_width: i32,
    pub scroll_height: i32,
    pub client_width: i32,
    pub client_height: i32,
}

impl Extents {
    pub fn of(element: &web_sys::Element) -> Self {
        Self {
            scroll_width: element.scroll_width(),
            scroll_height: element.scroll_height(),
            client_width: element.client_width(),
            client_height: element.client_height(),
        }
    }

    /// Text is visually truncated by its container.
    pub fn is_overflown(&self) -> bool {
        self.scroll_height > self.client_height || self.scroll_width > self.client_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn extents(scroll: (i32, i32), client: (i32, i32)) -> Extents {
        Extents {
            scroll_width: scroll.0,
            scroll_height: scroll.1,
            client_width: client.0,
            client_height: client.1,
        }
    }

    #[test]
    fn test_overflow_detection() {
        assert!(extents((320, 24), (150, 24)).is_overflown());
        assert!(extents((150, 48), (150, 24)).is_overflown());
        assert!(!extents((120, 24), (150, 24)).is_overflown());
        assert!(!extents((150, 24), (150, 24)).is_overflown());
    }

    #[test]
    fn test_hover_on_overflowing_cell_shows_popover() {
        let overflown = extents((320, 24), (150, 24)).is_overflown();
        let state = CellExpansion::Collapsed.hover_enter(overflown);
        assert_eq!(state, CellExpansion::Expanded { popover: true });
        assert!(state.shows_popover());
    }

    #[test]
    fn test_hover_on_fitting_cell_expands_without_popover() {
        let overflown = extents((80, 24), (150, 24)).is_overflown();
        let state = CellExpansion::Collapsed.hover_enter(overflown);
        assert!(state.is_expanded());
        assert!(!state.shows_popover());
    }

    #[test]
    fn test_leave_and_escape_collapse() {
        let expanded = CellExpansion::Expanded { popover: true };
        assert_eq!(expanded.hover_leave(), CellExpansion::Collapsed);
        assert_eq!(expanded.key_down("Escape"), CellExpansion::Collapsed);
        assert_eq!(
            CellExpansion::Expanded { popover: false }.key_down("Esc"),
            CellExpansion::Collapsed
        );
    }

    #[test]
    fn test_escape_ignored_while_collapsed_and_other_keys_ignored() {
        assert_eq!(CellExpansion::Collapsed.key_down("Escape"), CellExpansion::Collapsed);
        let expanded = CellExpansion::Expanded { popover: true };
        assert_eq!(expanded.key_down("Enter"), expanded);
    }

    /// Counts live listeners; one drop is one unsubscribe.
    struct Listener(Rc<Cell<i32>>);

    impl Drop for Listener {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    fn attach(live: &Rc<Cell<i32>>, attached: &Cell<u32>) -> Option<Listener> {
        live.set(live.get() + 1);
        attached.set(attached.get() + 1);
        Some(Listener(Rc::clone(live)))
    }

    #[test]
    fn test_listener_attached_on_expand_and_dropped_on_collapse() {
        let live = Rc::new(Cell::new(0));
        let attached = Cell::new(0);
        let mut slot = ListenerSlot::default();

        slot.sync(CellExpansion::Collapsed, || attach(&live, &attached));
        assert!(!slot.is_attached());
        assert_eq!(attached.get(), 0);

        let expanded = CellExpansion::Collapsed.hover_enter(true);
        slot.sync(expanded, || attach(&live, &attached));
        assert!(slot.is_attached());
        assert_eq!(live.get(), 1);

        // повторный sync в раскрытом состоянии не подписывается заново
        slot.sync(CellExpansion::Expanded { popover: false }, || attach(&live, &attached));
        assert_eq!(attached.get(), 1);
        assert_eq!(live.get(), 1);

        slot.sync(expanded.key_down("Escape"), || attach(&live, &attached));
        assert!(!slot.is_attached());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_listener_dropped_on_unmount() {
        let live = Rc::new(Cell::new(0));
        let attached = Cell::new(0);

        let mut slot = ListenerSlot::default();
        slot.sync(CellExpansion::Expanded { popover: true }, || attach(&live, &attached));
        assert_eq!(live.get(), 1);
        slot.release();
        assert_eq!(live.get(), 0);

        let mut slot = ListenerSlot::default();
        slot.sync(CellExpansion::Expanded { popover: true }, || attach(&live, &attached));
        drop(slot);
        assert_eq!(live.get(), 0);
        assert_eq!(attached.get(), 2);
    }

    #[test]
    fn test_failed_attach_is_retried_on_next_sync() {
        let mut slot: ListenerSlot<()> = ListenerSlot::default();
        slot.sync(CellExpansion::Expanded { popover: true }, || None);
        assert!(!slot.is_attached());
        slot.sync(CellExpansion::Expanded { popover: true }, || Some(()));
        assert!(slot.is_attached());
    }

    #[test]
    fn test_key_listener_only_while_expanded() {
        assert!(!CellExpansion::Collapsed.needs_key_listener());
        assert!(CellExpansion::Expanded { popover: false }.needs_key_listener());
        assert!(CellExpansion::Expanded { popover: true }.needs_key_listener());
    }
}
