pub mod cell_expand;
pub mod cell_expansion;
pub mod sortable_header_cell;

pub use cell_expand::CellExpand;
pub use cell_expansion::{CellExpansion, Extents, ListenerSlot};
pub use sortable_header_cell::SortableHeaderCell;
