pub mod grid_footer;
pub mod page_header;
pub mod table;

pub use grid_footer::GridFooter;
pub use page_header::PageHeader;
