pub mod aggregate;
pub mod columns;
pub mod mapping;

pub use aggregate::{RegistryDate, RegistryField, RegistryRow};
pub use columns::{column, ColumnDef, REGISTRY_COLUMNS};
pub use mapping::{map_registry, parse_registry, RegistryReport, RowError, RowWarning};
