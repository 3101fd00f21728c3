pub mod a001_commercial_registry;
