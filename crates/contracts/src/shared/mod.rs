pub mod async_state;
pub mod xml_compact;
