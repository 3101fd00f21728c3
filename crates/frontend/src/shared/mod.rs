pub mod async_action;
pub mod components;
pub mod document_listener;
pub mod icons;
pub mod list_utils;
