//! Page configuration.
//!
//! Defaults are compiled in; any of them can be overridden from the page's
//! query string, e.g. `index.html?page_size=50&log_level=debug`.

use serde::Deserialize;
use std::str::FromStr;

pub const DEFAULT_SOURCE_URL: &str = "./commercialRegistry.xml";
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Relative path of the registry XML asset
    pub source_url: String,
    /// Rows per grid page
    pub page_size: usize,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parses a query string (with or without the leading `?`).
    pub fn from_query(query: &str) -> Result<Self, String> {
        let query = query.trim_start_matches('?');
        let mut config: PageConfig = serde_qs::from_str(query)
            .map_err(|e| format!("Invalid page query '{}': {}", query, e))?;
        config.page_size = config.page_size.max(1);
        Ok(config)
    }

    /// Reads the query string of the current page.
    pub fn from_location() -> Result<Self, String> {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}
