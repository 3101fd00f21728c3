use crate::config::PageConfig;
use crate::domain::a001_commercial_registry::ui::list::CommercialRegistryList;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    // Page configuration is read once at startup and shared via context.
    provide_context(config);

    view! {
        <ConfigProvider>
            <CommercialRegistryList />
        </ConfigProvider>
    }
}
