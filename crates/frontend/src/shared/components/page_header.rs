use leptos::prelude::*;

/// PageHeader component - centered title and optional subtitle of a page
///
/// Always rendered, independent of whether the page data loaded.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="page-header" style="display: grid; justify-items: center;">
            <h3 class="page-header__title" style="margin: 10px 0 0; font-size: 3rem; font-weight: 400;">
                {title}
            </h3>
            {move || subtitle.get().map(|s| view! {
                <h4 class="page-header__subtitle" style="margin: 10px 0 0; font-size: 2.125rem; font-weight: 400;">
                    {s}
                </h4>
            })}
        </div>
    }
}
