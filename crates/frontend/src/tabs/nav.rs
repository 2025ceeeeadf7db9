use super::{TabId, TabSelector};
use leptos::prelude::*;

/// One button in the header strip.
#[component]
pub fn TabButton(tab: TabId) -> impl IntoView {
    let selector =
        use_context::<TabSelector>().expect("TabSelector context not found");

    let is_active = Memo::new(move |_| selector.is_active(tab));

    view! {
        <button
            class="tab-button"
            class:active=is_active
            on:click=move |_| selector.select_tab(tab)
        >
            {tab.label()}
        </button>
    }
}

/// The full nav strip, one button per tab in header order.
#[component]
pub fn TabNav() -> impl IntoView {
    view! {
        <nav class="tab-nav">
            {TabId::ALL
                .into_iter()
                .map(|tab| view! { <TabButton tab=tab /> })
                .collect_view()}
        </nav>
    }
}
