use crate::layout::SiteShell;
use crate::shared::clipboard::CopyService;
use crate::shared::toast::Toaster;
use crate::tabs::TabSelector;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the tab store to the whole app via context.
    let selector = TabSelector::new();
    provide_context(selector);

    // Toaster first: the copy service reports its outcome through it.
    let toaster = Toaster::new();
    provide_context(toaster);
    provide_context(CopyService::new(toaster));

    // Restore the tab from the URL fragment and keep the fragment in sync.
    selector.init_fragment_sync();

    view! {
        <SiteShell />
    }
}
