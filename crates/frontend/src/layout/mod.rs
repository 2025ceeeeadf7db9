pub mod footer;
pub mod header;

use crate::shared::toast::ToastHost;
use crate::tabs::{TabId, TabPanel, TabSelector};
use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Main page shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |        Header (title + tab nav)          |
/// +------------------------------------------+
/// |        one panel per TabId               |
/// +------------------------------------------+
/// |                Footer                    |
/// +------------------------------------------+
/// ```
///
/// The toast host sits outside the flow; it renders at most one toast.
#[component]
pub fn SiteShell() -> impl IntoView {
    let selector =
        use_context::<TabSelector>().expect("TabSelector context not found");

    view! {
        <div class="site-layout">
            <Header />
            <main class="site-main">
                {TabId::ALL
                    .into_iter()
                    .map(|tab| view! { <TabPanel tab=tab selector=selector /> })
                    .collect_view()}
            </main>
            <Footer />
            <ToastHost />
        </div>
    }
}
