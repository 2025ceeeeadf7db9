//! TabPanel - wrapper for one content panel.
//!
//! Responsible for:
//! - showing/hiding the panel depending on the active tab
//! - carrying the panel's DOM id (which equals the tab id, so in-page
//!   anchors and the URL fragment address the same element)

use super::registry::render_panel;
use super::{TabId, TabSelector};
use leptos::prelude::*;

#[component]
pub fn TabPanel(tab: TabId, selector: TabSelector) -> impl IntoView {
    // Reactive activity check, shared with the nav button for this tab.
    let is_active = Memo::new(move |_| selector.is_active(tab));

    let content = render_panel(tab);

    view! {
        <section class="tab-content" class:active=is_active id=tab.as_str()>
            {content}
        </section>
    }
}
