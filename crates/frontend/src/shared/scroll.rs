//! Smooth scrolling for in-page anchors.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smooth-scroll to the element addressed by `fragment` (with or without
/// the leading `#`). Missing targets are ignored.
pub fn scroll_to_fragment(fragment: &str) {
    let id = fragment.trim_start_matches('#');
    if id.is_empty() {
        return;
    }
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// In-page link that scrolls smoothly instead of jumping.
#[component]
pub fn AnchorLink(
    /// Fragment href, e.g. `"#fileview"`.
    href: String,
    children: Children,
) -> impl IntoView {
    let target = href.clone();
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        scroll_to_fragment(&target);
    };

    view! {
        <a href=href on:click=on_click>
            {children()}
        </a>
    }
}
