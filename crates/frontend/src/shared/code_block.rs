//! Command block with a copy button.

use crate::shared::clipboard::CopyService;
use leptos::prelude::*;

/// A shell command (or a short sequence of them) with a copy button wired
/// to the clipboard service.
#[component]
pub fn CodeBlock(command: &'static str) -> impl IntoView {
    let copier = use_context::<CopyService>().expect("CopyService context not found");

    view! {
        <div class="code-block">
            <pre>{command}</pre>
            <button class="copy-button" on:click=move |_| copier.copy(command)>
                "📋 Copy"
            </button>
        </div>
    }
}
