//! Panel content registry - single source of truth for TabId -> View.

use super::TabId;
use crate::pages::demos::DemosPage;
use crate::pages::download::DownloadPage;
use crate::pages::overview::OverviewPage;
use crate::pages::tools::ToolsPage;
use leptos::prelude::*;

/// Renders the content of one panel.
pub fn render_panel(tab: TabId) -> AnyView {
    match tab {
        TabId::Overview => view! { <OverviewPage /> }.into_any(),
        TabId::Tools => view! { <ToolsPage /> }.into_any(),
        TabId::Demos => view! { <DemosPage /> }.into_any(),
        TabId::Download => view! { <DownloadPage /> }.into_any(),
    }
}
