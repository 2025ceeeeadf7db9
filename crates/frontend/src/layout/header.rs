use crate::tabs::TabNav;
use content::SITE;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__brand">
                <h1>{SITE.title}</h1>
                <p class="site-header__tagline">{SITE.tagline}</p>
            </div>
            <TabNav />
        </header>
    }
}
