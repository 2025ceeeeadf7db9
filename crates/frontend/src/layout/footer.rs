use crate::shared::links::SiteLink;
use content::{RELEASES_URL, SITE};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span>{SITE.title}</span>
            <nav class="site-footer__links">
                <SiteLink href=SITE.org_url>"GitHub"</SiteLink>
                <SiteLink href=RELEASES_URL>"Releases"</SiteLink>
            </nav>
        </footer>
    }
}
