//! Outbound link handling.
//!
//! Links whose host differs from the page host open in a new tab with
//! `rel="noopener noreferrer"`; everything else renders as a plain anchor.

use leptos::prelude::*;

/// Extract the host of an absolute http(s) URL. Relative URLs and
/// fragments have no host.
pub fn href_host(href: &str) -> Option<&str> {
    let rest = href
        .strip_prefix("https://")
        .or_else(|| href.strip_prefix("http://"))?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// A link leaves the site when it has a host and that host is not ours.
pub fn is_external_href(href: &str, page_host: &str) -> bool {
    match href_host(href) {
        Some(host) => host != page_host,
        None => false,
    }
}

fn page_host() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

/// Anchor that opens in a new tab when the target is off-site.
#[component]
pub fn SiteLink(href: &'static str, children: Children) -> impl IntoView {
    let external = is_external_href(href, &page_host());

    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_extraction() {
        assert_eq!(href_host("https://github.com/Hiro-Chiba/fileview"), Some("github.com"));
        assert_eq!(href_host("http://example.com"), Some("example.com"));
        assert_eq!(href_host("https://example.com?q=1"), Some("example.com"));
        assert_eq!(href_host("#overview"), None);
        assert_eq!(href_host("/docs/index.html"), None);
        assert_eq!(href_host("https://"), None);
    }

    #[test]
    fn external_classification() {
        let page = "hiro-chiba.github.io";
        assert!(is_external_href("https://github.com/Hiro-Chiba/fileview", page));
        assert!(!is_external_href("https://hiro-chiba.github.io/tools", page));
        assert!(!is_external_href("#download", page));
        assert!(!is_external_href("/assets/logo.svg", page));
    }
}
