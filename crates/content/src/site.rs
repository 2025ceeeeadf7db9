use serde::Serialize;

/// Site identity shown in the header and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteMeta {
    pub title: &'static str,
    pub tagline: &'static str,
    /// Host the site is served from, used to classify outbound links.
    pub host: &'static str,
    /// GitHub organization behind the collection.
    pub org_url: &'static str,
}

pub const SITE: SiteMeta = SiteMeta {
    title: "TUI Tools Collection",
    tagline: "Fast, keyboard-driven tools for the terminal",
    host: "hiro-chiba.github.io",
    org_url: "https://github.com/Hiro-Chiba",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_meta_serializes() {
        let json = serde_json::to_string(&SITE).unwrap();
        assert!(json.contains("TUI Tools Collection"));
    }

    #[test]
    fn host_is_bare() {
        assert!(!SITE.host.contains('/'));
        assert!(!SITE.host.starts_with("http"));
    }
}
