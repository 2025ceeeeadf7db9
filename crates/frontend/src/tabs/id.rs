//! The closed set of tab identifiers.
//!
//! Tab ids double as URL fragments and as DOM ids of the content panels, so
//! the string forms here are a published contract of the site.

/// Identifier of one content panel. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Overview,
    Tools,
    Demos,
    Download,
}

impl TabId {
    /// Every tab, in header order.
    pub const ALL: [TabId; 4] = [TabId::Overview, TabId::Tools, TabId::Demos, TabId::Download];

    /// The string form used in the URL fragment and as the panel's DOM id.
    pub fn as_str(self) -> &'static str {
        match self {
            TabId::Overview => "overview",
            TabId::Tools => "tools",
            TabId::Demos => "demos",
            TabId::Download => "download",
        }
    }

    /// Human-readable label for the nav button.
    pub fn label(self) -> &'static str {
        match self {
            TabId::Overview => "Overview",
            TabId::Tools => "Tools",
            TabId::Demos => "Demos",
            TabId::Download => "Download",
        }
    }

    /// Parse an id string. Anything outside the closed set is `None`.
    pub fn parse(raw: &str) -> Option<TabId> {
        TabId::ALL.into_iter().find(|tab| tab.as_str() == raw)
    }

    /// Resolve a URL fragment (with or without the leading `#`).
    pub fn from_fragment(fragment: &str) -> Option<TabId> {
        TabId::parse(fragment.trim_start_matches('#'))
    }
}

impl Default for TabId {
    /// The panel that is active before any selection is made.
    fn default() -> Self {
        TabId::Overview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_id() {
        for tab in TabId::ALL {
            assert_eq!(TabId::parse(tab.as_str()), Some(tab));
        }
    }

    #[test]
    fn unknown_ids_parse_to_none() {
        assert_eq!(TabId::parse("nonexistent"), None);
        assert_eq!(TabId::parse(""), None);
        assert_eq!(TabId::parse("Overview"), None); // case sensitive
    }

    #[test]
    fn fragment_resolution() {
        assert_eq!(TabId::from_fragment("#tools"), Some(TabId::Tools));
        assert_eq!(TabId::from_fragment("tools"), Some(TabId::Tools));
        assert_eq!(TabId::from_fragment("#nonexistent"), None);
        assert_eq!(TabId::from_fragment(""), None);
        assert_eq!(TabId::from_fragment("#"), None);
    }

    #[test]
    fn default_is_overview() {
        assert_eq!(TabId::default(), TabId::Overview);
    }
}
