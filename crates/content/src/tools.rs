use serde::Serialize;

/// One entry in the tool catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tool {
    /// Stable key, also used as the DOM id of the tool card.
    pub slug: &'static str,
    pub name: &'static str,
    /// Short binary name installed on PATH.
    pub bin: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    /// Shell command shown in the card's code block.
    pub install: &'static str,
    pub repo_url: &'static str,
    pub highlights: &'static [&'static str],
}

pub const TOOLS: &[Tool] = &[
    Tool {
        slug: "fileview",
        name: "fileview",
        bin: "fv",
        tagline: "A minimal file tree UI for terminal emulators",
        description: "Browse, filter and bulk-rename files in a tree view \
                      with git status inline. Pick mode prints selections to \
                      stdout for use in scripts.",
        install: "cargo install fileview",
        repo_url: "https://github.com/Hiro-Chiba/fileview",
        highlights: &["git integration", "pick mode", "bulk rename", "image preview"],
    },
    Tool {
        slug: "gitview",
        name: "gitview",
        bin: "gitv",
        tagline: "Commit history browser for the terminal",
        description: "Walk branches, diffs and blame without leaving the \
                      keyboard. Opens the commit under the cursor in your \
                      editor or browser.",
        install: "cargo install gitview",
        repo_url: "https://github.com/Hiro-Chiba/gitview",
        highlights: &["branch graph", "inline diffs", "blame view"],
    },
    Tool {
        slug: "logview",
        name: "logview",
        bin: "lv",
        tagline: "Follow and filter structured logs",
        description: "Tail files or stdin with live filters, level \
                      highlighting and JSON field extraction tuned for \
                      service logs.",
        install: "cargo install logview",
        repo_url: "https://github.com/Hiro-Chiba/logview",
        highlights: &["live filters", "JSON fields", "level colors"],
    },
];

/// Look up a tool by its slug.
pub fn tool_by_slug(slug: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|tool| tool.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = TOOLS.iter().map(|t| t.slug).collect();
        assert_eq!(slugs.len(), TOOLS.len());
    }

    #[test]
    fn catalog_entries_are_complete() {
        for tool in TOOLS {
            assert!(!tool.install.is_empty(), "{} has no install command", tool.slug);
            assert!(
                tool.repo_url.starts_with("https://"),
                "{} repo_url is not absolute",
                tool.slug
            );
            assert!(!tool.highlights.is_empty());
        }
    }

    #[test]
    fn lookup_by_slug() {
        assert_eq!(tool_by_slug("fileview").map(|t| t.bin), Some("fv"));
        assert!(tool_by_slug("missing").is_none());
    }

    #[test]
    fn catalog_serializes() {
        let json = serde_json::to_string(TOOLS).unwrap();
        assert!(json.contains("\"slug\":\"fileview\""));
    }
}
