use serde::Serialize;

/// One demo recording card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Demo {
    pub title: &'static str,
    pub description: &'static str,
    /// Slug of the tool the recording shows.
    pub tool: &'static str,
    /// Link to the asciinema cast.
    pub cast_url: &'static str,
}

pub const DEMOS: &[Demo] = &[
    Demo {
        title: "Tree navigation and pick mode",
        description: "Filtering a large repository and piping the selection \
                      into xargs.",
        tool: "fileview",
        cast_url: "https://asciinema.org/a/hiro-chiba-fileview-pick",
    },
    Demo {
        title: "Bulk rename",
        description: "Renaming a photo dump with an editor round-trip.",
        tool: "fileview",
        cast_url: "https://asciinema.org/a/hiro-chiba-fileview-rename",
    },
    Demo {
        title: "Walking a branch graph",
        description: "Reviewing a feature branch commit by commit.",
        tool: "gitview",
        cast_url: "https://asciinema.org/a/hiro-chiba-gitview-graph",
    },
    Demo {
        title: "Live log filtering",
        description: "Following a service log and narrowing to one request \
                      id.",
        tool: "logview",
        cast_url: "https://asciinema.org/a/hiro-chiba-logview-follow",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::tool_by_slug;

    #[test]
    fn demos_reference_known_tools() {
        for demo in DEMOS {
            assert!(
                tool_by_slug(demo.tool).is_some(),
                "demo '{}' references unknown tool '{}'",
                demo.title,
                demo.tool
            );
        }
    }

    #[test]
    fn cast_links_are_absolute() {
        for demo in DEMOS {
            assert!(demo.cast_url.starts_with("https://"));
        }
    }
}
