use serde::Serialize;

/// One feature card on the overview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "⚡",
        title: "Instant startup",
        description: "Every tool is a single static binary that opens in \
                      milliseconds, with no runtime or daemon behind it.",
    },
    Feature {
        icon: "⌨",
        title: "Keyboard first",
        description: "Vim-style navigation everywhere. Reach for the mouse \
                      only if you want to.",
    },
    Feature {
        icon: "🧩",
        title: "Composable",
        description: "Pipe-friendly stdin/stdout modes let each tool slot \
                      into the shell workflows you already have.",
    },
    Feature {
        icon: "🎨",
        title: "Themeable",
        description: "Shared theme files across the collection, including \
                      light terminals and limited color palettes.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_cards_are_complete() {
        assert!(!FEATURES.is_empty());
        for feature in FEATURES {
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
        }
    }
}
