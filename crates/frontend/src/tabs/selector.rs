//! Tab store and URL fragment synchronization.
//!
//! `TabSelector` owns the single piece of persistent UI state the site has:
//! which panel is active. The active id is mirrored into `location.hash` so
//! a selection is linkable and restored on load.

use super::TabId;
use leptos::logging::log;
use leptos::prelude::*;
use web_sys::window;

/// Global tab store, provided via context.
///
/// `active` is `None` only after an unknown id was requested: every panel
/// and button is then deactivated and nothing is activated in its place.
#[derive(Clone, Copy)]
pub struct TabSelector {
    pub active: RwSignal<Option<TabId>>,
}

impl TabSelector {
    pub fn new() -> Self {
        Self {
            // The overview panel is active before any selection is made.
            active: RwSignal::new(Some(TabId::default())),
        }
    }

    /// Select by raw id string. Unknown ids deactivate everything.
    pub fn select(&self, raw: &str) {
        let tab = TabId::parse(raw);
        if tab.is_none() {
            log!("select: unknown tab id '{}', clearing selection", raw);
        }
        self.active.set(tab);
    }

    /// Typed selection used by the nav buttons.
    pub fn select_tab(&self, tab: TabId) {
        self.active.set(Some(tab));
    }

    pub fn is_active(&self, tab: TabId) -> bool {
        self.active.get() == Some(tab)
    }

    /// Restore the selection from `location.hash`, then mirror every valid
    /// selection back into the fragment.
    ///
    /// A fragment outside the closed id set does not force a tab: the
    /// default panel stays active. Runs once when the app component is
    /// created.
    pub fn init_fragment_sync(&self) {
        let fragment = window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        if let Some(tab) = TabId::from_fragment(&fragment) {
            log!("restoring tab '{}' from fragment", tab.as_str());
            self.active.set(Some(tab));
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(tab) = this.active.get() {
                let Some(w) = window() else {
                    return;
                };
                let location = w.location();
                let current = location.hash().unwrap_or_default();
                let wanted = format!("#{}", tab.as_str());

                // Only touch the URL if the fragment actually changed.
                if current != wanted {
                    let _ = location.set_hash(tab.as_str());
                }
            }
        });
    }
}

impl Default for TabSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Signals work without a live document, so the store is testable on
    // the host; an owner keeps the arena from leaking across tests.
    fn with_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        f();
    }

    #[test]
    fn starts_on_the_default_panel() {
        with_owner(|| {
            let selector = TabSelector::new();
            assert_eq!(selector.active.get_untracked(), Some(TabId::Overview));
        });
    }

    #[test]
    fn valid_selection_activates_exactly_that_tab() {
        with_owner(|| {
            let selector = TabSelector::new();
            selector.select("tools");
            assert_eq!(selector.active.get_untracked(), Some(TabId::Tools));
            let active_count = TabId::ALL
                .iter()
                .filter(|tab| selector.active.get_untracked() == Some(**tab))
                .count();
            assert_eq!(active_count, 1);
        });
    }

    #[test]
    fn selection_is_idempotent() {
        with_owner(|| {
            let selector = TabSelector::new();
            selector.select("demos");
            let once = selector.active.get_untracked();
            selector.select("demos");
            assert_eq!(selector.active.get_untracked(), once);
        });
    }

    #[test]
    fn unknown_id_deactivates_everything() {
        with_owner(|| {
            let selector = TabSelector::new();
            selector.select("nonexistent");
            assert_eq!(selector.active.get_untracked(), None);
            for tab in TabId::ALL {
                assert!(!selector.active.get_untracked().is_some_and(|a| a == tab));
            }
        });
    }
}
