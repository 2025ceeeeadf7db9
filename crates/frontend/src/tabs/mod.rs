//! Tab navigation.
//!
//! Contains:
//! - `id` - the closed set of tab identifiers
//! - `selector` - the tab store and URL fragment sync
//! - `nav` - the header button strip
//! - `panel` - wrapper component for one content panel
//! - `registry` - mapping TabId -> panel view (single source of truth)

pub mod id;
pub mod nav;
pub mod panel;
pub mod registry;
pub mod selector;

pub use id::TabId;
pub use nav::TabNav;
pub use panel::TabPanel;
pub use selector::TabSelector;
