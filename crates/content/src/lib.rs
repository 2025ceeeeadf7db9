//! Static content contracts for the TUI Tools Collection site.
//!
//! Single source of truth for everything the frontend renders:
//! - `site` - site identity
//! - `features` - overview feature cards
//! - `tools` - the tool catalog
//! - `demos` - demo recordings
//! - `download` - install channels and release links
//!
//! All data is compile-time `const` tables; the frontend never fetches
//! anything at runtime.

pub mod demos;
pub mod download;
pub mod features;
pub mod site;
pub mod tools;

pub use demos::{Demo, DEMOS};
pub use download::{InstallChannel, INSTALL_CHANNELS, RELEASES_URL};
pub use features::{Feature, FEATURES};
pub use site::{SiteMeta, SITE};
pub use tools::{Tool, TOOLS};
