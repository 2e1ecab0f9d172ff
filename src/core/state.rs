//! # Application State
//!
//! Everything the running app knows, in one struct. No TUI types here;
//! presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── settings: Settings          // target directory + catalog URL (editable)
//! ├── catalog: CatalogStore       // entries from the last good refresh
//! ├── navigator: Navigator        // active screen
//! ├── status_message: String      // status line text
//! └── is_busy: bool               // an effect is running
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs
//! and the effect runner in dispatch.rs.

use crate::core::catalog::CatalogStore;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Navigator;

/// Live, user-editable settings. Edits are never written back anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub target_directory: String,
    pub source_url: String,
}

impl From<&ResolvedConfig> for Settings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            target_directory: config.target_directory.clone(),
            source_url: config.catalog_url.clone(),
        }
    }
}

pub struct App {
    pub settings: Settings,
    pub catalog: CatalogStore,
    pub navigator: Navigator,
    pub status_message: String,
    pub is_busy: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            catalog: CatalogStore::new(),
            navigator: Navigator::new(),
            status_message: String::from("Choose a letter to browse the catalog."),
            is_busy: false,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(Settings::from(config))
    }
}
