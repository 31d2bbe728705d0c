//! # Configuration System
//!
//! Hierarchical TOML configuration for the deskstart CLI.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.deskstart/config.toml`
//! 3. **Folder config** - `<startup_dir>/.deskstart/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)

pub mod defaults;
pub mod loading;
pub mod types;

// Public API exports
pub use defaults::normalize_extension;
pub use loading::{merge_configs, validate_config};
pub use types::{DeskConfig, ItemsSection, LaunchSection, PolicySection};

use std::path::Path;

use crate::errors::ConfigError;

impl DeskConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy(startup_dir: &Path) -> Result<Self, ConfigError> {
        loading::load_hierarchy(startup_dir)
    }
}
