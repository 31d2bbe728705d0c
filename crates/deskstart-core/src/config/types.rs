//! Configuration type definitions for the deskstart CLI.
//!
//! These types are serialized/deserialized from TOML config files. Every
//! field is optional in the file; accessor methods supply defaults so a
//! missing section behaves like the documented defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [policy]
//! restrict_all = true
//! allowed = ["notepad", "cmd"]
//!
//! [launch]
//! delay_secs = 0.5
//! wait_ticks = 10
//!
//! [items]
//! native_types = ["ahk", "exe"]
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from `~/.deskstart/config.toml` (user) and
/// `./.deskstart/config.toml` (per startup folder); the per-folder file
/// overrides the user file, and CLI flags override both.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeskConfig {
    /// Single- vs multiple-instance policy
    #[serde(default)]
    pub policy: PolicySection,

    /// Launch timing
    #[serde(default)]
    pub launch: LaunchSection,

    /// Which items a scan picks up
    #[serde(default)]
    pub items: ItemsSection,
}

/// Instance policy settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PolicySection {
    /// Restrict every program to a single instance by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict_all: Option<bool>,

    /// Whether multiple instances are allowed when no rule matches.
    /// Default: true. Meaningful only outside restrict-all mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_allow_multiple: Option<bool>,

    /// Programs restricted to a single instance (default-allow mode).
    #[serde(default)]
    pub restricted: Vec<String>,

    /// Programs exempt from restrict-all mode.
    #[serde(default)]
    pub allowed: Vec<String>,
}

/// Launch-verification timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LaunchSection {
    /// Pause between launching programs, in seconds. Default: 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_secs: Option<f64>,

    /// Maximum polling ticks to wait for a program to start. Default: 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_ticks: Option<u32>,

    /// Ticks after which a multi-instance launch counts as started.
    /// Default: 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_ticks: Option<u32>,
}

/// Item scanning settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ItemsSection {
    /// Process `.lnk` shortcuts. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_shortcuts: Option<bool>,

    /// Process native executables. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_native: Option<bool>,

    /// Only include these native file types (dot prefix optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_types: Option<Vec<String>>,
}
