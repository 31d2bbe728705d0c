//! Default accessors and conversions into the engine's value types.
//!
//! Config file fields are all optional; the accessors here centralize the
//! documented defaults, and the conversion methods produce the immutable
//! values the engine components take.

use std::collections::HashSet;
use std::time::Duration;

use crate::config::types::{DeskConfig, ItemsSection, LaunchSection, PolicySection};
use crate::items::ScanFilter;
use crate::launch::WaitConfig;
use crate::policy::PolicyConfig;

impl PolicySection {
    /// Whether restrict-all mode is active. Default: false.
    pub fn restrict_all(&self) -> bool {
        self.restrict_all.unwrap_or(false)
    }

    /// The global default when no rule matches. Default: true.
    pub fn default_allow_multiple(&self) -> bool {
        self.default_allow_multiple.unwrap_or(true)
    }
}

impl LaunchSection {
    /// Pause between launches, in seconds. Default: 1.0.
    pub fn delay_secs(&self) -> f64 {
        self.delay_secs.unwrap_or(1.0)
    }

    /// Maximum polling ticks. Default: 5.
    pub fn wait_ticks(&self) -> u32 {
        self.wait_ticks.unwrap_or(5)
    }

    /// Multi-instance confirmation ticks. Default: 2.
    pub fn confirm_ticks(&self) -> u32 {
        self.confirm_ticks.unwrap_or(2)
    }
}

impl ItemsSection {
    /// Whether shortcuts are scanned. Default: true.
    pub fn include_shortcuts(&self) -> bool {
        self.include_shortcuts.unwrap_or(true)
    }

    /// Whether native executables are scanned. Default: true.
    pub fn include_native(&self) -> bool {
        self.include_native.unwrap_or(true)
    }
}

/// Normalize a user-supplied extension: lowercase, no dot prefix.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

impl DeskConfig {
    /// The per-run instance policy this configuration describes.
    pub fn policy_config(&self) -> PolicyConfig {
        if self.policy.restrict_all() {
            let allowed: HashSet<String> = self
                .policy
                .allowed
                .iter()
                .map(|n| n.to_lowercase())
                .collect();
            PolicyConfig {
                default_allow_multiple: false,
                restricted_names: HashSet::new(),
                allowed_names: if allowed.is_empty() {
                    None
                } else {
                    Some(allowed)
                },
                restrict_all: true,
            }
        } else {
            PolicyConfig {
                default_allow_multiple: self.policy.default_allow_multiple(),
                restricted_names: self
                    .policy
                    .restricted
                    .iter()
                    .map(|n| n.to_lowercase())
                    .collect(),
                allowed_names: None,
                restrict_all: false,
            }
        }
    }

    /// The wait/timing values for the orchestrator.
    pub fn wait_config(&self) -> WaitConfig {
        WaitConfig {
            tick: Duration::from_secs(1),
            max_ticks: self.launch.wait_ticks(),
            multi_instance_confirm_ticks: self.launch.confirm_ticks(),
            inter_item_delay: Duration::from_secs_f64(self.launch.delay_secs().max(0.0)),
        }
    }

    /// The scan filter for the startup folder.
    pub fn scan_filter(&self) -> ScanFilter {
        ScanFilter {
            include_shortcuts: self.items.include_shortcuts(),
            include_native: self.items.include_native(),
            native_types: self.items.native_types.as_ref().map(|types| {
                types
                    .iter()
                    .map(|ext| normalize_extension(ext))
                    .collect()
            }),
        }
    }
}
