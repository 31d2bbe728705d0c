use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Terminal state of one item's launch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchOutcome {
    /// An equivalent instance was already running; nothing was launched.
    SkippedAlreadyRunning,
    /// Launched and detected within the wait budget.
    Confirmed,
    /// Launched, but never confirmed. A soft warning, not an error: the
    /// program may simply be starting slowly or never show a titled
    /// window.
    TimedOut,
    /// The process could not be started. Per-item fatal, run continues.
    LaunchFailed,
    /// The item could not be resolved and could not be launched either.
    ResolutionFailed,
}

impl LaunchOutcome {
    /// Whether a process was actually started for this item.
    pub fn launched(&self) -> bool {
        matches!(self, LaunchOutcome::Confirmed | LaunchOutcome::TimedOut)
    }
}

/// Timing knobs for the launch-verification loop.
#[derive(Debug, Clone)]
pub struct WaitConfig {
    /// Length of one polling tick.
    pub tick: Duration,
    /// Maximum number of ticks to wait for confirmation.
    pub max_ticks: u32,
    /// Tick count after which a multi-instance launch is assumed to have
    /// worked. Detection cannot reliably distinguish the new instance, so
    /// polling further would not help.
    pub multi_instance_confirm_ticks: u32,
    /// Pause between items once one has been launched.
    pub inter_item_delay: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            max_ticks: 5,
            multi_instance_confirm_ticks: 2,
            inter_item_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    pub path: PathBuf,
    pub display_name: String,
    pub outcome: LaunchOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub reports: Vec<ItemReport>,
    /// Number of items newly launched this run.
    pub launched_count: usize,
}
