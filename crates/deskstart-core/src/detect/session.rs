use std::collections::HashSet;

use crate::items::ItemDescriptor;

/// Run-scoped record of which items have already been launched.
///
/// The only mutable shared state in the engine: written by the
/// orchestrator right after a successful spawn, read by the detector to
/// avoid re-detection races before the new window shows up. Keys are
/// case-normalized item paths. Cleared at the start of each run.
#[derive(Debug, Default)]
pub struct LaunchSession {
    launched: HashSet<String>,
}

impl LaunchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.launched.clear();
    }

    pub fn mark_launched(&mut self, item: &ItemDescriptor) {
        self.launched.insert(item.session_key());
    }

    pub fn was_launched(&self, item: &ItemDescriptor) -> bool {
        self.launched.contains(&item.session_key())
    }

    pub fn launched_count(&self) -> usize {
        self.launched.len()
    }
}
