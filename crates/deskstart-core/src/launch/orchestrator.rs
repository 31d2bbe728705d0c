use std::thread;
use tracing::{info, warn};

use crate::desktop::{WindowEnumerator, WindowRecord};
use crate::detect::{self, LaunchSession};
use crate::items::ItemDescriptor;
use crate::launch::spawner::ProcessSpawner;
use crate::launch::types::{ItemReport, LaunchOutcome, RunSummary, WaitConfig};
use crate::policy::{self, PolicyConfig};
use crate::resolver::TargetResolver;

/// Sequential launch engine: for each item, decide skip or launch, start
/// the process, then poll the detector until the launch is confirmed or
/// the wait budget runs out.
///
/// Single-threaded by design. `LaunchSession` is written here and read by
/// the detector on the same thread; no item's failure affects the items
/// after it.
pub struct LaunchOrchestrator<'a> {
    resolver: &'a dyn TargetResolver,
    enumerator: &'a dyn WindowEnumerator,
    spawner: &'a dyn ProcessSpawner,
    policy: &'a PolicyConfig,
    wait: WaitConfig,
}

impl<'a> LaunchOrchestrator<'a> {
    pub fn new(
        resolver: &'a dyn TargetResolver,
        enumerator: &'a dyn WindowEnumerator,
        spawner: &'a dyn ProcessSpawner,
        policy: &'a PolicyConfig,
        wait: WaitConfig,
    ) -> Self {
        Self {
            resolver,
            enumerator,
            spawner,
            policy,
            wait,
        }
    }

    /// Process every item in order and return the per-item outcomes.
    pub fn run(&self, items: &[ItemDescriptor]) -> RunSummary {
        let mut session = LaunchSession::new();
        session.clear();

        let mut reports = Vec::with_capacity(items.len());
        for item in items {
            let outcome = self.process_item(item, &mut session);
            info!(
                event = "core.launch.item_finished",
                item = %item.path.display(),
                outcome = ?outcome
            );
            reports.push(ItemReport {
                path: item.path.clone(),
                display_name: item.display_name(),
                outcome,
            });

            if outcome.launched() {
                thread::sleep(self.wait.inter_item_delay);
            }
        }

        RunSummary {
            launched_count: session.launched_count(),
            reports,
        }
    }

    fn process_item(&self, item: &ItemDescriptor, session: &mut LaunchSession) -> LaunchOutcome {
        let identity = self.resolver.resolve(item);
        let allow_multiple = policy::decide(item, &identity, self.policy);

        let snapshot = self.snapshot();
        if detect::is_running(item, &identity, allow_multiple, &snapshot, session) {
            return LaunchOutcome::SkippedAlreadyRunning;
        }

        // One spawn attempt per item per run; spawn is never retried.
        if let Err(e) = self.spawner.spawn(item) {
            warn!(
                event = "core.launch.spawn_failed",
                item = %item.path.display(),
                error = %e
            );
            return if identity.resolvable {
                LaunchOutcome::LaunchFailed
            } else {
                LaunchOutcome::ResolutionFailed
            };
        }
        session.mark_launched(item);

        if !identity.resolvable {
            // Launched, but with no target identity there is nothing to
            // poll for.
            warn!(
                event = "core.launch.cannot_verify",
                item = %item.path.display()
            );
            return LaunchOutcome::TimedOut;
        }

        let mut tick = 0;
        while tick < self.wait.max_ticks {
            tick += 1;
            thread::sleep(self.wait.tick);

            if allow_multiple {
                // Detection cannot tell the new instance apart from the
                // ones already running, so a short grace period is all the
                // confirmation there is.
                if tick >= self.wait.multi_instance_confirm_ticks {
                    return LaunchOutcome::Confirmed;
                }
            } else {
                let snapshot = self.snapshot();
                if detect::is_running(item, &identity, allow_multiple, &snapshot, session) {
                    return LaunchOutcome::Confirmed;
                }
            }
        }

        LaunchOutcome::TimedOut
    }

    /// Capture a fresh snapshot; an enumeration failure yields an empty
    /// pass rather than aborting the run.
    fn snapshot(&self) -> Vec<WindowRecord> {
        match self.enumerator.capture() {
            Ok(capture) => capture.into_records(),
            Err(e) => {
                warn!(event = "core.desktop.capture_failed", error = %e);
                Vec::new()
            }
        }
    }
}
