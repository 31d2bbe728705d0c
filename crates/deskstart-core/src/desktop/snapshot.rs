use sysinfo::{ProcessesToUpdate, System};
use tracing::{debug, info};

use crate::desktop::errors::EnumerationError;
use crate::desktop::types::{Capture, WindowRecord};

/// Capability that enumerates windows on the active desktop session.
///
/// Every capture is produced fresh; implementations never cache between
/// calls.
pub trait WindowEnumerator {
    fn capture(&self) -> Result<Capture, EnumerationError>;
}

/// Fallback enumerator: one record per running process that has a name.
///
/// This can neither confirm nor deny desktop membership, so every record
/// is flagged potentially visible and the capture is reported as degraded.
/// The process name doubles as the title, which keeps title-based matching
/// working at reduced precision.
pub struct ProcessEnumerator;

impl WindowEnumerator for ProcessEnumerator {
    fn capture(&self) -> Result<Capture, EnumerationError> {
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::All, true);

        let mut records = Vec::new();
        for (pid, process) in system.processes() {
            let name = process.name().to_string_lossy().to_string();
            if name.is_empty() {
                continue;
            }
            records.push(WindowRecord {
                handle: u64::from(pid.as_u32()),
                title: name.clone(),
                process_name: name,
                session_visible: true,
            });
        }

        debug!(
            event = "core.desktop.process_capture_completed",
            record_count = records.len()
        );

        Ok(Capture::Degraded(records))
    }
}

/// Wraps a primary enumerator and degrades to process enumeration when the
/// primary subsystem reports itself unavailable. Other failures pass
/// through; the caller decides what an empty pass means.
pub struct FallbackEnumerator<P: WindowEnumerator> {
    primary: P,
    fallback: ProcessEnumerator,
}

impl<P: WindowEnumerator> FallbackEnumerator<P> {
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            fallback: ProcessEnumerator,
        }
    }
}

impl<P: WindowEnumerator> WindowEnumerator for FallbackEnumerator<P> {
    fn capture(&self) -> Result<Capture, EnumerationError> {
        match self.primary.capture() {
            Ok(capture) => Ok(capture),
            Err(EnumerationError::Unavailable { message }) => {
                info!(
                    event = "core.desktop.primary_unavailable",
                    message = %message
                );
                self.fallback.capture()
            }
            Err(e) => Err(e),
        }
    }
}

/// The enumerator used for real runs: DWM-backed window enumeration on
/// Windows with process-list fallback, process-list only elsewhere.
pub fn default_enumerator() -> Box<dyn WindowEnumerator> {
    #[cfg(windows)]
    {
        Box::new(FallbackEnumerator::new(super::dwm::DwmEnumerator::new()))
    }
    #[cfg(not(windows))]
    {
        Box::new(ProcessEnumerator)
    }
}
