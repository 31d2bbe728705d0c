/// One top-level window observed during a snapshot.
///
/// Records are produced fresh on every capture and discarded after one
/// detection pass; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    /// Opaque, session-scoped identifier (window handle or, in degraded
    /// captures, a process id).
    pub handle: u64,
    pub title: String,
    pub process_name: String,
    /// Whether the window belongs to the desktop the user is currently
    /// looking at. Degraded captures cannot tell, and conservatively
    /// report true.
    pub session_visible: bool,
}

/// Result of a snapshot capture.
///
/// `Degraded` means the primary window-composition subsystem was not
/// available and the records are a best-effort approximation (one per
/// named process), with no real desktop-membership information.
#[derive(Debug, Clone)]
pub enum Capture {
    Full(Vec<WindowRecord>),
    Degraded(Vec<WindowRecord>),
}

impl Capture {
    pub fn records(&self) -> &[WindowRecord] {
        match self {
            Capture::Full(records) | Capture::Degraded(records) => records,
        }
    }

    pub fn into_records(self) -> Vec<WindowRecord> {
        match self {
            Capture::Full(records) | Capture::Degraded(records) => records,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Capture::Degraded(_))
    }
}
