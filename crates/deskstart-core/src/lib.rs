//! deskstart-core: Core library for login-startup launching
//!
//! This library decides, for each launchable item in a startup folder,
//! whether an equivalent instance is already running on the user's active
//! desktop session, launches the ones that are not, and verifies each
//! launch within a bounded wait. It is used by the `deskstart` CLI.
//!
//! # Main Entry Points
//!
//! - [`items`] - Startup-folder scanning and item classification
//! - [`resolver`] - Mapping items to the process identity they produce
//! - [`policy`] - Single- vs multiple-instance policy
//! - [`desktop`] - Active-desktop window snapshots
//! - [`detect`] - Running-instance detection
//! - [`launch`] - The launch-and-confirm orchestrator
//! - [`config`] - Configuration management

pub mod config;
pub mod desktop;
pub mod detect;
pub mod errors;
pub mod events;
pub mod items;
pub mod launch;
pub mod logging;
pub mod matching;
pub mod policy;
pub mod resolver;

// Re-export commonly used types at crate root for convenience
pub use config::DeskConfig;
pub use desktop::{Capture, WindowEnumerator, WindowRecord, default_enumerator};
pub use detect::LaunchSession;
pub use items::{ItemDescriptor, ItemKind, ScanFilter, scan_startup_dir};
pub use launch::{
    ItemReport, LaunchOrchestrator, LaunchOutcome, RunSummary, ShellSpawner, WaitConfig,
};
pub use policy::PolicyConfig;
pub use resolver::{TargetIdentity, TargetResolver, default_resolver};

// Re-export logging initialization
pub use logging::init_logging;
