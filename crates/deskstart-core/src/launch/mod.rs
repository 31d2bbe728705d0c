pub mod errors;
pub mod orchestrator;
pub mod spawner;
pub mod types;

pub use errors::SpawnError;
pub use orchestrator::LaunchOrchestrator;
pub use spawner::{ProcessSpawner, ShellSpawner};
pub use types::{ItemReport, LaunchOutcome, RunSummary, WaitConfig};
