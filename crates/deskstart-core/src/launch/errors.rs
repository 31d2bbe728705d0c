use crate::errors::DeskError;

#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("Failed to start '{program}': {message}")]
    StartFailed { program: String, message: String },
}

impl DeskError for SpawnError {
    fn error_code(&self) -> &'static str {
        match self {
            SpawnError::StartFailed { .. } => "SPAWN_START_FAILED",
        }
    }
}
