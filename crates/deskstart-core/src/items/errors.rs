use crate::errors::DeskError;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Startup directory not found: '{path}'")]
    DirectoryNotFound { path: String },

    #[error("Failed to read startup directory '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
}

impl DeskError for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            ScanError::DirectoryNotFound { .. } => "SCAN_DIRECTORY_NOT_FOUND",
            ScanError::ReadFailed { .. } => "SCAN_READ_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ScanError::DirectoryNotFound { .. })
    }
}
