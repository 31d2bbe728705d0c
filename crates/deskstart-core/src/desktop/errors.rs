use crate::errors::DeskError;

#[derive(Debug, thiserror::Error)]
pub enum EnumerationError {
    #[error("Window enumeration is not available: {message}")]
    Unavailable { message: String },

    #[error("Window enumeration failed: {message}")]
    SystemError { message: String },
}

impl DeskError for EnumerationError {
    fn error_code(&self) -> &'static str {
        match self {
            EnumerationError::Unavailable { .. } => "ENUMERATION_UNAVAILABLE",
            EnumerationError::SystemError { .. } => "ENUMERATION_SYSTEM_ERROR",
        }
    }
}
