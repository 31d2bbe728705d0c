use crate::errors::DeskError;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Failed to parse shortcut '{path}': {message}")]
    ParseFailed { path: String, message: String },

    #[error("Shortcut resolution is not available on this platform")]
    CapabilityUnavailable,
}

impl DeskError for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            ResolveError::ParseFailed { .. } => "RESOLVE_PARSE_FAILED",
            ResolveError::CapabilityUnavailable => "RESOLVE_CAPABILITY_UNAVAILABLE",
        }
    }
}
