pub mod errors;
pub mod snapshot;
pub mod types;

#[cfg(windows)]
pub mod dwm;

pub use errors::EnumerationError;
pub use snapshot::{
    FallbackEnumerator, ProcessEnumerator, WindowEnumerator, default_enumerator,
};
pub use types::{Capture, WindowRecord};
