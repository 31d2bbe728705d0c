pub mod errors;
pub mod scan;
pub mod types;

pub use errors::ScanError;
pub use scan::{ScanFilter, has_launchable_items, scan_startup_dir};
pub use types::{ItemDescriptor, ItemKind, NATIVE_EXTENSIONS, SHORTCUT_EXTENSION};
