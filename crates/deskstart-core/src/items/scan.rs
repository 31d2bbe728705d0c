use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::items::errors::ScanError;
use crate::items::types::{ItemDescriptor, ItemKind};

/// Which kinds of items a scan should pick up.
#[derive(Debug, Clone)]
pub struct ScanFilter {
    pub include_shortcuts: bool,
    pub include_native: bool,
    /// When set, only native items with one of these extensions
    /// (lowercase, no dot) are included. Shortcuts are unaffected.
    pub native_types: Option<HashSet<String>>,
}

impl Default for ScanFilter {
    fn default() -> Self {
        Self {
            include_shortcuts: true,
            include_native: true,
            native_types: None,
        }
    }
}

impl ScanFilter {
    fn accepts(&self, item: &ItemDescriptor) -> bool {
        match item.kind {
            ItemKind::ShortcutLink => self.include_shortcuts,
            ItemKind::NativeExecutable => {
                if !self.include_native {
                    return false;
                }
                match &self.native_types {
                    Some(types) => types.contains(&item.extension),
                    None => true,
                }
            }
        }
    }
}

/// Collect launchable items from the startup folder.
///
/// Only direct children are considered; subdirectories are skipped. The
/// result is sorted by file name so runs are deterministic.
pub fn scan_startup_dir(dir: &Path, filter: &ScanFilter) -> Result<Vec<ItemDescriptor>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|source| ScanError::ReadFailed {
        path: dir.display().to_string(),
        source,
    })?;

    let mut items = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(event = "core.items.entry_unreadable", error = %e);
                continue;
            }
        };

        let path = entry.path();
        match ItemDescriptor::from_path(&path) {
            Some(item) if filter.accepts(&item) => items.push(item),
            Some(item) => {
                debug!(
                    event = "core.items.filtered_out",
                    path = %item.path.display()
                );
            }
            None => {}
        }
    }

    items.sort_by_key(|item| item.file_name());

    info!(
        event = "core.items.scan_completed",
        dir = %dir.display(),
        item_count = items.len()
    );

    Ok(items)
}

/// Check whether a directory contains anything we could launch, ignoring
/// filters. Used to decide if the current directory can stand in for a
/// missing startup folder.
pub fn has_launchable_items(dir: &Path) -> bool {
    match scan_startup_dir(dir, &ScanFilter::default()) {
        Ok(items) => !items.is_empty(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("Failed to create test file");
    }

    fn setup_startup_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        touch(dir.path(), "Browser.lnk");
        touch(dir.path(), "tool.exe");
        touch(dir.path(), "macro.ahk");
        touch(dir.path(), "notes.txt");
        std::fs::create_dir(dir.path().join("sub.exe")).unwrap();
        dir
    }

    #[test]
    fn test_scan_default_filter() {
        let dir = setup_startup_dir();
        let items = scan_startup_dir(dir.path(), &ScanFilter::default()).unwrap();

        let names: Vec<String> = items.iter().map(|i| i.file_name()).collect();
        assert_eq!(names, vec!["browser.lnk", "macro.ahk", "tool.exe"]);
    }

    #[test]
    fn test_scan_skips_directories_with_item_extensions() {
        let dir = setup_startup_dir();
        let items = scan_startup_dir(dir.path(), &ScanFilter::default()).unwrap();
        assert!(items.iter().all(|i| i.file_name() != "sub.exe"));
    }

    #[test]
    fn test_scan_shortcuts_only() {
        let dir = setup_startup_dir();
        let filter = ScanFilter {
            include_native: false,
            ..ScanFilter::default()
        };
        let items = scan_startup_dir(dir.path(), &filter).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ItemKind::ShortcutLink);
    }

    #[test]
    fn test_scan_native_only() {
        let dir = setup_startup_dir();
        let filter = ScanFilter {
            include_shortcuts: false,
            ..ScanFilter::default()
        };
        let items = scan_startup_dir(dir.path(), &filter).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.kind == ItemKind::NativeExecutable));
    }

    #[test]
    fn test_scan_native_types_filter() {
        let dir = setup_startup_dir();
        let filter = ScanFilter {
            native_types: Some(["ahk".to_string()].into_iter().collect()),
            ..ScanFilter::default()
        };
        let items = scan_startup_dir(dir.path(), &filter).unwrap();

        let names: Vec<String> = items.iter().map(|i| i.file_name()).collect();
        // Shortcuts are unaffected by the native-types filter
        assert_eq!(names, vec!["browser.lnk", "macro.ahk"]);
    }

    #[test]
    fn test_scan_missing_directory() {
        let result = scan_startup_dir(Path::new("/nonexistent-deskstart-dir"), &ScanFilter::default());
        assert!(matches!(result, Err(ScanError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_has_launchable_items() {
        let dir = setup_startup_dir();
        assert!(has_launchable_items(dir.path()));

        let empty = tempfile::tempdir().unwrap();
        assert!(!has_launchable_items(empty.path()));
    }
}
