use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File extensions (without the dot) recognized as natively launchable.
pub const NATIVE_EXTENSIONS: &[&str] = &["exe", "bat", "cmd", "ahk", "ps1", "vbs", "com"];

/// Extension used by shortcut link files.
pub const SHORTCUT_EXTENSION: &str = "lnk";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    ShortcutLink,
    NativeExecutable,
}

/// A launchable item found in the startup folder.
///
/// Produced by the directory scan and read-only afterwards. The extension
/// is stored lowercased without the dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDescriptor {
    pub path: PathBuf,
    pub kind: ItemKind,
    pub extension: String,
}

impl ItemDescriptor {
    /// Classify a file path into a launchable item, or `None` if the
    /// extension is not one we launch. Directories are never items.
    pub fn from_path(path: &Path) -> Option<Self> {
        if path.is_dir() {
            return None;
        }

        let extension = path.extension()?.to_str()?.trim().to_lowercase();

        let kind = if extension == SHORTCUT_EXTENSION {
            ItemKind::ShortcutLink
        } else if NATIVE_EXTENSIONS.contains(&extension.as_str()) {
            ItemKind::NativeExecutable
        } else {
            return None;
        };

        Some(Self {
            path: path.to_path_buf(),
            kind,
            extension,
        })
    }

    /// Full file name, lowercased, e.g. "my tool.lnk".
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }

    /// File stem, lowercased, e.g. "my tool". This is the per-item
    /// identifier used for window-title matching.
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }

    /// File stem with its original casing, for user-facing output.
    pub fn display_name(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Case-normalized path, used as the key in the launch session.
    pub fn session_key(&self) -> String {
        self.path.to_string_lossy().to_lowercase()
    }
}
