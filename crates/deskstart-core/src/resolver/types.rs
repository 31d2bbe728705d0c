/// Target path and arguments read from a shortcut link file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutInfo {
    pub target_path: String,
    pub arguments: String,
}

/// The canonical identity an item is expected to produce once launched.
///
/// `canonical_name` is the lowercased, extension-stripped base name of the
/// target executable; `target_name` keeps the extension. Both are derived
/// values and safe to recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetIdentity {
    pub canonical_name: String,
    pub target_name: String,
    pub arguments: String,
    pub resolvable: bool,
}

impl TargetIdentity {
    pub fn resolved(target_name: &str, arguments: &str) -> Self {
        let target_name = target_name.to_lowercase();
        let canonical_name = match target_name.rfind('.') {
            Some(dot) if dot > 0 => target_name[..dot].to_string(),
            _ => target_name.clone(),
        };
        Self {
            canonical_name,
            target_name,
            arguments: arguments.to_string(),
            resolvable: true,
        }
    }

    pub fn unresolvable() -> Self {
        Self {
            canonical_name: String::new(),
            target_name: String::new(),
            arguments: String::new(),
            resolvable: false,
        }
    }
}
