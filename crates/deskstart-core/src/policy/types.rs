use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-run instance policy configuration, supplied once and never mutated.
///
/// Exactly one of the two modes is active for a whole run:
///
/// - **Default-allow mode** (`restrict_all = false`): multiple instances
///   are allowed unless the name hits `restricted_names`.
/// - **Restrict-all mode** (`restrict_all = true`): single-instance is the
///   default and `allowed_names` lists the exceptions.
///
/// All names are matched by case-insensitive substring containment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub default_allow_multiple: bool,
    /// Meaningful only outside restrict-all mode.
    pub restricted_names: HashSet<String>,
    /// Meaningful only inside restrict-all mode.
    pub allowed_names: Option<HashSet<String>>,
    pub restrict_all: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_allow_multiple: true,
            restricted_names: HashSet::new(),
            allowed_names: None,
            restrict_all: false,
        }
    }
}

impl PolicyConfig {
    /// Default-allow mode with an explicit restrict-set.
    pub fn with_restricted<I: IntoIterator<Item = String>>(names: I) -> Self {
        Self {
            restricted_names: names.into_iter().map(|n| n.to_lowercase()).collect(),
            ..Self::default()
        }
    }

    /// Restrict-all mode, optionally with an allow-set of exceptions.
    pub fn restrict_all<I: IntoIterator<Item = String>>(allowed: Option<I>) -> Self {
        Self {
            default_allow_multiple: false,
            restricted_names: HashSet::new(),
            allowed_names: allowed
                .map(|names| names.into_iter().map(|n| n.to_lowercase()).collect()),
            restrict_all: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_default_allow_mode() {
        let config = PolicyConfig::default();
        assert!(config.default_allow_multiple);
        assert!(!config.restrict_all);
        assert!(config.restricted_names.is_empty());
        assert!(config.allowed_names.is_none());
    }

    #[test]
    fn test_with_restricted_lowercases_names() {
        let config = PolicyConfig::with_restricted(vec!["FireFox".to_string()]);
        assert!(config.restricted_names.contains("firefox"));
    }

    #[test]
    fn test_restrict_all_mode() {
        let config = PolicyConfig::restrict_all(Some(vec!["Notepad".to_string()]));
        assert!(config.restrict_all);
        assert!(!config.default_allow_multiple);
        assert!(config.allowed_names.unwrap().contains("notepad"));
    }
}
