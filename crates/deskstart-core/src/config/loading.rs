//! Configuration loading and merging logic.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.deskstart/config.toml`
//! 3. **Folder config** - `<startup_dir>/.deskstart/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::{DeskConfig, ItemsSection, LaunchSection, PolicySection};
use crate::errors::ConfigError;

/// Load and merge configuration for a run against the given startup
/// folder.
///
/// Missing config files are not errors; parse errors are.
pub fn load_hierarchy(startup_dir: &Path) -> Result<DeskConfig, ConfigError> {
    let mut config = DeskConfig::default();

    if let Some(home) = dirs::home_dir() {
        if let Some(user_config) = load_optional(&home.join(".deskstart").join("config.toml"))? {
            config = merge_configs(config, user_config);
        }
    }

    if let Some(folder_config) =
        load_optional(&startup_dir.join(".deskstart").join("config.toml"))?
    {
        config = merge_configs(config, folder_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a config file, treating "not found" as absence.
fn load_optional(path: &PathBuf) -> Result<Option<DeskConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })?;
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Scalar fields replace the base only when present in the override;
/// lists replace the base when non-empty.
pub fn merge_configs(base: DeskConfig, override_config: DeskConfig) -> DeskConfig {
    DeskConfig {
        policy: PolicySection {
            restrict_all: override_config.policy.restrict_all.or(base.policy.restrict_all),
            default_allow_multiple: override_config
                .policy
                .default_allow_multiple
                .or(base.policy.default_allow_multiple),
            restricted: if override_config.policy.restricted.is_empty() {
                base.policy.restricted
            } else {
                override_config.policy.restricted
            },
            allowed: if override_config.policy.allowed.is_empty() {
                base.policy.allowed
            } else {
                override_config.policy.allowed
            },
        },
        launch: LaunchSection {
            delay_secs: override_config.launch.delay_secs.or(base.launch.delay_secs),
            wait_ticks: override_config.launch.wait_ticks.or(base.launch.wait_ticks),
            confirm_ticks: override_config
                .launch
                .confirm_ticks
                .or(base.launch.confirm_ticks),
        },
        items: ItemsSection {
            include_shortcuts: override_config
                .items
                .include_shortcuts
                .or(base.items.include_shortcuts),
            include_native: override_config
                .items
                .include_native
                .or(base.items.include_native),
            native_types: override_config.items.native_types.or(base.items.native_types),
        },
    }
}

/// Validate the final configuration.
pub fn validate_config(config: &DeskConfig) -> Result<(), ConfigError> {
    if let Some(delay) = config.launch.delay_secs {
        if !delay.is_finite() || delay < 0.0 {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("delay_secs must be a non-negative number, got {delay}"),
            });
        }
    }

    if let Some(types) = &config.items.native_types {
        if types.iter().any(|t| t.trim().trim_start_matches('.').is_empty()) {
            return Err(ConfigError::InvalidConfiguration {
                message: "native_types entries must be non-empty extensions".to_string(),
            });
        }
    }

    if config.items.include_shortcuts == Some(false) && config.items.include_native == Some(false) {
        return Err(ConfigError::InvalidConfiguration {
            message: "both shortcuts and native items are excluded; nothing to launch".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_override_wins_for_scalars() {
        let base: DeskConfig = toml::from_str(
            r#"
[launch]
delay_secs = 1.0
wait_ticks = 5
"#,
        )
        .unwrap();
        let override_config: DeskConfig = toml::from_str(
            r#"
[launch]
delay_secs = 0.5
"#,
        )
        .unwrap();

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.launch.delay_secs, Some(0.5));
        // Unset in the override, kept from the base
        assert_eq!(merged.launch.wait_ticks, Some(5));
    }

    #[test]
    fn test_merge_non_empty_lists_replace() {
        let base: DeskConfig = toml::from_str(
            r#"
[policy]
restricted = ["firefox"]
"#,
        )
        .unwrap();
        let override_config: DeskConfig = toml::from_str(
            r#"
[policy]
restricted = ["chrome"]
"#,
        )
        .unwrap();

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.policy.restricted, vec!["chrome"]);
    }

    #[test]
    fn test_merge_empty_list_keeps_base() {
        let base: DeskConfig = toml::from_str(
            r#"
[policy]
restricted = ["firefox"]
"#,
        )
        .unwrap();
        let merged = merge_configs(base, DeskConfig::default());
        assert_eq!(merged.policy.restricted, vec!["firefox"]);
    }

    #[test]
    fn test_validate_rejects_negative_delay() {
        let config: DeskConfig = toml::from_str(
            r#"
[launch]
delay_secs = -1.0
"#,
        )
        .unwrap();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_native_type() {
        let config: DeskConfig = toml::from_str(
            r#"
[items]
native_types = ["."]
"#,
        )
        .unwrap();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_excluding_everything() {
        let config: DeskConfig = toml::from_str(
            r#"
[items]
include_shortcuts = false
include_native = false
"#,
        )
        .unwrap();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_load_hierarchy_missing_files_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_hierarchy(dir.path()).unwrap();
        assert_eq!(config.launch.wait_ticks(), 5);
    }

    #[test]
    fn test_load_hierarchy_reads_folder_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(".deskstart");
        std::fs::create_dir(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            r#"
[launch]
wait_ticks = 9
"#,
        )
        .unwrap();

        let config = load_hierarchy(dir.path()).unwrap();
        assert_eq!(config.launch.wait_ticks(), 9);
    }

    #[test]
    fn test_load_hierarchy_parse_error_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(".deskstart");
        std::fs::create_dir(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "not [valid toml").unwrap();

        assert!(matches!(
            load_hierarchy(dir.path()),
            Err(ConfigError::ConfigParseError { .. })
        ));
    }
}
