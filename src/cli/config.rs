//! Configuration management using the `config` crate for hierarchical
//! discovery and merging.
//!
//! ## Configuration Sources (in precedence order, highest to lowest):
//! 1. **CLI flags** - Highest precedence (merged in `Settings::merge`)
//! 2. **Environment variables** - Middle precedence (via `RULEPRO_*` prefix)
//! 3. **Config files** - Lowest precedence
//!
//! ## Config File Discovery (in merge order, later overrides earlier):
//! 1. `~/.config/rulepro/config.toml` (user config directory)
//! 2. `rulepro.toml` in the Yarn workspace root (walking up from the current
//!    directory until a `yarn.lock` is found)
//! 3. `./rulepro.toml` in the current directory
//! 4. Explicit `--config` path (if provided and exists - overrides all above)

use crate::cli::args::Args;
use crate::generator::rule::DependencyType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure loaded from config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub rule: RuleConfig,
    #[serde(default)]
    pub whitelist: WhitelistConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output path; stdout when unset
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub force: bool,
    #[serde(default = "default_backup")]
    pub backup: bool,
}

// Backups are on unless explicitly disabled, in both the serde path and the
// plain Default path.
impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: None,
            force: false,
            backup: default_backup(),
        }
    }
}

fn default_backup() -> bool {
    true
}

/// Defaults for the `rule` subcommand.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuleConfig {
    /// Section applied when `--type` is not given
    pub dependency_type: Option<DependencyType>,
}

/// Defaults for the `whitelist` subcommand.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WhitelistConfig {
    #[serde(default)]
    pub lock_versions: bool,
}

fn discover_config_paths(explicit_path: &PathBuf) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // User config (lowest precedence)
    if let Some(user_config) = get_user_config_path() {
        paths.push(user_config);
    }

    // Workspace root config
    if let Some(workspace_root) = find_workspace_root() {
        let workspace_config = workspace_root.join("rulepro.toml");
        if workspace_config.exists() {
            paths.push(workspace_config);
        }
    }

    // Current directory config
    let current_dir_config = PathBuf::from("rulepro.toml");
    if current_dir_config.exists() {
        paths.push(current_dir_config);
    }

    // Explicit --config path (highest precedence)
    if explicit_path != &PathBuf::from("rulepro.toml") && explicit_path.exists() {
        paths.push(explicit_path.clone());
    }

    paths
}

/// Walk up from the current directory until a `yarn.lock` marks the Yarn
/// workspace root.
fn find_workspace_root() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        if dir.join("yarn.lock").exists() {
            return Some(dir);
        }
        if !dir.pop() {
            return None;
        }
    }
}

fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|config_dir| config_dir.join("rulepro").join("config.toml"))
        .filter(|path| path.exists())
}

/// Load configuration from discovered config files and environment variables.
pub fn load(args: &Args) -> Result<Config> {
    let mut builder = config::Config::builder();

    for config_path in discover_config_paths(&args.config) {
        builder = builder.add_source(config::File::from(config_path));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("RULEPRO")
            .separator("__")
            .try_parsing(true),
    );

    let settings = builder.build().context("Failed to build configuration")?;

    settings
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(config.general.output.is_none());
        assert!(!config.general.force);
        assert!(!config.whitelist.lock_versions);
    }

    #[test]
    fn test_config_parses_sections() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "general": {"output": "rules/constraints.pro", "force": true},
            "rule": {"dependency_type": "devDependencies"},
            "whitelist": {"lock_versions": true}
        }))
        .unwrap();

        assert_eq!(
            config.general.output,
            Some(PathBuf::from("rules/constraints.pro"))
        );
        assert!(config.general.force);
        assert_eq!(
            config.rule.dependency_type,
            Some(DependencyType::DevDependencies)
        );
        assert!(config.whitelist.lock_versions);
    }

    #[test]
    fn test_backup_defaults_on() {
        let config: Config =
            serde_json::from_value(serde_json::json!({"general": {}})).unwrap();
        assert!(config.general.backup);
    }
}
