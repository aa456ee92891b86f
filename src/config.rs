//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/storecart/storecart.toml`
//! 3. Environment variables: `STORECART_*` prefix
//!
//! The `--catalog` command-line flag is applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for storecart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Catalog CSV imported at startup (default: StoreDatabase.csv in the
    /// working directory)
    pub catalog: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("StoreDatabase.csv"),
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub catalog: Option<PathBuf>,
}

/// Get the XDG config directory for storecart.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "storecart").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("storecart.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR`, and `${VAR}` in a path-like value. Unresolvable
/// variables leave the value unchanged.
fn expand_env_vars(value: &str) -> String {
    shellexpand::full(value)
        .map(|expanded| expanded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.catalog.to_string_lossy().as_ref());
        self.catalog = PathBuf::from(expanded);
    }

    /// Apply global config onto defaults: specified fields replace, the
    /// rest inherit.
    fn apply_global(&self, global: &RawSettings) -> Self {
        Self {
            catalog: global
                .catalog
                .clone()
                .unwrap_or_else(|| self.catalog.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/storecart/storecart.toml`
    /// 3. Environment variables: `STORECART_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.apply_global(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply STORECART_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(Environment::with_prefix("STORECART"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("catalog") {
            settings.catalog = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# storecart configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/storecart/storecart.toml
#   Env:    STORECART_* environment variables (explicit overrides)
#   Flag:   --catalog on the command line wins over everything

# Catalog CSV imported at startup. Tilde and $VARs are expanded.
# catalog = "StoreDatabase.csv"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load().expect("load defaults");
        assert!(settings
            .catalog
            .to_string_lossy()
            .ends_with("StoreDatabase.csv"));
    }

    #[test]
    fn given_tilde_in_catalog_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            catalog: PathBuf::from("~/store/catalog.csv"),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let catalog_str = settings.catalog.to_string_lossy();
        assert!(
            catalog_str.starts_with(&home),
            "catalog should start with home dir: {}",
            catalog_str
        );
        assert!(
            !catalog_str.contains('~'),
            "catalog should not contain tilde: {}",
            catalog_str
        );
    }

    #[test]
    fn given_env_var_in_catalog_when_expand_paths_then_expands_variable() {
        let mut settings = Settings {
            catalog: PathBuf::from("$HOME/catalog.csv"),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.catalog.to_string_lossy().starts_with(&home),
            "catalog should expand $HOME"
        );
    }

    #[test]
    fn given_template_when_uncommented_then_parses_as_raw_settings() {
        let uncommented = Settings::template().replace("# catalog", "catalog");
        let raw: RawSettings = toml::from_str(&uncommented).expect("template should parse");
        assert_eq!(raw.catalog, Some(PathBuf::from("StoreDatabase.csv")));
    }

    #[test]
    fn test_apply_global_keeps_default_when_not_specified() {
        let defaults = Settings::default();
        let merged = defaults.apply_global(&RawSettings { catalog: None });
        assert_eq!(merged, defaults);

        let replaced = defaults.apply_global(&RawSettings {
            catalog: Some(PathBuf::from("/tmp/other.csv")),
        });
        assert_eq!(replaced.catalog, PathBuf::from("/tmp/other.csv"));
    }
}
