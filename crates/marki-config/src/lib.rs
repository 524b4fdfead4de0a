//! Marki Config
//!
//! This crate handles configuration loading and management
//! for marki, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/marki/config.toml`
//! - macOS: `~/Library/Application Support/marki/config.toml`
//! - Windows: `%APPDATA%\marki\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use marki_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or merge an override file or inline TOML on top of it
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod features;
mod output;

pub use features::FeaturesConfig;
pub use output::OutputConfig;

use marki_core::{MarkiError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
StripInnerDashes = true

[output]
Extension  = "html"
InlineName = "inline"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Output naming configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use marki_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[output]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "marki")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| MarkiError::Config(format!("{} in {}", e, path.display())))
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MarkiError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, merge its contents,
    ///    otherwise merge it as inline TOML
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            if override_path.exists() {
                let content = std::fs::read_to_string(override_path)?;
                config.merge_toml(&content).map_err(|e| {
                    MarkiError::Config(format!("{} in {}", e, override_path.display()))
                })?;
            } else {
                config.merge_toml(override_str)?;
            }
        }

        Ok(config)
    }

    /// Merge a TOML override into this config.
    ///
    /// Only keys present in `content` change; everything else keeps its
    /// current value.
    ///
    /// # Example
    ///
    /// ```
    /// use marki_config::Config;
    ///
    /// let mut config = Config::from_toml("[output]\nExtension = \"htm\"").unwrap();
    /// config.merge_toml("[features]\nStripInnerDashes = false").unwrap();
    ///
    /// assert!(!config.features.strip_inner_dashes);
    /// assert_eq!(config.output.extension, "htm");
    /// ```
    pub fn merge_toml(&mut self, content: &str) -> Result<()> {
        let overlay: toml::Table = toml::from_str(content)
            .map_err(|e| MarkiError::Config(format!("Parse error: {}", e)))?;

        let mut base = match toml::Value::try_from(&*self) {
            Ok(toml::Value::Table(table)) => table,
            Ok(_) => return Err(MarkiError::Config("Config is not a table".into())),
            Err(e) => return Err(MarkiError::Config(format!("Serialization error: {}", e))),
        };
        merge_tables(&mut base, overlay);

        *self = toml::Value::Table(base)
            .try_into()
            .map_err(|e| MarkiError::Config(format!("Invalid override: {}", e)))?;
        Ok(())
    }
}

/// Copy every key of `overlay` into `base`, descending into nested tables.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(inner_overlay) = value {
            if let Some(toml::Value::Table(inner_base)) = base.get_mut(&key) {
                merge_tables(inner_base, inner_overlay);
                continue;
            }
            base.insert(key, toml::Value::Table(inner_overlay));
        } else {
            base.insert(key, value);
        }
    }
}
