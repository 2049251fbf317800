//! SGR Composer Config
//!
//! This crate handles configuration loading and management
//! for sgrc: the default color depth and a table of named styles.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/sgrc/config.toml`
//! - macOS: `~/Library/Application Support/sgrc/config.toml`
//! - Windows: `%APPDATA%\sgrc\config.toml`
//!
//! Each named style accepts the same shapes as a composer style: the
//! keyword `"reset"`, a list of attribute names, or a table.
//!
//! # Example
//!
//! ```no_run
//! use sgrc_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use sgrc_core::{DepthSpec, Result, SgrError, StyleSpec};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"depth = "16m"

[styles]
error   = { color = [255, 51, 102], bold = true }
warning = { color = [255, 204, 0] }
success = { color = [51, 153, 51] }
info    = { color = [0, 128, 255] }
muted   = ["dim"]
plain   = "reset"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default color depth, as a number or alias name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<DepthSpec>,

    /// Named styles
    #[serde(default)]
    pub styles: BTreeMap<String, StyleSpec>,
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
    /// use sgrc_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[styles]"));
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
        directories::ProjectDirs::from("", "", "sgrc").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| SgrError::Config("Could not determine config directory".into()))?;

        Self::ensure_config_file_in(&config_dir)
    }

    /// Ensures `config.toml` exists under `config_dir`, writing the defaults
    /// if not. An existing file is left untouched.
    pub fn ensure_config_file_in(config_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            debug!("Writing default config to {}", config_path.display());
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                debug!("Loading config from {}", config_path.display());
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SgrError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// The base config is loaded from the default location. If the override
    /// names an existing file it is loaded, otherwise it is parsed as inline
    /// TOML; either way it is merged over the base.
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given as a file path or inline TOML.
    pub fn parse_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);

        if override_path.exists() {
            debug!("Merging config from file: {}", override_str);
            Self::load_from(override_path)
        } else {
            debug!("Merging inline config");
            toml::from_str(override_str)
                .map_err(|e| SgrError::Config(format!("Override parse error: {}", e)))
        }
    }

    /// Merge another config into this one.
    ///
    /// A depth set in `other` replaces this one; named styles from `other`
    /// replace same-named styles and add new ones.
    ///
    /// # Example
    ///
    /// ```
    /// use sgrc_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     depth = 256
    ///     [styles]
    ///     error = ["bold", "underline"]
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.depth(), sgrc_core::DepthSpec::Level(256));
    /// assert!(base.style("error").unwrap().color().is_none());
    /// assert!(base.style("warning").is_some());
    /// ```
    pub fn merge(&mut self, other: &Config) {
        if let Some(depth) = &other.depth {
            self.depth = Some(depth.clone());
        }
        for (name, style) in &other.styles {
            self.styles.insert(name.clone(), style.clone());
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!("Saving config to {}", path.display());
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| SgrError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// The configured depth, or no color when unset.
    pub fn depth(&self) -> DepthSpec {
        self.depth.clone().unwrap_or_default()
    }

    /// Look up a named style.
    pub fn style(&self, name: &str) -> Option<&StyleSpec> {
        self.styles.get(name)
    }

    /// Names of all configured styles, sorted.
    pub fn style_names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}
