//! Configuration file support for mydropdown.
//!
//! Configuration is loaded from `~/.config/mydropdown/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/mydropdown/config.toml
//! theme = "light"
//! body_text = "Pick a colour and a size."
//!
//! [animation]
//! enabled = true
//! stiffness = 1500.0
//!
//! # Up to four dropdowns; missing ones use the default options
//! [[dropdowns]]
//! options = ["Red", "Green", "Blue"]
//! selected = "Green"
//!
//! [[dropdowns]]
//! options = ["S", "M", "L", "XL"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dropdown::{AnimationSpec, DropdownOptions};
use crate::error::{ConfigError, ConfigResult};
use crate::tui::theme::Theme;

/// Number of dropdowns on the home screen.
pub const DROPDOWN_COUNT: usize = 4;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Theme name: "dark" or "light"
    pub theme: Option<String>,

    /// Paragraph shown below the dropdowns
    pub body_text: Option<String>,

    /// Spring settings for expand/collapse and resize animations
    pub animation: AnimationSpec,

    /// Contents of the dropdowns, left to right
    pub dropdowns: Vec<DropdownConfig>,
}

/// Contents of one dropdown.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DropdownConfig {
    /// Labels to choose from
    pub options: Vec<String>,

    /// Initially selected label (defaults to the first option)
    #[serde(default)]
    pub selected: Option<String>,
}

impl DropdownConfig {
    pub fn to_holder(&self) -> DropdownOptions {
        let selected = self
            .selected
            .clone()
            .or_else(|| self.options.first().cloned())
            .unwrap_or_default();
        DropdownOptions::new(self.options.clone(), selected)
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be used.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: Ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    /// Load and validate configuration from `path`.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(contents: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the animation settings and every configured dropdown.
    pub fn validate(&self) -> ConfigResult<()> {
        let stiffness = self.animation.stiffness;
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(ConfigError::InvalidStiffness(stiffness));
        }

        for (index, dropdown) in self.dropdowns.iter().enumerate() {
            dropdown
                .to_holder()
                .validate()
                .map_err(|source| ConfigError::InvalidDropdown { index, source })?;
        }
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mydropdown")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, no_animation: bool, theme: Option<String>) -> Self {
        if no_animation {
            self.animation = AnimationSpec::disabled();
        }
        if theme.is_some() {
            self.theme = theme;
        }
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
            .as_deref()
            .map(Theme::by_name)
            .unwrap_or_default()
    }

    /// Value holders for the home screen, padded with defaults.
    pub fn dropdowns(&self) -> Vec<DropdownOptions> {
        let mut holders: Vec<DropdownOptions> = self
            .dropdowns
            .iter()
            .take(DROPDOWN_COUNT)
            .map(DropdownConfig::to_holder)
            .collect();
        holders.resize_with(DROPDOWN_COUNT, DropdownOptions::default);
        holders
    }
}
