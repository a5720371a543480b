//! Configuration management for the application.
//!
//! Handles loading and saving application configuration in TOML format with
//! platform-specific directory resolution. Missing files yield defaults;
//! command-line flags override loaded values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_KEY_SPACING, DEFAULT_NUM_DIGITS};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Pinpad behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinpadConfig {
    /// Target passcode length
    #[serde(default = "default_num_digits")]
    pub num_digits: usize,
    /// Uniform gap between keys, in terminal cells
    #[serde(default = "default_key_spacing")]
    pub key_spacing: u16,
}

impl Default for PinpadConfig {
    fn default() -> Self {
        Self {
            num_digits: DEFAULT_NUM_DIGITS,
            key_spacing: DEFAULT_KEY_SPACING,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Mask entered symbols with bullets
    #[serde(default = "default_mask_input")]
    pub mask_input: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            mask_input: true,
        }
    }
}

fn default_num_digits() -> usize {
    DEFAULT_NUM_DIGITS
}

fn default_key_spacing() -> u16 {
    DEFAULT_KEY_SPACING
}

fn default_mask_input() -> bool {
    true
}

/// Application configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pinpad behavior settings
    #[serde(default)]
    pub pinpad: PinpadConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[allow(dead_code)]
impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/Pinpad/`
    /// - macOS: `~/Library/Application Support/Pinpad/`
    /// - Windows: `%APPDATA%\Pinpad\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Pinpad");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to the platform config file, creating the
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .context(format!("Failed to create config directory: {}", dir.display()))?;
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .context(format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
