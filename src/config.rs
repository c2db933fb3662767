//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.
//! The config stores the grid defaults and the host-script settings; both
//! can be overridden per run on the command line.

use crate::constants::{
    DEFAULT_ACTION_SET, DEFAULT_ADJUSTMENT_ACTION, DEFAULT_BAND_SKIP_INDEX, DEFAULT_BOX_SIZE,
    DEFAULT_CANVAS_SIZE, DEFAULT_DOCUMENT_NAME, DEFAULT_FINISHING_ACTION, DEFAULT_GAP_SIZE,
    DEFAULT_GRID_SIZE, DEFAULT_LABEL_MARGIN, DEFAULT_RESOLUTION,
};
use crate::models::GridConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Grid layout defaults applied when the command line does not override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Canvas edge length in pixels
    pub canvas_size: f64,
    /// Number of swatch rows/columns
    pub grid_size: u32,
    /// Swatch edge length in pixels
    pub box_size: f64,
    /// Gap between adjacent swatches in pixels
    pub gap_size: f64,
    /// Row/column index left free of adjustment bands, if any
    pub band_skip_index: Option<u32>,
    /// Distance from the canvas edge to the label anchor, in pixels
    pub label_margin: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            box_size: DEFAULT_BOX_SIZE,
            gap_size: DEFAULT_GAP_SIZE,
            band_skip_index: Some(DEFAULT_BAND_SKIP_INDEX),
            label_margin: DEFAULT_LABEL_MARGIN,
        }
    }
}

impl GridSettings {
    /// The grid configuration these settings describe.
    #[must_use]
    pub const fn to_grid_config(&self) -> GridConfig {
        GridConfig {
            canvas_size: self.canvas_size,
            grid_size: self.grid_size,
            box_size: self.box_size,
            gap_size: self.gap_size,
            band_skip_index: self.band_skip_index,
            label_margin: self.label_margin,
        }
    }
}

/// Host-script settings: document naming and the pre-recorded action names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Name of the created document
    pub document_name: String,
    /// Document resolution in pixels per inch
    pub resolution: f64,
    /// Host action set holding the pre-recorded actions
    pub action_set: String,
    /// Action that adds one adjustment layer to the current selection
    pub adjustment_action: String,
    /// Action run once after the grid is complete, if any
    pub finishing_action: Option<String>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            document_name: DEFAULT_DOCUMENT_NAME.to_string(),
            resolution: DEFAULT_RESOLUTION,
            action_set: DEFAULT_ACTION_SET.to_string(),
            adjustment_action: DEFAULT_ADJUSTMENT_ACTION.to_string(),
            finishing_action: Some(DEFAULT_FINISHING_ACTION.to_string()),
        }
    }
}

/// Application configuration persisted as TOML.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid layout defaults
    pub grid: GridSettings,
    /// Host-script settings
    pub script: ScriptConfig,
}

impl Config {
    /// Creates a configuration with built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path().is_ok_and(|path| path.exists())
    }

    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/ColorGrid/`
    /// - macOS: `~/Library/Application Support/ColorGrid/`
    /// - Windows: `%APPDATA%\ColorGrid\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ColorGrid");

        Ok(config_dir)
    }

    /// Gets the path of the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the configuration from disk, falling back to defaults when no
    /// config file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// validated.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to disk, creating the config directory if
    /// needed.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let config_path = Self::config_file_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, content).context(format!(
            "Failed to write config file: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Checks that the stored values are usable as planner input.
    pub fn validate(&self) -> Result<()> {
        let grid = &self.grid;
        if grid.grid_size == 0 {
            anyhow::bail!("grid_size must be positive");
        }
        if grid.box_size <= 0.0 {
            anyhow::bail!("box_size must be positive");
        }
        if grid.gap_size < 0.0 {
            anyhow::bail!("gap_size must not be negative");
        }
        if self.script.resolution <= 0.0 {
            anyhow::bail!("resolution must be positive");
        }
        if self.script.action_set.is_empty() {
            anyhow::bail!("action_set must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_original_layout() {
        let config = Config::new();
        assert_eq!(config.grid.canvas_size, 7140.0);
        assert_eq!(config.grid.grid_size, 15);
        assert_eq!(config.grid.box_size, 450.0);
        assert_eq!(config.grid.gap_size, 20.0);
        assert_eq!(config.grid.band_skip_index, Some(7));
        assert_eq!(config.script.action_set, "MakeColorGrid");
        assert_eq!(config.script.adjustment_action, "AddAdjustmentLayer");
        assert_eq!(config.script.finishing_action.as_deref(), Some("SetValues"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config::new();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: Config = toml::from_str("[grid]\ngrid_size = 5\n").unwrap();
        assert_eq!(parsed.grid.grid_size, 5);
        assert_eq!(parsed.grid.box_size, 450.0);
        assert_eq!(parsed.script.document_name, "Color Variations");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::new();
        config.grid.grid_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.grid.box_size = -2.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.script.action_set = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_grid_config() {
        let config = Config::new();
        let grid = config.grid.to_grid_config();
        assert_eq!(grid, GridConfig::default());
    }
}
