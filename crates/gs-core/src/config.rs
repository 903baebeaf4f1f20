//! Configuration structures for grid-suite.
//!
//! This module provides configuration types for all components of the application:
//!
//! - [`GridConfig`] - Grid engine settings (page sizes, filter debounce)
//! - [`TuiConfig`] - Terminal UI settings (tick rate, colors)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`], and every section is
//! `#[serde(default)]` so partial JSON files are accepted.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Lowest accepted filter debounce window, in milliseconds.
pub const MIN_FILTER_DEBOUNCE_MS: u64 = 300;

/// Color scheme for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColorScheme {
    /// Automatically detect based on terminal settings.
    #[default]
    Auto,
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
}

/// Configuration for the grid engine.
///
/// # Examples
///
/// ```
/// use gs_core::GridConfig;
///
/// let config = GridConfig::default();
/// assert_eq!(config.page_size, 10);
/// assert_eq!(config.filter_debounce_ms, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Rows per page when a grid is first opened.
    pub page_size: usize,

    /// Page sizes offered by the page-size selector.
    pub page_size_options: Vec<usize>,

    /// Quiet period after the last keystroke before a filter is committed.
    pub filter_debounce_ms: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![10, 20, 50, 100],
            filter_debounce_ms: MIN_FILTER_DEBOUNCE_MS,
        }
    }
}

impl GridConfig {
    /// Validates the grid settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if a page size is zero, the
    /// default page size is not one of the options, or the debounce window is
    /// shorter than [`MIN_FILTER_DEBOUNCE_MS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::invalid_option("grid.page_size", "must be positive"));
        }
        if self.page_size_options.is_empty() {
            return Err(ConfigError::invalid_option(
                "grid.page_size_options",
                "must offer at least one page size",
            ));
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::invalid_option(
                "grid.page_size_options",
                "page sizes must be positive",
            ));
        }
        if !self.page_size_options.contains(&self.page_size) {
            return Err(ConfigError::invalid_option(
                "grid.page_size",
                format!("{} is not one of {:?}", self.page_size, self.page_size_options),
            ));
        }
        if self.filter_debounce_ms < MIN_FILTER_DEBOUNCE_MS {
            return Err(ConfigError::invalid_option(
                "grid.filter_debounce_ms",
                format!("must be at least {MIN_FILTER_DEBOUNCE_MS}"),
            ));
        }
        Ok(())
    }
}

/// Configuration for the terminal user interface.
///
/// # Examples
///
/// ```
/// use gs_core::{TuiConfig, ColorScheme};
///
/// let config = TuiConfig::default();
/// assert_eq!(config.tick_rate_ms, 50);
/// assert_eq!(config.color_scheme, ColorScheme::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds.
    ///
    /// Ticks drive the filter debouncer, so this bounds how late a
    /// debounced filter can commit.
    pub tick_rate_ms: u64,

    /// Render rate in frames per second.
    pub frame_rate: u32,

    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            frame_rate: 30,
            color_scheme: ColorScheme::Auto,
        }
    }
}

/// Root configuration for grid-suite.
///
/// # Examples
///
/// ```
/// use gs_core::Config;
///
/// let config = Config::default();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid engine configuration.
    pub grid: GridConfig,

    /// Terminal UI configuration.
    pub tui: TuiConfig,
}

impl Config {
    /// Loads and validates a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, not valid JSON,
    /// or fails [`Config::validate`].
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_owned()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first invalid option found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::invalid_option("tui.tick_rate_ms", "must be positive"));
        }
        if self.tui.frame_rate == 0 {
            return Err(ConfigError::invalid_option("tui.frame_rate", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_config_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_size_options, vec![10, 20, 50, 100]);
        assert_eq!(config.filter_debounce_ms, 300);
    }

    #[test]
    fn test_tui_config_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.color_scheme, ColorScheme::Auto);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"grid": {"page_size": 20}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.grid.page_size, 20);
        assert_eq!(config.grid.filter_debounce_ms, 300);
        assert_eq!(config.tui.tick_rate_ms, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_debounce() {
        let mut config = Config::default();
        config.grid.filter_debounce_ms = 100;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("filter_debounce_ms"));
    }

    #[test]
    fn test_validate_rejects_unlisted_page_size() {
        let mut config = Config::default();
        config.grid.page_size = 15;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOption { option, .. }) if option == "grid.page_size"
        ));
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.grid.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.grid.page_size_options.push(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Utf8Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_color_scheme_serialization() {
        assert_eq!(serde_json::to_string(&ColorScheme::Auto).unwrap(), r#""auto""#);
        assert_eq!(serde_json::to_string(&ColorScheme::Dark).unwrap(), r#""dark""#);
        assert_eq!(serde_json::to_string(&ColorScheme::Light).unwrap(), r#""light""#);
    }
}
