//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::color::RampMode;
use crate::settings::{
    DisplaySettings, SettingsResult, DEFAULT_PRECISION, DEFAULT_SQUARE_COUNT,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub color: ColorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial display state
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_precision")]
    pub precision: f64,

    #[serde(default = "default_square_count")]
    pub square_count: usize,
}

fn default_precision() -> f64 {
    DEFAULT_PRECISION
}

fn default_square_count() -> usize {
    DEFAULT_SQUARE_COUNT
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            square_count: default_square_count(),
        }
    }
}

/// Color scale configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorConfig {
    #[serde(default)]
    pub ramp_mode: RampMode,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("hvac-dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/hvac-dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    ///
    /// Values that fail to parse are logged and skipped.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(precision) = lookup("HVAC_DASHBOARD_PRECISION") {
            match precision.trim().parse() {
                Ok(p) => self.display.precision = p,
                Err(_) => tracing::warn!("Ignoring HVAC_DASHBOARD_PRECISION={:?}", precision),
            }
        }
        if let Some(squares) = lookup("HVAC_DASHBOARD_SQUARES") {
            match squares.trim().parse() {
                Ok(n) => self.display.square_count = n,
                Err(_) => tracing::warn!("Ignoring HVAC_DASHBOARD_SQUARES={:?}", squares),
            }
        }
        if let Some(mode) = lookup("HVAC_DASHBOARD_RAMP_MODE") {
            match mode.parse() {
                Ok(m) => self.color.ramp_mode = m,
                Err(e) => tracing::warn!("Ignoring HVAC_DASHBOARD_RAMP_MODE: {}", e),
            }
        }
        if let Some(level) = lookup("HVAC_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HVAC_DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Build the initial display state
    ///
    /// Fails if the configured precision or square count is not accepted by
    /// the sidebar rules.
    pub fn display_settings(&self) -> SettingsResult<DisplaySettings> {
        let mut settings = DisplaySettings::new().with_ramp_mode(self.color.ramp_mode);
        settings.set_precision(self.display.precision)?;
        settings.set_square_count(self.display.square_count)?;
        Ok(settings)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# HVAC Dashboard Configuration
#
# Environment variables override these settings:
# - HVAC_DASHBOARD_PRECISION
# - HVAC_DASHBOARD_SQUARES
# - HVAC_DASHBOARD_RAMP_MODE
# - HVAC_DASHBOARD_LOG_LEVEL
# - HVAC_DASHBOARD_LOG_FORMAT

[display]
# Half-width of the color scale; readings beyond +/- precision saturate
precision = 0.5

# Houses per grid page: 25, 36, 49, 64, 81, 100, 121, 144, 169, 196, 225 or 256
square_count = 100

[color]
# Cyan-to-green ramp formula: literal or symmetric
ramp_mode = "{}"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/hvac-dashboard/hvac-dashboard.log"
"#,
        RampMode::default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsError;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.display.precision, 0.5);
        assert_eq!(config.display.square_count, 100);
        assert_eq!(config.color.ramp_mode, RampMode::default());
        assert_eq!(config.logging.format, "pretty");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_default_config_follows_ramp_default() {
        let expected = format!("ramp_mode = \"{}\"", RampMode::default());
        assert!(generate_default_config().contains(&expected));
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("[color]\nramp_mode = \"symmetric\"\n").unwrap();
        assert_eq!(config.color.ramp_mode, RampMode::Symmetric);
        assert_eq!(config.display.square_count, 100);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_ramp_mode() {
        assert!(Config::parse("[color]\nramp_mode = \"inverted\"\n").is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HVAC_DASHBOARD_PRECISION", "1.5"),
            ("HVAC_DASHBOARD_SQUARES", "not-a-number"),
            ("HVAC_DASHBOARD_RAMP_MODE", "symmetric"),
            ("HVAC_DASHBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.display.precision, 1.5);
        assert_eq!(config.display.square_count, 100);
        assert_eq!(config.color.ramp_mode, RampMode::Symmetric);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_display_settings() {
        let config = Config::parse("[display]\nprecision = 2.0\nsquare_count = 64\n").unwrap();
        let settings = config.display_settings().unwrap();
        assert_eq!(settings.precision(), 2.0);
        assert_eq!(settings.layout().per_line(), 8);

        let config = Config::parse("[display]\nprecision = -1.0\n").unwrap();
        assert_eq!(
            config.display_settings(),
            Err(SettingsError::InvalidPrecision(-1.0))
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.logging.level, "debug");

        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
