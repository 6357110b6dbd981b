//! Runtime configuration
//!
//! Mirrors the `consts` defaults for embedders that want a different board
//! or clock period. The engine itself only reads `grid_size`; the tick
//! period is carried for the clock adapter's benefit.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Engine and adapter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid side length (the board is `grid_size * grid_size` cells)
    pub grid_size: u8,
    /// Clock adapter period between ticks, in milliseconds
    pub tick_period_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: consts::GRID_SIZE,
            tick_period_ms: consts::TICK_PERIOD_MS,
        }
    }
}

/// Config loading failures
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read
    Io(std::io::Error),
    /// File was not valid JSON for a `Config`
    Parse(serde_json::Error),
    /// A 0x0 or 1x1 board cannot hold a snake and a disjoint food
    InvalidGridSize(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::InvalidGridSize(n) => {
                write!(f, "grid_size must be at least 2, got {n}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::InvalidGridSize(_) => None,
        }
    }
}

impl Config {
    /// Reject configurations the engine cannot run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        Ok(())
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path)
            .map_err(ConfigError::Io)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mirror_consts() {
        let config = Config::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.tick_period_ms, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_document() {
        let config = Config::from_json(r#"{"grid_size": 12}"#).unwrap();
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.tick_period_ms, 200);
    }

    #[test]
    fn test_from_json_rejects_degenerate_grid() {
        let err = Config::from_json(r#"{"grid_size": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGridSize(1)));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = Config::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
