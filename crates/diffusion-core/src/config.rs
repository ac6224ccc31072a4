//! Configuration System
//!
//! Loads simulation parameters from a TOML file so runs can be adjusted
//! without recompiling. Every field has a default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::components::network::Bounds;
use crate::driver::DEFAULT_MAX_STEPS;
use crate::engine::DEFAULT_CONSULTATION_WINDOW;
use crate::error::{ConfigError, DiffusionError};
use crate::setup::check_feasible;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "diffusion.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Network generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub id: u32,
    /// Number of entities
    pub size: usize,
    /// Upper x coordinate, inclusive
    pub width: u32,
    /// Upper y coordinate, inclusive
    pub height: u32,
}

impl NetworkConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        let bounds = Bounds::default();
        Self {
            id: 1,
            size: 10,
            width: bounds.width,
            height: bounds.height,
        }
    }
}

/// Engine and driver parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub consultation_window: u32,
    pub max_steps: u64,
    /// Seed for the single random stream
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            consultation_window: DEFAULT_CONSULTATION_WINDOW,
            max_steps: DEFAULT_MAX_STEPS,
            seed: 42,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `path`, or use defaults if it cannot be read
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", path.display(), e);
            Self::default()
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject setups that cannot build a network
    pub fn validate(&self) -> Result<(), DiffusionError> {
        check_feasible(self.network.size, self.network.bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.network.size, 10);
        assert_eq!(config.network.bounds(), Bounds::new(50, 50));
        assert_eq!(config.simulation.consultation_window, 3);
        assert_eq!(config.simulation.max_steps, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
            [simulation]
            max_steps = 150
            consultation_window = 10
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.simulation.max_steps, 150);
        assert_eq!(config.simulation.consultation_window, 10);
        assert_eq!(config.simulation.seed, 42);
        assert_eq!(config.network, NetworkConfig::default());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_error() {
        let result = Config::from_str("[network]\nsize = \"many\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.network.size = 25;
        config.simulation.seed = 7;

        let toml = config.to_toml().unwrap();
        assert_eq!(Config::from_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_infeasible() {
        let mut config = Config::default();
        config.network.size = 0;
        assert!(config.validate().is_err());

        config.network.size = 5;
        config.network.width = 1;
        config.network.height = 1;
        assert!(matches!(
            config.validate(),
            Err(DiffusionError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_largest_bounds() {
        let mut config = Config::default();
        config.network.width = u32::MAX;
        config.network.height = u32::MAX;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[network]\nsize = 30\nwidth = 10\nheight = 10").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.network.size, 30);
        assert_eq!(config.network.bounds(), Bounds::new(10, 10));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config, Config::default());
    }
}
