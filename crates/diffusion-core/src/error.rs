//! Error Types
//!
//! Configuration-time rejections. Once a network and engine exist, stepping
//! the simulation cannot fail.

use thiserror::Error;

/// Errors raised while building a network or an engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffusionError {
    /// The requested setup cannot produce a valid simulation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl DiffusionError {
    /// Creates an invalid configuration error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

/// Errors from the TOML configuration layer
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err = DiffusionError::invalid("network size must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: network size must be at least 1"
        );
    }
}
