// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # FCANN Configuration System
//!
//! Type-safe configuration loader:
//! - TOML file parsing (`fcann.toml`)
//! - Environment variable overrides
//! - Validation with every violation reported at once
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fcann_config::{load_or_default, validate_config};
//!
//! let config = load_or_default().expect("failed to load config");
//! validate_config(&config).expect("invalid config");
//! println!("folds: {}", config.training.folds);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{
    apply_environment_overrides, find_config_file, load_config, load_or_default,
};
pub use types::*;
pub use validation::validate_config;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_types_compile() {
        // Smoke test to ensure types are properly defined
        let config = FcannConfig::default();
        assert_eq!(config.training.eta, 0.15);
        assert_eq!(config.training.alpha, 0.5);
    }
}
