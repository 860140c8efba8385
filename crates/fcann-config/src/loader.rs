// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Two-tier loading: the TOML file supplies the base values, environment
//! variables override individual fields at runtime.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{ConfigError, ConfigResult, FcannConfig};

const CONFIG_FILE_NAME: &str = "fcann.toml";

/// Find the FCANN configuration file.
///
/// Search order:
/// 1. `FCANN_CONFIG_PATH` environment variable
/// 2. Current working directory: `./fcann.toml`
/// 3. Up to 5 parent directories (workspace root)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file exists in any
/// searched location.
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("FCANN_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by FCANN_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd;
        for _ in 0..5 {
            let Some(parent) = current.parent() else {
                break;
            };
            search_paths.push(parent.join(CONFIG_FILE_NAME));
            current = parent.to_path_buf();
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");
    Err(ConfigError::FileNotFound(format!(
        "'{CONFIG_FILE_NAME}' not found in any of these locations:\n{search_list}\n\nSet FCANN_CONFIG_PATH to specify a custom location."
    )))
}

/// Load configuration from a TOML file, then apply environment overrides.
///
/// # Errors
///
/// Returns an error if the file is missing or contains invalid TOML.
pub fn load_config(config_path: Option<&Path>) -> ConfigResult<FcannConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };
    let content = fs::read_to_string(&config_file)?;
    let mut config: FcannConfig = toml::from_str(&content)?;
    apply_environment_overrides(&mut config);
    Ok(config)
}

/// Like [`load_config`] with no explicit path, but a missing config file
/// falls back to the defaults (environment overrides still apply). Parse
/// errors in an existing file are still reported.
pub fn load_or_default() -> ConfigResult<FcannConfig> {
    match find_config_file() {
        Ok(path) => load_config(Some(&path)),
        Err(ConfigError::FileNotFound(_)) => {
            let mut config = FcannConfig::default();
            apply_environment_overrides(&mut config);
            Ok(config)
        }
        Err(err) => Err(err),
    }
}

/// Apply environment variable overrides to configuration.
///
/// Supported variables:
/// - `FCANN_TRAINING_ETA` → `training.eta`
/// - `FCANN_TRAINING_ALPHA` → `training.alpha`
/// - `FCANN_TRAINING_EPOCHS` → `training.epochs`
/// - `FCANN_TRAINING_FOLDS` → `training.folds`
/// - `FCANN_TRAINING_SEED` → `training.seed`
/// - `FCANN_LOG_LEVEL` → `logging.level`
pub fn apply_environment_overrides(config: &mut FcannConfig) {
    fn parse_var<T: std::str::FromStr>(name: &str, slot: &mut T) {
        if let Ok(value) = env::var(name) {
            if let Ok(parsed) = value.parse() {
                *slot = parsed;
            }
        }
    }

    parse_var("FCANN_TRAINING_ETA", &mut config.training.eta);
    parse_var("FCANN_TRAINING_ALPHA", &mut config.training.alpha);
    parse_var("FCANN_TRAINING_EPOCHS", &mut config.training.epochs);
    parse_var("FCANN_TRAINING_FOLDS", &mut config.training.folds);
    parse_var("FCANN_TRAINING_SEED", &mut config.training.seed);
    parse_var("FCANN_LOG_LEVEL", &mut config.logging.level);
}
