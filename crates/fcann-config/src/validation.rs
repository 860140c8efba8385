// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Range checks keeping the training section consistent before a run
//! starts; every violation is collected so the user sees all of them at
//! once.

use crate::{ConfigError, ConfigResult, FcannConfig};

/// Validate the complete configuration.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every out-of-range
/// field.
pub fn validate_config(config: &FcannConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();
    let training = &config.training;

    if !(training.eta > 0.0 && training.eta <= 1.0) {
        errors.push(format!(
            "training.eta = {} must be in (0, 1]",
            training.eta
        ));
    }
    if !(0.0..1.0).contains(&training.alpha) {
        errors.push(format!(
            "training.alpha = {} must be in [0, 1)",
            training.alpha
        ));
    }
    if !(training.smoothing_window >= 1.0) {
        errors.push(format!(
            "training.smoothing_window = {} must be at least 1",
            training.smoothing_window
        ));
    }
    if training.epochs == 0 {
        errors.push("training.epochs must be at least 1".to_string());
    }
    if training.folds < 2 {
        errors.push(format!(
            "training.folds = {} must be at least 2",
            training.folds
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
