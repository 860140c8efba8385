// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! These structs map to sections of `fcann.toml`. Every section and field
//! is optional in the file; the defaults here are the single source of
//! truth for fallback values.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FcannConfig {
    pub training: TrainingConfig,
    pub logging: LoggingConfig,
}

/// Training hyperparameters and cross-validation setup
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Learning rate of the delta rule.
    pub eta: f64,
    /// Momentum coefficient.
    pub alpha: f64,
    /// Exponential window of the smoothed diagnostic RMS loss.
    pub smoothing_window: f64,
    /// Training passes over each fold's training objects.
    pub epochs: usize,
    /// Cross-validation fold count.
    pub folds: usize,
    /// Seed for weight initialization and the fold permutation.
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            eta: 0.15,
            alpha: 0.5,
            smoothing_window: 100.0,
            epochs: 100,
            folds: 5,
            seed: 42,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter directive (overridable via `RUST_LOG`).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
