// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for network construction and training

/// Configuration-class errors: reported to the caller, never silently
/// corrected. Genuine programming errors (a forward-pass input of the
/// wrong width) are asserted instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    #[error("neuron {neuron} references {from}, which is not an earlier neuron")]
    ForwardReference { neuron: usize, from: usize },

    #[error("neuron {neuron} is a computed neuron with no incoming connections")]
    DisconnectedNeuron { neuron: usize },

    #[error(
        "level range [{min_level}, {max_level}) is invalid for a lattice with {available} levels"
    )]
    LevelOutOfRange {
        min_level: usize,
        max_level: usize,
        available: usize,
    },

    #[error("expected {expected} values, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("a fully connected network needs at least two layers of nonzero size")]
    BadLayerSizes,

    #[error("fold count {folds} must be between 2 and the number of objects ({objects})")]
    BadFoldCount { folds: usize, objects: usize },
}

/// Result type for network operations
pub type Result<T> = std::result::Result<T, NetworkError>;
