// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # FCANN Network Engine
//!
//! General DAG of scalar computation units with tanh activation:
//! - **NetworkStructure**: immutable per-neuron connectivity, validated to
//!   be topologically ordered at construction
//! - **Network**: mutable evaluation state; forward pass, backpropagation,
//!   momentum delta-rule weight updates, seedable initialization
//! - **Topology**: derives a structure from a concept-lattice level slice
//! - **Train**: k-fold cross-validation driver
//!
//! Single-threaded and synchronous throughout; evaluation order is the one
//! correctness-critical ordering guarantee (see [`structure`]).

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod network;
pub mod structure;
pub mod topology;
pub mod train;

pub use error::{NetworkError, Result};
pub use network::{Hyperparameters, Network};
pub use structure::NetworkStructure;
pub use topology::from_lattice;
pub use train::{cross_validation_accuracies, TrainOptions};
