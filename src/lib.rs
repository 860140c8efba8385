// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # FCANN - Concept-Lattice Neural Networks
//!
//! FCANN enumerates the formal concepts of a binary object×attribute
//! table, arranges them into a concept lattice, and derives a feed-forward
//! DAG network whose connectivity mirrors the lattice, trained as a
//! classifier by backpropagation.
//!
//! ## Pipeline
//!
//! ```text
//! Context ──enumerate──▶ Concepts ──order──▶ Lattice
//!     │                                         │
//!     │                               level slice + targets
//!     │                                         ▼
//!     └────rows/labels────▶ Train ◀── NetworkStructure ──▶ Network
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fcann::prelude::*;
//!
//! let (context, targets) = fcann::fca::load_context(std::io::Cursor::new(
//!     "4 4\n1 0 0 1 0\n1 0 1 0 0\n0 1 1 0 1\n0 1 1 1 1\n",
//! ))
//! .unwrap();
//! let concepts = enumerate_concepts(&context, keep_all, None);
//! let lattice = Lattice::new(concepts);
//! let structure = fcann::network::from_lattice(&lattice, &targets, 1, 3).unwrap();
//! let accuracies =
//!     cross_validation_accuracies(&structure, &context, &targets, &TrainOptions {
//!         folds: 2,
//!         epochs: 20,
//!         ..TrainOptions::default()
//!     })
//!     .unwrap();
//! assert_eq!(accuracies.len(), 2);
//! ```

pub use fcann_config as config;
pub use fcann_fca as fca;
pub use fcann_network as network;

/// The types and functions most callers need.
pub mod prelude {
    pub use crate::config::{load_or_default, validate_config, FcannConfig};
    pub use crate::fca::{
        enumerate_concepts, keep_all, min_measure, support, BitSet, Concept, Context, Lattice,
    };
    pub use crate::network::{
        cross_validation_accuracies, Hyperparameters, Network, NetworkStructure, TrainOptions,
    };
}
