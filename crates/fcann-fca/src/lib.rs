// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # FCANN Formal Concept Analysis Core
//!
//! Everything lattice-side in one place:
//! - **BitSet**: fixed-width bit vectors (extents and intents)
//! - **Context**: object×attribute incidence tables and derivative operators
//! - **Enumeration**: canonical, duplicate-free concept enumeration with
//!   pluggable keep-predicates
//! - **Lattice**: transitively-reduced covering DAG with level offsets
//! - **Measures**: support, coverage and purity, thresholdable into
//!   predicates
//! - **Dataset**: the line-oriented context file format

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bitset;
pub mod concept;
pub mod context;
pub mod dataset;
pub mod enumerate;
pub mod error;
pub mod lattice;
pub mod measures;

pub use bitset::BitSet;
pub use concept::Concept;
pub use context::Context;
pub use dataset::{load_context, load_context_file};
pub use enumerate::{enumerate_concepts, keep_all};
pub use error::{FcaError, Result};
pub use lattice::{is_sub_concept, Lattice};
pub use measures::{coverage, incidence_coverage, min_measure, purity, support, Measure};
