// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Lattice → Network Topology Derivation
//!
//! Carves a trainable sub-network out of a slice `[min_level, max_level)`
//! of lattice levels:
//!
//! - **Input layer**: one neuron per attribute, no incoming connections.
//! - **First mapped level**: each concept is wired from the attribute
//!   neurons of its intent bits — covering edges into the sliced-off
//!   levels above are ignored here.
//! - **Interior levels**: each concept is wired from its lattice covers,
//!   remapped to network indices. A concept whose covers all lie below
//!   `min_level` falls back to intent wiring so no computed neuron is left
//!   without inputs.
//! - **Boundary level** (`max_level − 1`): condensed to the `(n + 1) / 2`
//!   concepts of highest purity against the target classes (partial
//!   selection, round up — a policy, see DESIGN.md), a lossy compression
//!   that bounds the final hidden width.
//! - **Output layer**: one neuron per target class, fully wired from the
//!   boundary survivors.

use std::cmp::Ordering;

use tracing::debug;

use fcann_fca::measures::purity;
use fcann_fca::Lattice;

use crate::error::{NetworkError, Result};
use crate::structure::NetworkStructure;

/// Derive a connectivity descriptor from a lattice level slice.
///
/// `targets` supplies one integer class per context object; the output
/// layer gets `max(targets) + 1` neurons. A `targets` slice whose length
/// differs from the object count is rejected with
/// [`NetworkError::SizeMismatch`]. Levels outside the lattice (or
/// an empty range, or `min_level == 0` — the top concept has an empty
/// intent and cannot be a computed neuron) are rejected with
/// [`NetworkError::LevelOutOfRange`], never clamped.
pub fn from_lattice(
    lattice: &Lattice,
    targets: &[usize],
    min_level: usize,
    max_level: usize,
) -> Result<NetworkStructure> {
    let available = lattice.level_count();
    if min_level == 0 || min_level >= max_level || max_level > available {
        return Err(NetworkError::LevelOutOfRange {
            min_level,
            max_level,
            available,
        });
    }

    let objects = lattice.concepts()[0].extent().len();
    if targets.len() != objects {
        return Err(NetworkError::SizeMismatch {
            expected: objects,
            actual: targets.len(),
        });
    }

    let attributes = lattice.concepts()[0].intent().len();
    let level_starts = lattice.level_starts();

    let mut connections: Vec<Vec<usize>> = vec![Vec::new(); attributes];
    // Lattice index → network index, for concepts materialized so far.
    let mut net_index: Vec<Option<usize>> = vec![None; lattice.len()];
    let mut boundary: Vec<usize> = Vec::new();

    for level in min_level..max_level {
        let start = level_starts[level];
        let end = level_starts[level + 1];

        let chosen: Vec<usize> = if level + 1 == max_level {
            select_purest(lattice, targets, start, end)
        } else {
            (start..end).collect()
        };

        for &ci in &chosen {
            let mut sources: Vec<usize> = if level == min_level {
                intent_sources(lattice, ci)
            } else {
                lattice.connections()[ci]
                    .iter()
                    .filter_map(|&cover| net_index[cover])
                    .collect()
            };
            if sources.is_empty() {
                // Every cover lies below the slice.
                sources = intent_sources(lattice, ci);
            }
            let index = connections.len();
            net_index[ci] = Some(index);
            connections.push(sources);
            if level + 1 == max_level {
                boundary.push(index);
            }
        }
    }

    let classes = targets.iter().max().map_or(0, |&c| c + 1);
    for _ in 0..classes {
        connections.push(boundary.clone());
    }

    debug!(
        neurons = connections.len(),
        attributes,
        boundary = boundary.len(),
        classes,
        "derived network structure from lattice levels {min_level}..{max_level}"
    );

    NetworkStructure::new(connections)
}

fn intent_sources(lattice: &Lattice, concept: usize) -> Vec<usize> {
    lattice.concepts()[concept].intent().iter_ones().collect()
}

/// Top `(n + 1) / 2` concepts of `start..end` by purity, via a partial
/// selection rather than a full sort.
fn select_purest(lattice: &Lattice, targets: &[usize], start: usize, end: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (start..end).collect();
    let keep = (indices.len() + 1) / 2;
    if keep < indices.len() {
        let score = |&ci: &usize| purity(&lattice.concepts()[ci], targets);
        indices.select_nth_unstable_by(keep - 1, |a, b| {
            score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal)
        });
        indices.truncate(keep);
        // Network indices must ascend with lattice indices within a layer.
        indices.sort_unstable();
    }
    indices
}
