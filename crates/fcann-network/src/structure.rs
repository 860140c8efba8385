// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Network Connectivity Descriptors
//!
//! A `NetworkStructure` is the immutable topology half of the two-phase
//! network design: per neuron, the list of source-neuron indices feeding
//! it. Neurons with an empty list form the input region.
//!
//! Invariant, checked at construction: every referenced source index is
//! strictly smaller than the owning neuron's index. That strict-DAG
//! ordering is what makes a single left-to-right sweep a valid evaluation
//! order and a single right-to-left sweep a valid gradient order.

use crate::error::{NetworkError, Result};

/// Per-neuron input connectivity, already topologically ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkStructure {
    connections: Vec<Vec<usize>>,
}

impl NetworkStructure {
    /// Build a structure from explicit per-neuron source lists.
    ///
    /// Fails with [`NetworkError::ForwardReference`] if any neuron
    /// references itself or a later neuron.
    pub fn new(connections: Vec<Vec<usize>>) -> Result<Self> {
        for (neuron, sources) in connections.iter().enumerate() {
            for &source in sources {
                if source >= neuron {
                    return Err(NetworkError::ForwardReference {
                        neuron,
                        from: source,
                    });
                }
            }
        }
        Ok(Self { connections })
    }

    /// Classic fully-connected MLP stack: `layer_sizes[0]` inputs, then
    /// each layer fully wired from the previous one.
    pub fn fully_connected(layer_sizes: &[usize]) -> Result<Self> {
        if layer_sizes.len() < 2 || layer_sizes.iter().any(|&s| s == 0) {
            return Err(NetworkError::BadLayerSizes);
        }

        let total: usize = layer_sizes.iter().sum();
        let mut connections = Vec::with_capacity(total);
        for _ in 0..layer_sizes[0] {
            connections.push(Vec::new());
        }
        let mut layer_start = 0;
        for window in layer_sizes.windows(2) {
            let (prev, width) = (window[0], window[1]);
            let sources: Vec<usize> = (layer_start..layer_start + prev).collect();
            for _ in 0..width {
                connections.push(sources.clone());
            }
            layer_start += prev;
        }
        Ok(Self { connections })
    }

    /// Number of neurons.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Source lists, one per neuron.
    pub fn connections(&self) -> &[Vec<usize>] {
        &self.connections
    }
}
