// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # DAG Neuron Engine
//!
//! A `Network` is the mutable evaluation half of the two-phase design: an
//! arena of scalar neurons addressed by index, built once from an immutable
//! [`NetworkStructure`]. Connections store indices, never references, so
//! the consumer back-links needed by backpropagation introduce no aliasing.
//!
//! The strict-DAG ordering invariant (`sources < neuron`) makes one
//! left-to-right sweep a complete forward pass and one right-to-left sweep
//! a complete gradient pass. The core is single-threaded and does no I/O.
//!
//! ## Learning rule
//!
//! tanh activation throughout; output gradient `(target − out)·(1 − out²)`;
//! interior gradients propagated through consumer back-links; weight update
//! `Δw = η·gradient·source_out + α·Δw_prev` (delta rule with momentum).

use rand::Rng;
use tracing::trace;

use crate::error::{NetworkError, Result};
use crate::structure::NetworkStructure;

/// Training hyperparameters.
///
/// The defaults are the classic momentum-augmented delta rule constants;
/// `smoothing_window` controls the exponential averaging of the diagnostic
/// RMS loss (larger = smoother).
#[derive(Debug, Clone, Copy)]
pub struct Hyperparameters {
    pub eta: f64,
    pub alpha: f64,
    pub smoothing_window: f64,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            eta: 0.15,
            alpha: 0.5,
            smoothing_window: 100.0,
        }
    }
}

#[derive(Debug, Clone)]
struct Connection {
    source: usize,
    weight: f64,
    /// Last applied weight change, kept for momentum.
    delta: f64,
}

/// Back-reference to a consuming neuron: which neuron, and which of its
/// input slots holds the weight from us.
#[derive(Debug, Clone, Copy)]
struct Consumer {
    neuron: usize,
    slot: usize,
}

#[derive(Debug, Clone)]
struct Neuron {
    output: f64,
    gradient: f64,
    inputs: Vec<Connection>,
    consumers: Vec<Consumer>,
}

/// Feed-forward DAG network over scalar neurons.
#[derive(Debug, Clone)]
pub struct Network {
    neurons: Vec<Neuron>,
    /// Neurons `0..input_len` have no incoming connections; their outputs
    /// are supplied externally.
    input_len: usize,
    /// Neurons `len-output_len..len` have no consumers; they form the
    /// output region.
    output_len: usize,
    params: Hyperparameters,
    smoothed_loss: f64,
}

impl Network {
    /// Build a network with default hyperparameters.
    pub fn new(structure: &NetworkStructure, rng: &mut impl Rng) -> Result<Self> {
        Self::with_hyperparameters(structure, Hyperparameters::default(), rng)
    }

    /// Build a network, drawing every weight uniformly from `[-1, 1]`
    /// scaled by `sqrt(3 / fan_in)` (zero mean, variance `1/fan_in`).
    ///
    /// The generator is injected so construction is reproducible from a
    /// seed. Fails if a computed neuron has no inputs: that would break
    /// the contiguous input-region layout the passes rely on.
    pub fn with_hyperparameters(
        structure: &NetworkStructure,
        params: Hyperparameters,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let n = structure.len();
        let input_len = structure
            .connections()
            .iter()
            .position(|c| !c.is_empty())
            .unwrap_or(n);
        if let Some(neuron) = structure.connections()[input_len..]
            .iter()
            .position(Vec::is_empty)
        {
            return Err(NetworkError::DisconnectedNeuron {
                neuron: input_len + neuron,
            });
        }

        let mut neurons: Vec<Neuron> = structure
            .connections()
            .iter()
            .map(|sources| {
                let fan_in = sources.len();
                let scale = if fan_in > 0 {
                    (3.0 / fan_in as f64).sqrt()
                } else {
                    0.0
                };
                Neuron {
                    output: 1.0,
                    gradient: 0.0,
                    inputs: sources
                        .iter()
                        .map(|&source| Connection {
                            source,
                            weight: rng.gen_range(-1.0..1.0) * scale,
                            delta: 0.0,
                        })
                        .collect(),
                    consumers: Vec::new(),
                }
            })
            .collect();

        for neuron in 0..n {
            for slot in 0..neurons[neuron].inputs.len() {
                let source = neurons[neuron].inputs[slot].source;
                neurons[source].consumers.push(Consumer { neuron, slot });
            }
        }

        // Output region: the maximal consumer-free suffix. A consumer-free
        // neuron further in is inert (zero gradient), not an output; the
        // lattice boundary condensation can legitimately orphan one.
        let mut output_len = 0;
        while output_len < n - input_len && neurons[n - 1 - output_len].consumers.is_empty() {
            output_len += 1;
        }

        trace!(
            neurons = n,
            inputs = input_len,
            outputs = output_len,
            "network constructed"
        );

        Ok(Self {
            neurons,
            input_len,
            output_len,
            params,
            smoothed_loss: 0.0,
        })
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Width of the input region.
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Width of the output region.
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// Exponentially averaged RMS loss over recent training steps.
    pub fn smoothed_loss(&self) -> f64 {
        self.smoothed_loss
    }

    /// Forward pass: copies `input` into the input region, then evaluates
    /// every computed neuron in increasing index order as
    /// `tanh(Σ wᵢ·sourceᵢ)`. Returns the output-region values.
    ///
    /// Panics if `input` does not match the input width; that is a
    /// programming error in the caller, not a runtime condition.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        assert_eq!(
            input.len(),
            self.input_len,
            "forward-pass input width does not match the network's input region"
        );
        for (neuron, &value) in self.neurons.iter_mut().zip(input) {
            neuron.output = value;
        }
        for n in self.input_len..self.neurons.len() {
            let sum: f64 = self.neurons[n]
                .inputs
                .iter()
                .map(|c| c.weight * self.neurons[c.source].output)
                .sum();
            self.neurons[n].output = sum.tanh();
        }
        self.outputs()
    }

    /// Current output-region values.
    pub fn outputs(&self) -> Vec<f64> {
        self.neurons[self.neurons.len() - self.output_len..]
            .iter()
            .map(|n| n.output)
            .collect()
    }

    /// One training step: forward pass, backward pass, weight update.
    /// Returns the (pre-update) outputs.
    pub fn train_step(&mut self, input: &[f64], target: &[f64]) -> Result<Vec<f64>> {
        if target.len() != self.output_len {
            return Err(NetworkError::SizeMismatch {
                expected: self.output_len,
                actual: target.len(),
            });
        }
        let output = self.forward(input);

        // Output gradients from the loss derivative.
        let first_output = self.neurons.len() - self.output_len;
        for (k, &t) in target.iter().enumerate() {
            let neuron = &mut self.neurons[first_output + k];
            let out = neuron.output;
            neuron.gradient = (t - out) * (1.0 - out * out);
        }

        // Interior gradients, strictly decreasing index order: every
        // consumer has a larger index, so its gradient is already final.
        for n in (self.input_len..first_output).rev() {
            let sum: f64 = self.neurons[n]
                .consumers
                .iter()
                .map(|c| {
                    let consumer = &self.neurons[c.neuron];
                    consumer.gradient * consumer.inputs[c.slot].weight
                })
                .sum();
            let out = self.neurons[n].output;
            self.neurons[n].gradient = sum * (1.0 - out * out);
        }

        // Momentum-augmented delta rule. Sources always precede the neuron,
        // so the split borrows are disjoint.
        for n in self.input_len..self.neurons.len() {
            let (sources, rest) = self.neurons.split_at_mut(n);
            let neuron = &mut rest[0];
            let gradient = neuron.gradient;
            for conn in &mut neuron.inputs {
                let delta = self.params.eta * gradient * sources[conn.source].output
                    + self.params.alpha * conn.delta;
                conn.weight += delta;
                conn.delta = delta;
            }
        }

        let sq_err: f64 = target
            .iter()
            .zip(&output)
            .map(|(t, o)| (t - o) * (t - o))
            .sum();
        let rms = (sq_err / self.output_len as f64).sqrt();
        let window = self.params.smoothing_window;
        self.smoothed_loss = (self.smoothed_loss * window + rms) / (window + 1.0);

        Ok(output)
    }
}
