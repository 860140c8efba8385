// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Integration Tests: Complete Pipeline
//!
//! End-to-end runs of dataset loading → concept enumeration → lattice
//! construction → topology derivation → cross-validation training.

use std::io::Cursor;

use rand::rngs::StdRng;
use rand::SeedableRng;

use fcann::fca::{enumerate_concepts, keep_all, load_context, min_measure, support, Lattice};
use fcann::network::{
    cross_validation_accuracies, from_lattice, Network, NetworkStructure, TrainOptions,
};

/// The 4-object/4-attribute worked example: 9 formal concepts, two target
/// classes.
const TOY_DATASET: &str = "4 4\n\
                           1 0 0 1 0\n\
                           1 0 1 0 0\n\
                           0 1 1 0 1\n\
                           0 1 1 1 1\n";

/// A slightly larger separable dataset: class decided by whether the
/// object carries attribute 0 or attribute 1.
const SEPARABLE_DATASET: &str = "8 4\n\
                                 1 0 1 0 0\n\
                                 1 0 0 1 0\n\
                                 1 0 1 1 0\n\
                                 1 0 0 0 0\n\
                                 0 1 1 0 1\n\
                                 0 1 0 1 1\n\
                                 0 1 1 1 1\n\
                                 0 1 0 0 1\n";

#[test]
fn test_toy_dataset_reaches_the_training_stage() {
    let (context, targets) = load_context(Cursor::new(TOY_DATASET)).unwrap();
    let concepts = enumerate_concepts(&context, keep_all, None);
    assert_eq!(concepts.len(), 9);

    let lattice = Lattice::new(concepts);
    assert_eq!(lattice.level_count(), 5);

    let structure = from_lattice(&lattice, &targets, 1, 3).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let network = Network::new(&structure, &mut rng).unwrap();
    assert_eq!(network.input_len(), context.attribute_count());
    assert_eq!(network.output_len(), 2);
}

#[test]
fn test_lattice_network_learns_a_separable_dataset() {
    let (context, targets) = load_context(Cursor::new(SEPARABLE_DATASET)).unwrap();
    let concepts = enumerate_concepts(&context, min_measure(support, &context, 0.25), None);
    let lattice = Lattice::new(concepts);
    let max_level = lattice.level_count().min(3);
    let structure = from_lattice(&lattice, &targets, 1, max_level).unwrap();

    let options = TrainOptions {
        folds: 4,
        epochs: 200,
        seed: 9,
        ..TrainOptions::default()
    };
    let accuracies = cross_validation_accuracies(&structure, &context, &targets, &options).unwrap();
    assert_eq!(accuracies.len(), 4);
    let mean = accuracies.iter().sum::<f64>() / accuracies.len() as f64;
    // Class is literally one of the input attributes; the network should
    // do clearly better than coin flipping.
    assert!(mean > 0.5, "mean accuracy {mean}");
}

#[test]
fn test_mlp_baseline_runs_on_the_same_dataset() {
    let (context, targets) = load_context(Cursor::new(SEPARABLE_DATASET)).unwrap();
    let structure = NetworkStructure::fully_connected(&[4, 5, 2]).unwrap();
    let options = TrainOptions {
        folds: 2,
        epochs: 100,
        seed: 1,
        ..TrainOptions::default()
    };
    let accuracies = cross_validation_accuracies(&structure, &context, &targets, &options).unwrap();
    assert_eq!(accuracies.len(), 2);
}
