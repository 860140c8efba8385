// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cross-Validation Training Driver
//!
//! Repeats forward/backward passes over seeded index permutations: the
//! object indices are shuffled once, split into `folds` contiguous chunks,
//! and each chunk in turn is held out while a freshly initialized network
//! trains on the rest. The per-fold score is argmax accuracy on the
//! held-out objects.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use fcann_fca::Context;

use crate::error::{NetworkError, Result};
use crate::network::{Hyperparameters, Network};
use crate::structure::NetworkStructure;

/// Knobs for [`cross_validation_accuracies`].
#[derive(Debug, Clone, Copy)]
pub struct TrainOptions {
    pub folds: usize,
    pub epochs: usize,
    pub seed: u64,
    pub hyper: Hyperparameters,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            folds: 5,
            epochs: 100,
            seed: 42,
            hyper: Hyperparameters::default(),
        }
    }
}

/// k-fold cross-validation of `structure` against the context rows and
/// their target classes. Returns one accuracy in `[0, 1]` per fold.
///
/// `seed` drives both the index permutation and every fold's weight
/// initialization, so a run is reproducible end to end.
pub fn cross_validation_accuracies(
    structure: &NetworkStructure,
    context: &Context,
    targets: &[usize],
    options: &TrainOptions,
) -> Result<Vec<f64>> {
    let objects = context.object_count();
    if targets.len() != objects {
        return Err(NetworkError::SizeMismatch {
            expected: objects,
            actual: targets.len(),
        });
    }
    if options.folds < 2 || options.folds > objects {
        return Err(NetworkError::BadFoldCount {
            folds: options.folds,
            objects,
        });
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut permutation: Vec<usize> = (0..objects).collect();
    permutation.shuffle(&mut rng);

    let classes = targets.iter().max().map_or(0, |&c| c + 1);

    let mut accuracies = Vec::with_capacity(options.folds);
    for fold in 0..options.folds {
        let held_out = fold_chunk(&permutation, options.folds, fold);
        let mut network = Network::with_hyperparameters(structure, options.hyper, &mut rng)?;
        if network.output_len() != classes {
            return Err(NetworkError::SizeMismatch {
                expected: classes,
                actual: network.output_len(),
            });
        }

        for _ in 0..options.epochs {
            for &obj in permutation.iter().filter(|&&o| !held_out.contains(&o)) {
                let input = object_input(context, obj, network.input_len())?;
                let target = one_hot(targets[obj], network.output_len());
                network.train_step(&input, &target)?;
            }
        }

        let mut correct = 0usize;
        for &obj in held_out {
            let input = object_input(context, obj, network.input_len())?;
            let output = network.forward(&input);
            if argmax(&output) == targets[obj] {
                correct += 1;
            }
        }
        let accuracy = correct as f64 / held_out.len() as f64;
        debug!(
            fold,
            accuracy,
            smoothed_loss = network.smoothed_loss(),
            "fold evaluated"
        );
        accuracies.push(accuracy);
    }

    info!(
        folds = options.folds,
        mean = accuracies.iter().sum::<f64>() / accuracies.len() as f64,
        "cross-validation complete"
    );
    Ok(accuracies)
}

/// The `fold`-th of `folds` contiguous chunks of `permutation`. The first
/// `len % folds` chunks are one element longer.
fn fold_chunk(permutation: &[usize], folds: usize, fold: usize) -> &[usize] {
    let base = permutation.len() / folds;
    let extra = permutation.len() % folds;
    let start = fold * base + fold.min(extra);
    let len = base + usize::from(fold < extra);
    &permutation[start..start + len]
}

/// An object's attribute row as network input values (1.0 / 0.0).
fn object_input(context: &Context, obj: usize, input_len: usize) -> Result<Vec<f64>> {
    if context.attribute_count() != input_len {
        return Err(NetworkError::SizeMismatch {
            expected: input_len,
            actual: context.attribute_count(),
        });
    }
    let row = context.intent(obj);
    Ok((0..input_len)
        .map(|attr| if row.test(attr) { 1.0 } else { 0.0 })
        .collect())
}

/// One-hot target in tanh range: `+1` for the class, `−1` elsewhere.
fn one_hot(class: usize, classes: usize) -> Vec<f64> {
    (0..classes)
        .map(|c| if c == class { 1.0 } else { -1.0 })
        .collect()
}

fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map_or(0, |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_context() -> (Context, Vec<usize>) {
        // Class 0 objects carry attribute 0, class 1 objects attribute 1.
        let rows = vec![
            vec![true, false, true],
            vec![true, false, false],
            vec![true, true, true],
            vec![false, true, false],
            vec![false, true, true],
            vec![false, true, false],
        ];
        (Context::from_rows(rows).unwrap(), vec![0, 0, 0, 1, 1, 1])
    }

    #[test]
    fn test_fold_chunks_partition_the_permutation() {
        let permutation: Vec<usize> = (0..7).collect();
        let mut seen = Vec::new();
        for fold in 0..3 {
            seen.extend_from_slice(fold_chunk(&permutation, 3, fold));
        }
        assert_eq!(seen, permutation);
    }

    #[test]
    fn test_one_hot_and_argmax() {
        assert_eq!(one_hot(1, 3), vec![-1.0, 1.0, -1.0]);
        assert_eq!(argmax(&[0.2, -0.5, 0.9]), 2);
    }

    #[test]
    fn test_cross_validation_is_reproducible() {
        let (context, targets) = separable_context();
        let structure = NetworkStructure::fully_connected(&[3, 4, 2]).unwrap();
        let options = TrainOptions {
            folds: 3,
            epochs: 50,
            ..TrainOptions::default()
        };
        let a = cross_validation_accuracies(&structure, &context, &targets, &options).unwrap();
        let b = cross_validation_accuracies(&structure, &context, &targets, &options).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert!(a.iter().all(|&acc| (0.0..=1.0).contains(&acc)));
    }

    #[test]
    fn test_bad_fold_count_rejected() {
        let (context, targets) = separable_context();
        let structure = NetworkStructure::fully_connected(&[3, 2]).unwrap();
        let options = TrainOptions {
            folds: 1,
            ..TrainOptions::default()
        };
        let err = cross_validation_accuracies(&structure, &context, &targets, &options).unwrap_err();
        assert!(matches!(err, NetworkError::BadFoldCount { .. }));
    }

    #[test]
    fn test_target_length_mismatch_rejected() {
        let (context, _) = separable_context();
        let structure = NetworkStructure::fully_connected(&[3, 2]).unwrap();
        let err = cross_validation_accuracies(
            &structure,
            &context,
            &[0, 1],
            &TrainOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, NetworkError::SizeMismatch { .. }));
    }
}
