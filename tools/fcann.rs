// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! FCANN command-line front end.
//!
//! Trains either a classic fully-connected MLP (`full`) or a
//! lattice-derived network (`min-supp` / `cv` / `cfc`, naming the measure
//! that prunes the concept enumeration) on a context file, and prints the
//! network size together with the mean cross-validation accuracy.

use std::process;

use serde_json::json;
use tracing::error;
use tracing_subscriber::EnvFilter;

use fcann::fca::{self, enumerate_concepts, min_measure, Context, Lattice, Measure};
use fcann::network::{cross_validation_accuracies, Hyperparameters, TrainOptions};
use fcann_config::{load_or_default, validate_config, FcannConfig};

/// Lattice-derived networks always start at level 2: level 0 is the top
/// concept and level 1 mirrors single attributes, which the input layer
/// already provides.
const MIN_LEVEL: usize = 2;

fn usage_and_exit(executable: &str) -> ! {
    eprintln!(
        "Usage:\n  {executable} [--json] <dataset> full <hidden-size>...\n  {executable} [--json] <dataset> <min-supp|cv|cfc> <threshold> <max-level>\n\n\
         Modes:\n  full      fully connected MLP with the given hidden layer sizes\n  min-supp  lattice network, concepts pruned by minimum support\n  cv        lattice network, concepts pruned by rectangle coverage\n  cfc       lattice network, concepts pruned by incidence coverage\n\n\
         Training hyperparameters come from fcann.toml (see fcann-config)."
    );
    process::exit(2);
}

fn main() {
    let config = match load_or_default().and_then(|config| {
        validate_config(&config)?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    let executable = std::env::args().next().unwrap_or_else(|| "fcann".into());
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = args.first().is_some_and(|a| a == "--json");
    if json_output {
        args.remove(0);
    }
    if args.len() < 2 {
        usage_and_exit(&executable);
    }

    let (context, targets) = match fca::load_context_file(&args[0]) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("cannot load dataset {}: {err}", args[0]);
            eprintln!("Cannot load dataset {}: {err}", args[0]);
            process::exit(1);
        }
    };

    let structure = match args[1].as_str() {
        "full" => {
            let mut layer_sizes = vec![context.attribute_count()];
            for arg in &args[2..] {
                match arg.parse::<usize>() {
                    Ok(size) => layer_sizes.push(size),
                    Err(_) => {
                        eprintln!("Expected a layer size, got '{arg}'");
                        process::exit(3);
                    }
                }
            }
            let classes = targets.iter().max().map_or(0, |&c| c + 1);
            layer_sizes.push(classes);
            fcann::network::NetworkStructure::fully_connected(&layer_sizes)
                .unwrap_or_else(|err| {
                    eprintln!("{err}");
                    process::exit(3);
                })
        }
        mode @ ("min-supp" | "min_supp" | "cv" | "cfc") => {
            if args.len() != 4 {
                eprintln!("Expected arguments: '{mode}' threshold max-level");
                process::exit(3);
            }
            let Ok(threshold) = args[2].parse::<f64>() else {
                eprintln!("Expected a threshold, got '{}'", args[2]);
                process::exit(3);
            };
            let Ok(max_level) = args[3].parse::<usize>() else {
                eprintln!("Expected a level, got '{}'", args[3]);
                process::exit(3);
            };

            let measure: Measure = match mode {
                "cv" => fca::coverage,
                "cfc" => fca::incidence_coverage,
                _ => fca::support,
            };
            lattice_structure(&context, &targets, measure, threshold, max_level)
        }
        _ => usage_and_exit(&executable),
    };

    let options = train_options(&config);
    let accuracies = match cross_validation_accuracies(&structure, &context, &targets, &options) {
        Ok(accuracies) => accuracies,
        Err(err) => {
            eprintln!("{err}");
            process::exit(3);
        }
    };
    let mean = accuracies.iter().sum::<f64>() / accuracies.len() as f64;

    if json_output {
        let summary = json!({
            "neurons": structure.len(),
            "folds": accuracies,
            "mean_accuracy": mean,
        });
        println!("{summary}");
    } else {
        println!("{} {}", structure.len(), 100.0 * mean);
    }
}

fn lattice_structure(
    context: &Context,
    targets: &[usize],
    measure: Measure,
    threshold: f64,
    max_level: usize,
) -> fcann::network::NetworkStructure {
    let concepts = enumerate_concepts(context, min_measure(measure, context, threshold), None);
    let lattice = Lattice::new(concepts);
    match fcann::network::from_lattice(&lattice, targets, MIN_LEVEL, max_level) {
        Ok(structure) => structure,
        Err(err) => {
            eprintln!("{err}");
            process::exit(4);
        }
    }
}

fn train_options(config: &FcannConfig) -> TrainOptions {
    TrainOptions {
        folds: config.training.folds,
        epochs: config.training.epochs,
        seed: config.training.seed,
        hyper: Hyperparameters {
            eta: config.training.eta,
            alpha: config.training.alpha,
            smoothing_window: config.training.smoothing_window,
        },
    }
}
