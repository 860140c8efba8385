// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Interestingness Measures
//!
//! Pluggable quality measures over concepts. Each has the shape
//! `(concept, context, attrs_so_far) -> f64` so it can be thresholded into
//! a keep-predicate for the enumeration engine via [`min_measure`].
//!
//! `support` and the coverage measures are monotone non-increasing as the
//! intent grows, which makes them safe pruning predicates.

use crate::concept::Concept;
use crate::context::Context;

/// Measure signature consumed by [`min_measure`].
pub type Measure = fn(&Concept, &Context, usize) -> f64;

/// Fraction of all objects in the concept's extent.
pub fn support(concept: &Concept, _context: &Context, _attrs_so_far: usize) -> f64 {
    concept.extent_size() as f64 / concept.extent().len() as f64
}

/// Coverage of the object×attribute table by the concept's rectangle:
/// `|extent| · |intent| / (objects · attributes)`.
pub fn coverage(concept: &Concept, context: &Context, _attrs_so_far: usize) -> f64 {
    let cells = context.object_count() * context.attribute_count();
    if cells == 0 {
        return 0.0;
    }
    (concept.extent_size() * concept.intent_size()) as f64 / cells as f64
}

/// Fraction of the table's incidences covered by the concept's rectangle:
/// `|extent| · |intent| / |incidences|`.
pub fn incidence_coverage(concept: &Concept, context: &Context, _attrs_so_far: usize) -> f64 {
    let incidences = context.incidences();
    if incidences == 0 {
        return 0.0;
    }
    (concept.extent_size() * concept.intent_size()) as f64 / incidences as f64
}

/// Fraction of the concept's extent belonging to its majority target class.
/// The empty extent is perfectly pure.
pub fn purity(concept: &Concept, targets: &[usize]) -> f64 {
    let size = concept.extent_size();
    if size == 0 {
        return 1.0;
    }
    let classes = targets.iter().max().map_or(0, |&c| c + 1);
    let mut histogram = vec![0usize; classes];
    for obj in concept.extent().iter_ones() {
        histogram[targets[obj]] += 1;
    }
    let majority = histogram.into_iter().max().unwrap_or(0);
    majority as f64 / size as f64
}

/// Threshold a measure into a keep-predicate for the enumeration engine.
pub fn min_measure<'a>(
    measure: Measure,
    context: &'a Context,
    threshold: f64,
) -> impl FnMut(&Concept, usize) -> bool + 'a {
    move |concept, attrs_so_far| measure(concept, context, attrs_so_far) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitset::BitSet;
    use crate::enumerate::enumerate_concepts;

    fn sample() -> Context {
        Context::from_rows(vec![
            vec![true, false, false, true],
            vec![true, false, true, false],
            vec![false, true, true, false],
            vec![false, true, true, true],
        ])
        .unwrap()
    }

    #[test]
    fn test_support_is_extent_fraction() {
        let ctx = sample();
        let concept = Concept::new(
            BitSet::from_indices(4, &[2, 3]),
            BitSet::from_indices(4, &[1, 2]),
        );
        assert_eq!(support(&concept, &ctx, 2), 0.5);
    }

    #[test]
    fn test_coverage_measures() {
        let ctx = sample();
        let concept = Concept::new(
            BitSet::from_indices(4, &[2, 3]),
            BitSet::from_indices(4, &[1, 2]),
        );
        assert_eq!(coverage(&concept, &ctx, 2), 4.0 / 16.0);
        assert_eq!(incidence_coverage(&concept, &ctx, 2), 4.0 / 9.0);
    }

    #[test]
    fn test_purity_majority_fraction() {
        let targets = [0, 0, 1, 1];
        let pure = Concept::new(BitSet::from_indices(4, &[2, 3]), BitSet::new(4));
        assert_eq!(purity(&pure, &targets), 1.0);
        let mixed = Concept::new(BitSet::from_indices(4, &[0, 1, 2]), BitSet::new(4));
        assert!((purity(&mixed, &targets) - 2.0 / 3.0).abs() < 1e-12);
        let empty = Concept::new(BitSet::new(4), BitSet::all_set(4));
        assert_eq!(purity(&empty, &targets), 1.0);
    }

    #[test]
    fn test_min_support_predicate_prunes() {
        let ctx = sample();
        let concepts = enumerate_concepts(&ctx, min_measure(support, &ctx, 0.5), None);
        // Exactly the concepts with at least 2 of the 4 objects.
        assert_eq!(concepts.len(), 5);
        assert!(concepts.iter().all(|c| c.extent_size() >= 2));
    }
}
