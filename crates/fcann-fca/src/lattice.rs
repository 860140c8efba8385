// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Concept Lattices
//!
//! Orders an unordered concept set into a transitively-reduced covering DAG
//! with a longest-path level assignment.
//!
//! ## Construction
//!
//! 1. Sort concepts by decreasing extent size. A superconcept's extent is a
//!    strict superset, so this places every superconcept before its
//!    subconcepts (necessary, not sufficient, for the partial order).
//! 2. For each concept, scan the previously placed concepts from nearest to
//!    farthest while maintaining the set of ancestors already reachable
//!    transitively. A subset relation to an unreached concept is an
//!    immediate cover; reached concepts only contribute their own covers to
//!    the ancestor set. Only direct covering edges survive.
//! 3. Level = 1 + max level of any cover (top concept = level 0): a
//!    longest-path-from-top labeling.
//! 4. Stable-sort by level, remap cover edges to the new indices and record
//!    `level_starts` prefix offsets (with an end sentinel).
//!
//! The construction is total over any finite duplicate-free concept set and
//! the result is read-only thereafter.

use ahash::AHashSet;
use tracing::debug;

use crate::concept::Concept;

/// True if `lhs` is a subconcept of `rhs` (its extent is contained in
/// `rhs`'s). On the duplicate-free sets produced by the enumeration engine
/// this is a strict partial order between distinct concepts.
pub fn is_sub_concept(lhs: &Concept, rhs: &Concept) -> bool {
    lhs.extent().is_subset_of(rhs.extent())
}

/// A concept set arranged into its covering DAG, level-ordered.
#[derive(Debug, Clone)]
pub struct Lattice {
    concepts: Vec<Concept>,
    /// Per concept: indices of the immediate superconcepts covering it.
    /// Transitively reduced; every index is smaller than the owner's.
    connections: Vec<Vec<usize>>,
    /// `level_starts[k]` = first index at level `k`; the final entry is the
    /// one-past-the-end sentinel.
    level_starts: Vec<usize>,
}

impl Lattice {
    pub fn new(mut concepts: Vec<Concept>) -> Self {
        // Stable: equal extent sizes keep their enumeration order.
        concepts.sort_by(|lhs, rhs| rhs.extent_size().cmp(&lhs.extent_size()));

        let n = concepts.len();
        let mut connections: Vec<Vec<usize>> = vec![Vec::new(); n];
        for i in 1..n {
            let mut ancestors: AHashSet<usize> = AHashSet::new();
            for j in (0..i).rev() {
                if ancestors.contains(&j) {
                    // Already reachable; absorb its covers, add no edge.
                    ancestors.extend(connections[j].iter().copied());
                } else if is_sub_concept(&concepts[i], &concepts[j]) {
                    ancestors.extend(connections[j].iter().copied());
                    connections[i].push(j);
                }
            }
        }

        // Longest-path depth from the top. A concept no earlier concept
        // contains (possible when a predicate pruned the true top) sits at
        // level 0 alongside it.
        let mut level = vec![0usize; n];
        for i in 1..n {
            level[i] = connections[i]
                .iter()
                .map(|&j| level[j] + 1)
                .max()
                .unwrap_or(0);
        }

        // Level-order the concepts and remap every cover edge.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by_key(|&i| level[i]);
        let mut new_index = vec![0usize; n];
        for (new, &old) in order.iter().enumerate() {
            new_index[old] = new;
        }

        let mut sorted_concepts = Vec::with_capacity(n);
        let mut sorted_connections = Vec::with_capacity(n);
        let mut sorted_levels = Vec::with_capacity(n);
        for &old in &order {
            sorted_concepts.push(concepts[old].clone());
            let mut covers: Vec<usize> =
                connections[old].iter().map(|&j| new_index[j]).collect();
            covers.sort_unstable();
            sorted_connections.push(covers);
            sorted_levels.push(level[old]);
        }

        let level_count = sorted_levels.last().map_or(0, |&l| l + 1);
        let mut level_starts = Vec::with_capacity(level_count + 1);
        for k in 0..level_count {
            level_starts.push(sorted_levels.partition_point(|&l| l < k));
        }
        level_starts.push(n);

        debug!(
            concepts = n,
            levels = level_count,
            "lattice constructed"
        );

        Self {
            concepts: sorted_concepts,
            connections: sorted_connections,
            level_starts,
        }
    }

    /// Concepts in level order; the index of a concept in this slice is its
    /// lattice index.
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// Immediate covers per concept, indices into [`Self::concepts`].
    pub fn connections(&self) -> &[Vec<usize>] {
        &self.connections
    }

    /// Prefix offsets partitioning [`Self::concepts`] into levels; ends
    /// with the one-past-the-end sentinel.
    pub fn level_starts(&self) -> &[usize] {
        &self.level_starts
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Number of levels (longest chain from the top, plus one).
    pub fn level_count(&self) -> usize {
        self.level_starts.len().saturating_sub(1)
    }

    /// Level of the concept at `index`.
    pub fn level_of(&self, index: usize) -> usize {
        self.level_starts.partition_point(|&s| s <= index) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitset::BitSet;
    use crate::context::Context;
    use crate::enumerate::{enumerate_concepts, keep_all};

    fn sample_lattice() -> Lattice {
        let ctx = Context::from_rows(vec![
            vec![true, false, false, true],
            vec![true, false, true, false],
            vec![false, true, true, false],
            vec![false, true, true, true],
        ])
        .unwrap();
        Lattice::new(enumerate_concepts(&ctx, keep_all, None))
    }

    #[test]
    fn test_levels_partition_the_concepts() {
        let lattice = sample_lattice();
        assert_eq!(lattice.len(), 9);
        // Top; three atoms... levels: 1 + 3 + 3 + 1 + 1 concepts.
        assert_eq!(lattice.level_starts(), &[0, 1, 4, 7, 8, 9]);
        assert_eq!(lattice.level_count(), 5);
        assert_eq!(lattice.concepts()[0].extent(), &BitSet::all_set(4));
        assert_eq!(lattice.concepts()[8].extent(), &BitSet::new(4));
        assert_eq!(lattice.level_of(0), 0);
        assert_eq!(lattice.level_of(5), 2);
        assert_eq!(lattice.level_of(8), 4);
    }

    #[test]
    fn test_covers_point_to_strictly_lower_levels() {
        let lattice = sample_lattice();
        for (i, covers) in lattice.connections().iter().enumerate() {
            for &j in covers {
                assert!(j < i);
                assert!(lattice.level_of(j) < lattice.level_of(i));
                assert!(is_sub_concept(
                    &lattice.concepts()[i],
                    &lattice.concepts()[j]
                ));
            }
        }
    }

    #[test]
    fn test_covering_edges_are_transitively_reduced() {
        let lattice = sample_lattice();
        // No cover edge may be implied by composing two others: for covers
        // j of i, no other cover k of i may itself be below j.
        for (i, covers) in lattice.connections().iter().enumerate() {
            for &j in covers {
                for &k in covers {
                    if k == j {
                        continue;
                    }
                    assert!(
                        !is_sub_concept(&lattice.concepts()[k], &lattice.concepts()[j]),
                        "edge {i}->{j} is implied via {i}->{k}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_bottom_concept_covers_the_atoms_of_its_ideal() {
        let lattice = sample_lattice();
        let bottom = lattice.len() - 1;
        // The empty-extent bottom is a subconcept of everything, but its
        // covering edges must reach only the minimal proper superconcepts.
        let covers = &lattice.connections()[bottom];
        let cover_extents: Vec<usize> = covers
            .iter()
            .map(|&j| lattice.concepts()[j].extent_size())
            .collect();
        assert_eq!(covers.len(), 3);
        assert!(cover_extents.iter().all(|&s| s == 1));
    }
}
