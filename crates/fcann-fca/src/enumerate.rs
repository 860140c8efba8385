// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Canonical Concept Enumeration
//!
//! Incremental projection-closure enumeration of all formal concepts of a
//! context, without duplicates.
//!
//! ## Algorithm
//!
//! The candidate list is refined across `m` passes, one per attribute, in
//! increasing attribute order. Pass `-1` yields the single trivial candidate
//! (all objects, empty intent). For attribute `i`, every live candidate
//! `(A, B)` spawns up to two successors:
//!
//! 1. **Unchanged**: `(A, B)` survives as-is only if some object in `A`
//!    lacks attribute `i` — otherwise it is redundant with the refinement.
//! 2. **Refined**: `(A ∩ extent(i), B ∪ {i})`, kept as a candidate but
//!    marked invalid unless it passes the canonical-generator test: the
//!    closure of the refined extent must agree with the refined intent on
//!    the attribute prefix `0..=i`. This rejects re-generation of the same
//!    concept via a different attribute order.
//!
//! After each pass, candidates that failed canonicity are discarded, as are
//! candidates rejected by the caller's keep-predicate. The predicate is
//! consulted monotonically as attributes are folded in, so predicates that
//! only become "more false" as the intent grows (a minimum-extent floor,
//! for instance) prune safely without losing final concepts. The engine
//! performs no monotonicity proof; that is the predicate's contract.

use tracing::trace;

use crate::bitset::BitSet;
use crate::concept::Concept;
use crate::context::Context;

/// Keep-predicate consulted after every attribute pass. Arguments: the
/// candidate concept and the number of attributes folded in so far.
///
/// The default, keep-everything predicate is [`keep_all`].
pub fn keep_all(_concept: &Concept, _attrs_so_far: usize) -> bool {
    true
}

#[derive(Clone)]
struct Candidate {
    concept: Concept,
    valid: bool,
}

/// Enumerate the formal concepts of `context` that satisfy `keep`.
///
/// `object_mask`, when given, restricts the initial extent to a subset of
/// objects: the result is the concept set of the induced subcontext (used
/// to enumerate on a training fold while holding other objects out).
pub fn enumerate_concepts<F>(
    context: &Context,
    mut keep: F,
    object_mask: Option<&BitSet>,
) -> Vec<Concept>
where
    F: FnMut(&Concept, usize) -> bool,
{
    let mut extent = BitSet::all_set(context.object_count());
    if let Some(mask) = object_mask {
        extent &= mask;
    }
    let intent = BitSet::new(context.attribute_count());
    let mut candidates = vec![Candidate {
        concept: Concept::new(extent, intent),
        valid: true,
    }];

    for attr in 0..context.attribute_count() {
        // Candidates appended during this pass belong to the next one.
        let alive = candidates.len();
        for k in 0..alive {
            // Unchanged branch: kept only when some object in the extent
            // lacks this attribute.
            let mut lacking = !context.extent(attr);
            lacking &= candidates[k].concept.extent();
            if lacking.any() {
                let unchanged = candidates[k].clone();
                candidates.push(unchanged);
            }

            // Refined branch, in place: extent ∩ column, intent ∪ {attr}.
            let candidate = &mut candidates[k];
            candidate.concept.extent &= context.extent(attr);
            candidate.concept.intent.set(attr);
            let closure = context.drvt_attr(&candidate.concept.extent);
            if !candidate.concept.intent.is_prefix_equal(&closure, attr) {
                // Duplicate generation path; the canonical generator of
                // this concept appears under a different attribute order.
                candidate.valid = false;
            }
        }

        candidates.retain(|c| c.valid && keep(&c.concept, attr + 1));
        trace!(
            pass = attr,
            candidates = candidates.len(),
            "projection pass complete"
        );
    }

    candidates.into_iter().map(|c| c.concept).collect()
}
