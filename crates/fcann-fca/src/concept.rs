// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Formal concepts: Galois-closed (extent, intent) pairs.

use crate::bitset::BitSet;
use crate::context::Context;

/// A formal concept of some context: a set of objects (extent) together
/// with the set of attributes (intent) they all share, each the exact
/// derivative of the other.
///
/// The enumeration engine only emits closed pairs; a `Concept` is treated
/// as immutable once it leaves the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    pub(crate) extent: BitSet,
    pub(crate) intent: BitSet,
}

impl Concept {
    pub fn new(extent: BitSet, intent: BitSet) -> Self {
        Self { extent, intent }
    }

    pub fn extent(&self) -> &BitSet {
        &self.extent
    }

    pub fn intent(&self) -> &BitSet {
        &self.intent
    }

    pub fn extent_size(&self) -> usize {
        self.extent.count()
    }

    pub fn intent_size(&self) -> usize {
        self.intent.count()
    }

    /// Closure invariant check: extent and intent must be each other's
    /// derivative in `context`. Used by tests and debug assertions.
    pub fn is_closed(&self, context: &Context) -> bool {
        context.drvt_attr(&self.extent) == self.intent
            && context.drvt_obj(&self.intent) == self.extent
    }
}
