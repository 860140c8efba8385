// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Fixed-Width Bit Vectors
//!
//! `BitSet` is the workhorse of the FCA core: extents are bit vectors over
//! object indices, intents are bit vectors over attribute indices. The width
//! is fixed at construction; every boolean operation expects operands of
//! equal width.
//!
//! Bits are packed into `u64` words, least-significant bit first. Unused
//! high bits of the last word are kept at zero so that word-wise comparisons
//! (`==`, subset, prefix equality) never see stale tail bits.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

const WORD_BITS: usize = 64;

/// Fixed-width bit vector over `u64` words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    nbits: usize,
    words: Vec<u64>,
}

impl BitSet {
    /// All-zero bit set of the given width.
    pub fn new(nbits: usize) -> Self {
        Self {
            nbits,
            words: vec![0; nbits.div_ceil(WORD_BITS)],
        }
    }

    /// All-one bit set of the given width.
    pub fn all_set(nbits: usize) -> Self {
        let mut set = Self::new(nbits);
        for word in &mut set.words {
            *word = u64::MAX;
        }
        set.mask_tail();
        set
    }

    /// Bit set with exactly the listed bits set. Convenient in tests.
    pub fn from_indices(nbits: usize, indices: &[usize]) -> Self {
        let mut set = Self::new(nbits);
        for &i in indices {
            set.set(i);
        }
        set
    }

    /// Width in bits.
    pub fn len(&self) -> usize {
        self.nbits
    }

    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    pub fn set(&mut self, bit: usize) {
        debug_assert!(bit < self.nbits);
        self.words[bit / WORD_BITS] |= 1u64 << (bit % WORD_BITS);
    }

    pub fn clear(&mut self, bit: usize) {
        debug_assert!(bit < self.nbits);
        self.words[bit / WORD_BITS] &= !(1u64 << (bit % WORD_BITS));
    }

    pub fn test(&self, bit: usize) -> bool {
        debug_assert!(bit < self.nbits);
        self.words[bit / WORD_BITS] & (1u64 << (bit % WORD_BITS)) != 0
    }

    /// Number of set bits.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True if any bit is set.
    pub fn any(&self) -> bool {
        self.words.iter().any(|&w| w != 0)
    }

    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Complement in place.
    pub fn flip(&mut self) {
        for word in &mut self.words {
            *word = !*word;
        }
        self.mask_tail();
    }

    /// True if every bit set here is also set in `other`.
    pub fn is_subset_of(&self, other: &BitSet) -> bool {
        debug_assert_eq!(self.nbits, other.nbits);
        self.words
            .iter()
            .zip(&other.words)
            .all(|(&a, &b)| a & !b == 0)
    }

    /// True if `self` and `other` agree on bits `0..=upto`.
    ///
    /// This is the canonical-generator test helper: intents are compared
    /// only on the attribute prefix folded in so far.
    pub fn is_prefix_equal(&self, other: &BitSet, upto: usize) -> bool {
        debug_assert_eq!(self.nbits, other.nbits);
        debug_assert!(upto < self.nbits);
        let prefix = upto + 1;
        let full_words = prefix / WORD_BITS;
        if self.words[..full_words] != other.words[..full_words] {
            return false;
        }
        let rem = prefix % WORD_BITS;
        if rem == 0 {
            return true;
        }
        let mask = (1u64 << rem) - 1;
        (self.words[full_words] ^ other.words[full_words]) & mask == 0
    }

    /// Iterator over the indices of set bits, ascending.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let mut w = word;
            std::iter::from_fn(move || {
                if w == 0 {
                    return None;
                }
                let bit = w.trailing_zeros() as usize;
                w &= w - 1;
                Some(wi * WORD_BITS + bit)
            })
        })
    }

    fn mask_tail(&mut self) {
        let rem = self.nbits % WORD_BITS;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }
}

impl BitAndAssign<&BitSet> for BitSet {
    fn bitand_assign(&mut self, rhs: &BitSet) {
        debug_assert_eq!(self.nbits, rhs.nbits);
        for (a, b) in self.words.iter_mut().zip(&rhs.words) {
            *a &= b;
        }
    }
}

impl BitOrAssign<&BitSet> for BitSet {
    fn bitor_assign(&mut self, rhs: &BitSet) {
        debug_assert_eq!(self.nbits, rhs.nbits);
        for (a, b) in self.words.iter_mut().zip(&rhs.words) {
            *a |= b;
        }
    }
}

impl BitAnd for &BitSet {
    type Output = BitSet;

    fn bitand(self, rhs: &BitSet) -> BitSet {
        let mut out = self.clone();
        out &= rhs;
        out
    }
}

impl BitOr for &BitSet {
    type Output = BitSet;

    fn bitor(self, rhs: &BitSet) -> BitSet {
        let mut out = self.clone();
        out |= rhs;
        out
    }
}

impl Not for &BitSet {
    type Output = BitSet;

    fn not(self) -> BitSet {
        let mut out = self.clone();
        out.flip();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_test_count() {
        let mut set = BitSet::new(130);
        set.set(0);
        set.set(64);
        set.set(129);
        assert!(set.test(0));
        assert!(set.test(64));
        assert!(set.test(129));
        assert!(!set.test(1));
        assert_eq!(set.count(), 3);
        assert_eq!(set.iter_ones().collect::<Vec<_>>(), vec![0, 64, 129]);

        set.clear(64);
        assert!(!set.test(64));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_flip_masks_tail_bits() {
        let mut set = BitSet::new(70);
        set.flip();
        // Complement of empty is full: exactly the declared width, no tail junk.
        assert_eq!(set.count(), 70);
        assert_eq!(set, BitSet::all_set(70));
        set.flip();
        assert!(set.none());
    }

    #[test]
    fn test_subset() {
        let small = BitSet::from_indices(100, &[3, 65]);
        let big = BitSet::from_indices(100, &[3, 65, 99]);
        assert!(small.is_subset_of(&big));
        assert!(!big.is_subset_of(&small));
        assert!(small.is_subset_of(&small));
        assert!(BitSet::new(100).is_subset_of(&small));
    }

    #[test]
    fn test_prefix_equality() {
        let a = BitSet::from_indices(80, &[1, 5, 70]);
        let b = BitSet::from_indices(80, &[1, 5, 79]);
        // Agree on everything below bit 70.
        assert!(a.is_prefix_equal(&b, 69));
        // Bit 70 differs.
        assert!(!a.is_prefix_equal(&b, 70));
        // Word-boundary prefix.
        assert!(a.is_prefix_equal(&b, 63));
    }

    #[test]
    fn test_boolean_operators() {
        let a = BitSet::from_indices(10, &[0, 1, 2]);
        let b = BitSet::from_indices(10, &[1, 2, 3]);
        assert_eq!(&a & &b, BitSet::from_indices(10, &[1, 2]));
        assert_eq!(&a | &b, BitSet::from_indices(10, &[0, 1, 2, 3]));
        assert_eq!(!&BitSet::all_set(10), BitSet::new(10));
    }
}
