// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Formal Contexts
//!
//! A `Context` is an object×attribute boolean incidence table. It is stored
//! twice, bit-packed both ways: one column `BitSet` (over objects) per
//! attribute for fast derivative computation during enumeration, and one row
//! `BitSet` (over attributes) per object for inference-time lookups.
//!
//! The two derivative operators are the Galois connection underlying all of
//! formal concept analysis:
//! - `drvt_obj`:  attribute set → objects possessing *all* of it
//! - `drvt_attr`: object set → attributes possessed by *all* of it
//!
//! A context is immutable after construction.

use crate::bitset::BitSet;
use crate::error::{FcaError, Result};

/// Object×attribute incidence table.
#[derive(Debug, Clone)]
pub struct Context {
    objects: usize,
    attributes: usize,
    /// Per attribute: the set of objects carrying it.
    columns: Vec<BitSet>,
    /// Per object: the set of attributes it carries.
    rows: Vec<BitSet>,
}

impl Context {
    /// Build a context from boolean rows. Every row must have the same
    /// width; a ragged row aborts the load.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let objects = rows.len();
        let attributes = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != attributes {
                return Err(FcaError::RaggedRow {
                    line: i + 1,
                    expected: attributes,
                    found: row.len(),
                });
            }
        }

        let mut columns = vec![BitSet::new(objects); attributes];
        let mut row_sets = vec![BitSet::new(attributes); objects];
        for (obj, row) in rows.iter().enumerate() {
            for (attr, &cell) in row.iter().enumerate() {
                if cell {
                    columns[attr].set(obj);
                    row_sets[obj].set(attr);
                }
            }
        }

        Ok(Self {
            objects,
            attributes,
            columns,
            rows: row_sets,
        })
    }

    pub fn object_count(&self) -> usize {
        self.objects
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes
    }

    /// Objects carrying the given attribute (one incidence column).
    pub fn extent(&self, attr: usize) -> &BitSet {
        &self.columns[attr]
    }

    /// Attributes carried by the given object (one incidence row).
    pub fn intent(&self, obj: usize) -> &BitSet {
        &self.rows[obj]
    }

    /// Objects possessing every attribute in `attrs`.
    ///
    /// The empty attribute set derives to all objects.
    pub fn drvt_obj(&self, attrs: &BitSet) -> BitSet {
        let mut result = BitSet::all_set(self.objects);
        for attr in attrs.iter_ones() {
            result &= &self.columns[attr];
        }
        result
    }

    /// Attributes possessed by every object in `objs`.
    ///
    /// The empty object set derives to all attributes (vacuous truth).
    pub fn drvt_attr(&self, objs: &BitSet) -> BitSet {
        let mut result = BitSet::all_set(self.attributes);
        for obj in objs.iter_ones() {
            result &= &self.rows[obj];
        }
        result
    }

    /// Total number of incidences (set cells) in the table.
    pub fn incidences(&self) -> usize {
        self.columns.iter().map(BitSet::count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Context {
        // Objects 0..4, attributes a..d (the worked example used throughout
        // the crate's tests).
        Context::from_rows(vec![
            vec![true, false, false, true],
            vec![true, false, true, false],
            vec![false, true, true, false],
            vec![false, true, true, true],
        ])
        .unwrap()
    }

    #[test]
    fn test_extent_and_intent_lookups() {
        let ctx = sample();
        assert_eq!(ctx.object_count(), 4);
        assert_eq!(ctx.attribute_count(), 4);
        assert_eq!(ctx.extent(2), &BitSet::from_indices(4, &[1, 2, 3]));
        assert_eq!(ctx.intent(3), &BitSet::from_indices(4, &[1, 2, 3]));
        assert_eq!(ctx.incidences(), 9);
    }

    #[test]
    fn test_derivative_operators() {
        let ctx = sample();
        // {a, c} is carried by object 1 only.
        let attrs = BitSet::from_indices(4, &[0, 2]);
        assert_eq!(ctx.drvt_obj(&attrs), BitSet::from_indices(4, &[1]));
        // Objects {2, 3} share attributes {b, c}.
        let objs = BitSet::from_indices(4, &[2, 3]);
        assert_eq!(ctx.drvt_attr(&objs), BitSet::from_indices(4, &[1, 2]));
    }

    #[test]
    fn test_empty_sets_derive_to_full_sets() {
        let ctx = sample();
        assert_eq!(ctx.drvt_obj(&BitSet::new(4)), BitSet::all_set(4));
        assert_eq!(ctx.drvt_attr(&BitSet::new(4)), BitSet::all_set(4));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Context::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();
        assert!(matches!(
            err,
            FcaError::RaggedRow {
                line: 2,
                expected: 2,
                found: 1
            }
        ));
    }
}
