// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Context File Loading
//!
//! Line-oriented dataset format:
//!
//! ```text
//! <objects> <attributes>
//! <cell> ... <cell> <target-class>     (one line per object)
//! ```
//!
//! Cells are `0`/`1`, separated by whitespace or commas (both historical
//! separators are accepted); each row carries a trailing integer target
//! class. Any malformed line aborts the load with an [`FcaError`] naming
//! the line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::context::Context;
use crate::error::{FcaError, Result};

/// Load a context and its per-object target classes from a reader.
pub fn load_context<R: BufRead>(reader: R) -> Result<(Context, Vec<usize>)> {
    let mut lines = reader.lines().enumerate();

    let (declared_objects, attributes) = loop {
        let Some((idx, line)) = lines.next() else {
            return Err(FcaError::BadHeader {
                line: 1,
                found: String::new(),
            });
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let parse = |field: Option<&str>| field.and_then(|f| f.parse::<usize>().ok());
        match (parse(fields.next()), parse(fields.next()), fields.next()) {
            (Some(objects), Some(attributes), None) => break (objects, attributes),
            _ => {
                return Err(FcaError::BadHeader {
                    line: idx + 1,
                    found: line,
                })
            }
        }
    };

    let mut rows = Vec::with_capacity(declared_objects);
    let mut targets = Vec::with_capacity(declared_objects);
    for (idx, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let fields: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() < attributes + 1 {
            if fields.len() == attributes {
                return Err(FcaError::MissingTarget { line: line_no });
            }
            return Err(FcaError::RaggedRow {
                line: line_no,
                expected: attributes,
                found: fields.len().saturating_sub(1),
            });
        }
        if fields.len() > attributes + 1 {
            return Err(FcaError::RaggedRow {
                line: line_no,
                expected: attributes,
                found: fields.len() - 1,
            });
        }

        let mut row = Vec::with_capacity(attributes);
        for &cell in &fields[..attributes] {
            match cell {
                "0" => row.push(false),
                "1" => row.push(true),
                other => {
                    return Err(FcaError::BadCell {
                        line: line_no,
                        value: other.to_string(),
                    })
                }
            }
        }
        let target = fields[attributes]
            .parse::<usize>()
            .map_err(|_| FcaError::BadTarget {
                line: line_no,
                value: fields[attributes].to_string(),
            })?;
        rows.push(row);
        targets.push(target);
    }

    if rows.len() != declared_objects {
        return Err(FcaError::RowCountMismatch {
            declared: declared_objects,
            given: rows.len(),
        });
    }

    debug!(
        objects = declared_objects,
        attributes,
        "context loaded"
    );
    let context = Context::from_rows(rows)?;
    Ok((context, targets))
}

/// Load a context file from disk.
pub fn load_context_file<P: AsRef<Path>>(path: P) -> Result<(Context, Vec<usize>)> {
    let file = File::open(path)?;
    load_context(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "4 4\n\
                          1 0 0 1 0\n\
                          1 0 1 0 0\n\
                          0 1 1 0 1\n\
                          0 1 1 1 1\n";

    #[test]
    fn test_load_whitespace_separated() {
        let (ctx, targets) = load_context(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(ctx.object_count(), 4);
        assert_eq!(ctx.attribute_count(), 4);
        assert_eq!(targets, vec![0, 0, 1, 1]);
        assert!(ctx.intent(0).test(0));
        assert!(!ctx.intent(0).test(1));
    }

    #[test]
    fn test_load_comma_separated() {
        let data = "2 3\n1,0,1,0\n0,1,1,1\n";
        let (ctx, targets) = load_context(Cursor::new(data)).unwrap();
        assert_eq!(ctx.attribute_count(), 3);
        assert_eq!(targets, vec![0, 1]);
    }

    #[test]
    fn test_bad_header() {
        let err = load_context(Cursor::new("four 4\n")).unwrap_err();
        assert!(matches!(err, FcaError::BadHeader { line: 1, .. }));
    }

    #[test]
    fn test_non_boolean_cell() {
        let err = load_context(Cursor::new("1 2\n1 2 0\n")).unwrap_err();
        assert!(matches!(err, FcaError::BadCell { line: 2, .. }));
    }

    #[test]
    fn test_missing_target() {
        let err = load_context(Cursor::new("1 2\n1 0\n")).unwrap_err();
        assert!(matches!(err, FcaError::MissingTarget { line: 2 }));
    }

    #[test]
    fn test_ragged_row() {
        let err = load_context(Cursor::new("1 3\n1 0 1 1 0\n")).unwrap_err();
        assert!(matches!(
            err,
            FcaError::RaggedRow {
                line: 2,
                expected: 3,
                found: 4
            }
        ));
    }

    #[test]
    fn test_row_count_mismatch() {
        let err = load_context(Cursor::new("3 2\n1 0 0\n0 1 1\n")).unwrap_err();
        assert!(matches!(
            err,
            FcaError::RowCountMismatch {
                declared: 3,
                given: 2
            }
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toy.ctx");
        std::fs::write(&path, SAMPLE).unwrap();
        let (ctx, targets) = load_context_file(&path).unwrap();
        assert_eq!(ctx.object_count(), 4);
        assert_eq!(targets.len(), 4);
    }
}
