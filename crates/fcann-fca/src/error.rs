// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for FCA operations

/// Errors surfaced while building or loading a formal context.
///
/// All variants are malformed-input class: they abort the load and are
/// reported to the caller, never silently corrected.
#[derive(Debug, thiserror::Error)]
pub enum FcaError {
    #[error("failed to read context file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected header '<objects> <attributes>', got '{found}'")]
    BadHeader { line: usize, found: String },

    #[error("line {line}: expected {expected} attribute cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: cell '{value}' is not 0 or 1")]
    BadCell { line: usize, value: String },

    #[error("line {line}: missing target class after the attribute cells")]
    MissingTarget { line: usize },

    #[error("line {line}: '{value}' is not a valid target class")]
    BadTarget { line: usize, value: String },

    #[error("context has {given} rows but the header declared {declared}")]
    RowCountMismatch { declared: usize, given: usize },
}

/// Result type for FCA operations
pub type Result<T> = std::result::Result<T, FcaError>;
