//! Error handling types for the coordinate core
//!
//! Range violations are the caller's contract to avoid; the core surfaces them
//! without attempting recovery. "No word found" and "indeterminate indentation"
//! are expected outcomes and are represented by sentinels, not by these errors.

use thiserror::Error;

/// Error type for coordinate and snapshot operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Line index at or past the document's line count
    #[error("line {line} out of range (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },

    /// Document offset past the document's total length
    #[error("offset {offset} out of range (document has {total_length} characters)")]
    OffsetOutOfRange { offset: usize, total_length: usize },

    /// Character column past the addressed line's length
    #[error("character {character} out of range (line has {line_length} characters)")]
    CharOutOfRange {
        character: usize,
        line_length: usize,
    },

    /// Tab width must be a positive integer
    #[error("invalid tab width: {0}")]
    InvalidTabWidth(usize),
}

/// Result type for coordinate and snapshot operations
pub type CoreResult<T> = Result<T, CoreError>;
