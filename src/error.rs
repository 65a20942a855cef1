//! Error types for relation operations

use thiserror::Error;

use crate::matrix::MAX_N;

/// Errors that can occur when building, mutating or generating relations.
#[derive(Debug, Error)]
pub enum RelationError {
    /// A set size outside `1..=MAX_N` was requested or supplied.
    #[error("set size must be between 1 and {MAX_N}, got {0}")]
    InvalidSize(usize),

    /// A relation entry was not 0 or 1, or a row was malformed or incomplete.
    #[error("invalid relation input: {0}")]
    InvalidInput(String),

    /// An access used an index outside `0..n`.
    #[error("index ({i}, {j}) out of range for a relation on {n} elements")]
    IndexOutOfRange {
        /// Row index used
        i: usize,
        /// Column index used
        j: usize,
        /// Size of the relation's element set
        n: usize,
    },

    /// A specific-property generation type is not recognized.
    #[error("unknown relation type: {0}")]
    UnknownRelationType(String),

    /// An output path could not be opened or written.
    #[error("failed to create or write test case file: {0}")]
    FileCreation(#[from] std::io::Error),
}
