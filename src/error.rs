// Error types for the similarity core.
//
// Only one condition is surfaced to callers: a document that tokenizes to
// nothing. Zero norms and non-finite intermediates are absorbed into a score
// of 0.0 by the cosine scorer and never show up here.

use std::fmt;

use thiserror::Error;

use crate::similarity::engine::Diagnostics;

/// Which side of a comparison a condition applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptySide {
    First,
    Second,
    Both,
}

impl EmptySide {
    /// Classify from the token counts of the two documents.
    /// Returns None when neither side is empty.
    pub fn from_counts(tokens_a: usize, tokens_b: usize) -> Option<Self> {
        match (tokens_a == 0, tokens_b == 0) {
            (true, true) => Some(EmptySide::Both),
            (true, false) => Some(EmptySide::First),
            (false, true) => Some(EmptySide::Second),
            (false, false) => None,
        }
    }
}

impl fmt::Display for EmptySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptySide::First => write!(f, "the first document is"),
            EmptySide::Second => write!(f, "the second document is"),
            EmptySide::Both => write!(f, "both documents are"),
        }
    }
}

/// Failure returned by a comparison.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("{side} empty or contains no valid words")]
    EmptyDocument {
        side: EmptySide,
        diagnostics: Diagnostics,
    },
}

impl SimilarityError {
    /// Short machine-readable code for transport layers.
    pub fn code(&self) -> &'static str {
        match self {
            SimilarityError::EmptyDocument { .. } => "empty_document",
        }
    }
}
