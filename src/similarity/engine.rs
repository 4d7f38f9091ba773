// Comparison orchestration: tokenize → vectorize → score.
//
// Every call builds its own vocabulary and vectors and drops them before
// returning, so one engine can serve any number of concurrent comparisons.

use serde::Serialize;
use tracing::debug;

use super::cosine;
use super::tokenizer::tokenize;
use super::traits::DocumentComparer;
use super::vectorizer::TermCounts;
use crate::error::{EmptySide, SimilarityError};

/// Tokenization figures reported with every comparison outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Token count of the first document
    pub tokens_a: usize,
    /// Token count of the second document
    pub tokens_b: usize,
    /// Distinct terms across both documents
    pub vocabulary: usize,
}

/// Result of comparing two documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// TF-IDF cosine similarity in [0, 1]
    pub similarity: f64,
    /// Human-readable summary embedding the score
    pub message: String,
    pub diagnostics: Diagnostics,
}

impl Comparison {
    fn new(similarity: f64, diagnostics: Diagnostics) -> Self {
        Self {
            similarity,
            message: summary_message(similarity),
            diagnostics,
        }
    }
}

/// "Documents similarity score: 0.1234"
pub fn summary_message(similarity: f64) -> String {
    format!("Documents similarity score: {similarity:.4}")
}

/// The default engine: TF-IDF weighting over the document pair, scored by
/// cosine similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfCosine;

impl DocumentComparer for TfIdfCosine {
    fn compare(&self, text_a: &str, text_b: &str) -> Result<Comparison, SimilarityError> {
        compare(text_a, text_b)
    }
}

/// Compare two raw documents.
///
/// Fails with `EmptyDocument` if either text has no word tokens. Documents
/// with the same bag of words score exactly 1.0: every term is shared, so
/// IDF zeroes both vectors and the cosine is undefined, but the two
/// directions are identical.
pub fn compare(text_a: &str, text_b: &str) -> Result<Comparison, SimilarityError> {
    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);

    if let Some(side) = EmptySide::from_counts(tokens_a.len(), tokens_b.len()) {
        return Err(SimilarityError::EmptyDocument {
            side,
            diagnostics: Diagnostics {
                tokens_a: tokens_a.len(),
                tokens_b: tokens_b.len(),
                vocabulary: 0,
            },
        });
    }

    let counts = TermCounts::build(&tokens_a, &tokens_b);
    let diagnostics = Diagnostics {
        tokens_a: tokens_a.len(),
        tokens_b: tokens_b.len(),
        vocabulary: counts.vocabulary_len(),
    };

    let similarity = if counts.is_mirrored() {
        1.0
    } else {
        let weights = counts.weigh();
        cosine::score(&weights.a, &weights.b)
    };

    debug!(
        tokens_a = diagnostics.tokens_a,
        tokens_b = diagnostics.tokens_b,
        vocabulary = diagnostics.vocabulary,
        similarity,
        "Compared documents"
    );

    Ok(Comparison::new(similarity, diagnostics))
}
