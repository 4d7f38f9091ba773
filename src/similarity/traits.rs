// Document comparer trait: the seam between the similarity core and its
// callers (CLI, HTTP handlers).
//
// The HTTP layer holds an `Arc<dyn DocumentComparer>` so a different scoring
// approach can be plugged in without touching request handling.

use super::engine::Comparison;
use crate::error::SimilarityError;

/// Compare two raw text documents.
pub trait DocumentComparer: Send + Sync {
    fn compare(&self, text_a: &str, text_b: &str) -> Result<Comparison, SimilarityError>;
}
