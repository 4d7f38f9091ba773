// Similarity core: tokenizer, TF-IDF vectorizer, cosine scorer and the
// comparison that chains them.

pub mod cosine;
pub mod engine;
pub mod tokenizer;
pub mod traits;
pub mod vectorizer;

pub use engine::{compare, Comparison, Diagnostics, TfIdfCosine};
pub use traits::DocumentComparer;
