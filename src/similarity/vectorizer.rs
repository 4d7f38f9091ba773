// TF-IDF vectorization over a two-document corpus.
//
// Formula, fixed for reproducibility:
//
//   TF(t, d)  = raw count of t in d (no length normalization)
//   DF(t)     = number of corpus documents containing t, 1 or 2
//   IDF(t)    = ln(CORPUS_SIZE / DF(t))
//   W(t, d)   = TF(t, d) * IDF(t)
//
// With only two documents, any term present in both gets IDF = ln(1) = 0.
// Shared vocabulary never contributes weight; only terms unique to one side
// do. Generalizing to more documents means revisiting this formula, not just
// the constant.

use indexmap::IndexMap;

/// Number of documents in every corpus this module builds.
pub const CORPUS_SIZE: usize = 2;

/// Per-term occurrence counts for a document pair, in vocabulary order.
///
/// The vocabulary is the union of both token sequences, ordered by first
/// appearance when scanning the first document and then the second.
#[derive(Debug, Clone)]
pub struct TermCounts<'a> {
    counts: IndexMap<&'a str, [u32; CORPUS_SIZE]>,
}

impl<'a> TermCounts<'a> {
    pub fn build(tokens_a: &'a [String], tokens_b: &'a [String]) -> Self {
        let mut counts: IndexMap<&'a str, [u32; CORPUS_SIZE]> = IndexMap::new();
        for (doc, tokens) in [tokens_a, tokens_b].into_iter().enumerate() {
            for token in tokens {
                counts.entry(token.as_str()).or_insert([0; CORPUS_SIZE])[doc] += 1;
            }
        }
        Self { counts }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.counts.len()
    }

    /// Vocabulary terms in index order.
    pub fn terms(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.counts.keys().copied()
    }

    /// True when both documents have exactly the same bag of words.
    pub fn is_mirrored(&self) -> bool {
        self.counts.values().all(|c| c[0] == c[1])
    }

    /// Compute the TF-IDF weight vectors for both documents.
    pub fn weigh(&self) -> TermWeights {
        let len = self.counts.len();
        let mut vocabulary = Vec::with_capacity(len);
        let mut a = Vec::with_capacity(len);
        let mut b = Vec::with_capacity(len);

        for (term, tf) in &self.counts {
            let df = tf.iter().filter(|&&n| n > 0).count();
            let idf = inverse_document_frequency(df);
            vocabulary.push((*term).to_string());
            a.push(tf[0] as f64 * idf);
            b.push(tf[1] as f64 * idf);
        }

        TermWeights { vocabulary, a, b }
    }
}

/// TF-IDF weights of a document pair over one shared index space.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeights {
    pub vocabulary: Vec<String>,
    /// Weights of the first document, indexed like `vocabulary`
    pub a: Vec<f64>,
    /// Weights of the second document, indexed like `vocabulary`
    pub b: Vec<f64>,
}

/// ln(N / df) with N = `CORPUS_SIZE`.
///
/// Every vocabulary term occurs in at least one document, so `df` is 1 or 2.
pub fn inverse_document_frequency(df: usize) -> f64 {
    debug_assert!((1..=CORPUS_SIZE).contains(&df), "df out of range: {df}");
    (CORPUS_SIZE as f64 / df.max(1) as f64).ln()
}

/// Build the shared vocabulary and both weight vectors in one step.
pub fn vectorize(tokens_a: &[String], tokens_b: &[String]) -> TermWeights {
    TermCounts::build(tokens_a, tokens_b).weigh()
}
