// Cosine similarity over dense weight vectors sharing one index space.
//
// cos(a, b) = Σ(a_i * b_i) / (||a|| * ||b||)
//
// A zero norm on either side scores 0.0 instead of dividing by zero, and any
// non-finite result is coerced to 0.0. Finite results are clamped to [0, 1]
// so float rounding on parallel vectors cannot report 1.0000000000000002.

/// Score two equal-length weight vectors.
pub fn score(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "weight vectors must share an index space");

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (&x, &y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    if similarity.is_finite() {
        similarity.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
