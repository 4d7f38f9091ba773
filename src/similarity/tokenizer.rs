// Word tokenizer.
//
// Lower-cases the text and keeps maximal runs of word characters (Unicode
// letters, digits, underscore). Everything else separates tokens, including
// apostrophes: "don't" becomes ["don", "t"].

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

/// Split a document into lowercase word tokens, in source order.
///
/// Empty, whitespace-only and punctuation-only input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
