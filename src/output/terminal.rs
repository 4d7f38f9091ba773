// Colored terminal output for comparison results.

use std::io::{self, Write};

use colored::Colorize;

use crate::error::SimilarityError;
use crate::similarity::Comparison;

/// Display a comparison as a score bar with the tokenization figures below.
pub fn display_comparison(comparison: &Comparison, name_a: &str, name_b: &str) {
    println!(
        "\n{}",
        format!("=== {} vs {} ===", truncate_chars(name_a, 40), truncate_chars(name_b, 40)).bold()
    );
    println!();

    let bar_width: usize = 20;
    let filled = (comparison.similarity * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    println!(
        "  {} {}",
        colorize_bar(&bar, comparison.similarity),
        comparison.message.bold()
    );
    println!();

    let d = &comparison.diagnostics;
    println!(
        "  {}",
        format!(
            "Tokens: {} / {}   Vocabulary: {} terms",
            d.tokens_a, d.tokens_b, d.vocabulary
        )
        .dimmed()
    );
}

/// Display a refused comparison on stderr, keeping stdout for results.
pub fn display_error(err: &SimilarityError) {
    // Nothing useful to do if stderr itself is gone.
    let _ = write_error(&mut io::stderr().lock(), err);
}

/// Write a refused comparison with its token counts.
pub fn write_error(out: &mut impl Write, err: &SimilarityError) -> io::Result<()> {
    writeln!(out, "{} {}", "Error:".red().bold(), err)?;
    let SimilarityError::EmptyDocument { diagnostics, .. } = err;
    writeln!(
        out,
        "  {}",
        format!(
            "Tokens: {} / {}",
            diagnostics.tokens_a, diagnostics.tokens_b
        )
        .dimmed()
    )
}

fn colorize_bar(bar: &str, similarity: f64) -> colored::ColoredString {
    if similarity >= 0.75 {
        bar.bright_green()
    } else if similarity >= 0.25 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so long file names with multi-byte
/// characters never panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
