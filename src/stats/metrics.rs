//! Text metrics computation
//!
//! Derives character, word and line counts from a text buffer. Every
//! function here is pure: the same input always yields the same counts.

use serde::Serialize;
use std::fmt;

/// The four counts shown in the stats panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Metrics {
    /// All chars, whitespace included
    pub total_chars: usize,
    /// Chars left after dropping every whitespace char
    pub chars_without_spaces: usize,
    /// Maximal runs of non-whitespace
    pub words: usize,
    /// `0` for empty text, otherwise one more than the number of `\n`
    pub lines: usize,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Characters (with spaces): {}", format_count(self.total_chars))?;
        writeln!(
            f,
            "Characters (no spaces):   {}",
            format_count(self.chars_without_spaces)
        )?;
        writeln!(f, "Words:                    {}", format_count(self.words))?;
        write!(f, "Lines:                    {}", format_count(self.lines))
    }
}

/// Compute metrics for `text`
///
/// Chars are Unicode scalar values. Whitespace is anything
/// `char::is_whitespace` accepts, which covers ASCII space, tab, newline,
/// carriage return, form feed, vertical tab and the Unicode space separators.
pub fn compute_metrics(text: &str) -> Metrics {
    let mut total_chars = 0;
    let mut chars_without_spaces = 0;
    let mut newlines = 0;

    for ch in text.chars() {
        total_chars += 1;
        if ch == '\n' {
            newlines += 1;
        }
        if !ch.is_whitespace() {
            chars_without_spaces += 1;
        }
    }

    Metrics {
        total_chars,
        chars_without_spaces,
        words: count_words(text),
        lines: count_lines(total_chars, newlines),
    }
}

fn count_words(text: &str) -> usize {
    // split_whitespace never yields empty segments, so blank input is 0
    text.split_whitespace().count()
}

fn count_lines(total_chars: usize, newlines: usize) -> usize {
    if total_chars == 0 { 0 } else { newlines + 1 }
}

/// Format a count with `,` between groups of three digits
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;
