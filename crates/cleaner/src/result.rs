// ABOUTME: CleanResult holding the rendered output of one clean operation, and its CleaningStats.
// ABOUTME: Stats are derived fresh from the raw input and the plain-text rendering.

use serde::{Deserialize, Serialize};

use crate::chunker::chunk_text;
use crate::extractors::elements::ExtractedElement;
use crate::options::OutputFormat;
use crate::tokens::estimate_tokens;

/// The result of cleaning one document.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Format `content` is rendered in.
    pub format: OutputFormat,
    /// Rendered output: plain text, Markdown, or the pretty-printed JSON envelope.
    pub content: String,
    pub elements: Vec<ExtractedElement>,
    pub stats: CleaningStats,
}

impl CleanResult {
    /// Returns true if the document had no meaningful content.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Summary numbers for one clean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CleaningStats {
    /// Characters in the raw input.
    pub original_length: usize,
    /// Characters in the plain-text rendering.
    pub cleaned_length: usize,
    /// Size reduction in whole percent, never negative.
    pub reduction_percent: u32,
    pub word_count: usize,
    pub estimated_tokens: usize,
    pub chunk_count: usize,
}

impl CleaningStats {
    /// Compute stats for `original` input cleaned down to `text`.
    pub fn compute(original: &str, text: &str, target_tokens: usize) -> Self {
        let original_length = original.chars().count();
        let cleaned_length = text.chars().count();
        Self {
            original_length,
            cleaned_length,
            reduction_percent: reduction_percent(original_length, cleaned_length),
            word_count: word_count(text),
            estimated_tokens: estimate_tokens(text),
            chunk_count: chunk_text(text, target_tokens).len(),
        }
    }
}

fn reduction_percent(original: usize, cleaned: usize) -> u32 {
    if original == 0 {
        return 0;
    }
    let ratio = 1.0 - cleaned as f64 / original as f64;
    (ratio * 100.0).round().max(0.0) as u32
}

/// Count words in a text string using whitespace splitting.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compute_reports_reduction() {
        let html = "<html><body><p>Hello world.</p></body></html>";
        let stats = CleaningStats::compute(html, "Hello world.", 1000);
        assert_eq!(
            stats,
            CleaningStats {
                original_length: 45,
                cleaned_length: 12,
                reduction_percent: 73,
                word_count: 2,
                estimated_tokens: 4,
                chunk_count: 1,
            }
        );
    }

    #[test]
    fn empty_input_is_zero_everywhere() {
        assert_eq!(CleaningStats::compute("", "", 1000), CleaningStats::default());
    }

    #[test]
    fn reduction_never_negative() {
        assert_eq!(reduction_percent(5, 10), 0);
        assert_eq!(reduction_percent(10, 10), 0);
        assert_eq!(reduction_percent(200, 50), 75);
    }

    #[test]
    fn word_count_splits_on_whitespace() {
        assert_eq!(word_count("  one two\nthree\tfour "), 4);
        assert_eq!(word_count(""), 0);
    }
}
