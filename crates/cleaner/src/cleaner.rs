// ABOUTME: The Cleaner struct that runs the full HTML to text pipeline.
// ABOUTME: Extracts elements, renders the configured format, and computes cleaning stats.

use tracing::debug;

use crate::chunker::{to_json, JsonOutput};
use crate::error::CleanError;
use crate::extractors::extract_elements;
use crate::formats::{render_markdown, render_text};
use crate::options::{CleanOptions, CleanerBuilder, OutputFormat};
use crate::result::{CleanResult, CleaningStats};

/// Runs extraction, rendering and chunking with a fixed set of options.
///
/// A `Cleaner` holds no state between calls; cleaning the same input twice
/// gives the same result.
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    opts: CleanOptions,
}

impl Cleaner {
    /// Create a new CleanerBuilder.
    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::new()
    }

    pub fn new(opts: CleanOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &CleanOptions {
        &self.opts
    }

    /// Clean an HTML document into the configured output format.
    ///
    /// An empty result (see [`CleanResult::is_empty`]) means the document
    /// had no meaningful content; that is not an error.
    pub fn clean(&self, html: &str) -> Result<CleanResult, CleanError> {
        let elements = extract_elements(html);
        let text = render_text(&elements);
        let stats = CleaningStats::compute(html, &text, self.opts.target_tokens);

        let content = match self.opts.format {
            OutputFormat::Text => text,
            OutputFormat::Markdown => render_markdown(&elements),
            OutputFormat::Json => serde_json::to_string_pretty(&self.to_json(&text))?,
        };

        debug!(
            format = %self.opts.format,
            elements = elements.len(),
            reduction = stats.reduction_percent,
            chunks = stats.chunk_count,
            "cleaned document"
        );

        Ok(CleanResult {
            format: self.opts.format,
            content,
            elements,
            stats,
        })
    }

    /// Build the JSON chunk envelope for already-cleaned text.
    pub fn to_json(&self, text: &str) -> JsonOutput {
        to_json(text, self.opts.target_tokens)
    }
}
