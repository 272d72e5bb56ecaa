// ABOUTME: Main library entry point for the sift HTML cleaner.
// ABOUTME: Re-exports the public API: Cleaner, CleanerBuilder, CleanResult, CleaningStats, and the pipeline stages.

//! Sift - turns arbitrary HTML into clean text for people and language models.
//!
//! The pipeline strips noise (scripts, navigation, ads, hidden nodes),
//! classifies what is left into typed elements, renders them as plain text
//! or Markdown, and can split the text into token-bounded chunks wrapped in
//! a JSON envelope. Nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use sift_cleaner::{CleanError, Cleaner, OutputFormat};
//!
//! fn main() -> Result<(), CleanError> {
//!     let cleaner = Cleaner::builder().format(OutputFormat::Markdown).build();
//!     let result = cleaner.clean("<main><h2>Hi</h2><p>There.</p></main>")?;
//!     assert_eq!(result.content, "## Hi\n\nThere.");
//!     Ok(())
//! }
//! ```

pub mod chunker;
pub mod cleaner;
pub mod dom;
pub mod error;
pub mod extractors;
pub mod formats;
pub mod input;
pub mod language;
pub mod options;
pub mod result;
pub mod tokens;

pub use crate::chunker::{chunk_text, to_json, ContentChunk, JsonOutput, SOURCE_TAG};
pub use crate::cleaner::Cleaner;
pub use crate::error::CleanError;
pub use crate::extractors::elements::{ExtractedElement, ListType};
pub use crate::extractors::extract_elements;
pub use crate::formats::{render_markdown, render_text};
pub use crate::input::{decode_html_bytes, unwrap_envelope};
pub use crate::language::detect_language;
pub use crate::options::{
    clamp_target_tokens, CleanOptions, CleanerBuilder, OutputFormat, DEFAULT_TARGET_TOKENS,
    MAX_TARGET_TOKENS, MIN_TARGET_TOKENS,
};
pub use crate::result::{word_count, CleanResult, CleaningStats};
pub use crate::tokens::estimate_tokens;
