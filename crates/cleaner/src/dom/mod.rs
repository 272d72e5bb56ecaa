// ABOUTME: DOM cleanup and traversal helpers for HTML extraction.
// ABOUTME: Noise stripping runs on dom_query; reading and text collection run on scraper.

//! DOM utilities for HTML document cleanup and reading.
//!
//! Cleanup mutates a `dom_query` document and serializes it back to markup;
//! the extractor then re-parses that markup with `scraper` and walks the
//! read-only tree.

pub mod cleaners;
pub mod root;
pub mod text;
