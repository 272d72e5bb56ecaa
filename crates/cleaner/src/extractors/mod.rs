// ABOUTME: Element extraction pipeline from raw HTML to a consolidated ExtractedElement sequence.
// ABOUTME: Unwraps proxy envelopes, strips noise, walks the content root, and falls back to body text.

//! Element extraction.
//!
//! Key behaviors:
//! - JSON envelopes with a `contents` or `html` string are unwrapped first.
//! - Noise is removed before the content root is chosen.
//! - Output never starts or ends with a break and never has two in a row.
//! - If structured extraction finds nothing but the body has real text,
//!   the body text is split into paragraphs instead.

pub mod consolidate;
pub mod elements;
pub mod walk;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use tracing::debug;

use crate::dom::cleaners::strip_noise;
use crate::dom::root::{body, select_content_root};
use crate::dom::text::{normalize_whitespace, raw_text};
use crate::input::unwrap_envelope;
use consolidate::consolidate;
use elements::ExtractedElement;
use walk::walk;

/// Minimum trimmed body text, in characters, before the fallback kicks in.
const FALLBACK_MIN_BODY_CHARS: usize = 50;

/// Minimum trimmed line length, in characters, for a fallback paragraph.
const FALLBACK_MIN_LINE_CHARS: usize = 10;

static NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

/// Extract the ordered content elements of an HTML document.
///
/// Never fails: malformed markup is parsed leniently and an empty vector
/// means the document had no meaningful content.
pub fn extract_elements(html: &str) -> Vec<ExtractedElement> {
    let html = unwrap_envelope(html);
    let cleaned = strip_noise(&html);
    let doc = Html::parse_document(&cleaned);

    let root = select_content_root(&doc);
    let mut raw = Vec::new();
    walk(*root, None, &mut raw);
    let elements = consolidate(raw);
    debug!(count = elements.len(), "extracted elements");

    if !elements.is_empty() {
        return elements;
    }

    let fallback = body_text_paragraphs(&doc);
    if !fallback.is_empty() {
        debug!(count = fallback.len(), "using body text fallback");
    }
    fallback
}

/// Split the body's raw text into paragraphs on newline runs.
fn body_text_paragraphs(doc: &Html) -> Vec<ExtractedElement> {
    let text = match body(doc) {
        Some(body) => raw_text(*body),
        None => raw_text(*doc.root_element()),
    };
    let trimmed = text.trim();
    if trimmed.chars().count() <= FALLBACK_MIN_BODY_CHARS {
        return Vec::new();
    }

    NEWLINES_RE
        .split(trimmed)
        .map(normalize_whitespace)
        .filter(|line| line.chars().count() > FALLBACK_MIN_LINE_CHARS)
        .map(ExtractedElement::paragraph)
        .collect()
}
