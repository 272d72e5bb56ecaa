// ABOUTME: Token-aware splitting of cleaned text into bounded chunks, plus the JSON chunk envelope.
// ABOUTME: Break points prefer paragraph, line, sentence, then word boundaries before a hard cut.

//! Chunking of cleaned text.
//!
//! Sizes are derived from the token estimate: the average number of bytes
//! per estimated token turns the token target into a byte budget, and each
//! chunk may grow to 1.2x that budget. Within the budget the latest
//! paragraph break is preferred, then line break, sentence end and space,
//! each accepted only past a minimum fraction of the budget so chunks do
//! not come out absurdly short.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::language::detect_language;
use crate::tokens::estimate_tokens;

/// Provenance tag written into every JSON envelope.
pub const SOURCE_TAG: &str = "user-pasted-html";

/// Text up to this multiple of the target stays a single chunk; also the
/// growth allowance for each chunk's byte budget.
const TARGET_SLACK: f64 = 1.2;

/// Lower edge of the size band, kept for diagnostics only.
const MIN_BAND: f64 = 0.8;

const PARAGRAPH_MIN_FRACTION: f64 = 0.5;
const LINE_MIN_FRACTION: f64 = 0.6;
const SENTENCE_MIN_FRACTION: f64 = 0.5;
const SPACE_MIN_FRACTION: f64 = 0.7;

static SENTENCE_ENDERS: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new([". ", "! ", "? ", ".\n", "!\n", "?\n"]).unwrap());

/// One numbered slice of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentChunk {
    /// 1-based, contiguous across the emitted chunks.
    pub chunk: usize,
    pub text: String,
    pub approx_tokens: usize,
}

/// The JSON output envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonOutput {
    pub source: String,
    pub language: String,
    pub content: Vec<ContentChunk>,
}

/// Byte budgets derived from a token target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkBounds {
    pub target_chars: usize,
    pub min_chars: usize,
    pub max_chars: usize,
}

impl ChunkBounds {
    /// Derive budgets for text of `len` bytes estimated at `total_tokens`.
    pub fn new(len: usize, total_tokens: usize, target_tokens: usize) -> Self {
        let chars_per_token = len as f64 / total_tokens.max(1) as f64;
        let target_chars = (target_tokens as f64 * chars_per_token).floor() as usize;
        Self {
            target_chars,
            min_chars: (target_chars as f64 * MIN_BAND).floor() as usize,
            max_chars: ((target_chars as f64 * TARGET_SLACK).floor() as usize).max(1),
        }
    }
}

/// Split `text` into chunks of roughly `target_tokens` estimated tokens.
///
/// Empty or blank input yields no chunks. Input within 1.2x the target is
/// returned whole as chunk 1.
pub fn chunk_text(text: &str, target_tokens: usize) -> Vec<ContentChunk> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let total = estimate_tokens(text);
    // total <= target * 1.2, kept in integers
    if total * 10 <= target_tokens.saturating_mul(12) {
        return vec![ContentChunk {
            chunk: 1,
            text: text.to_string(),
            approx_tokens: total,
        }];
    }

    let bounds = ChunkBounds::new(text.len(), total, target_tokens);
    trace!(
        total,
        target_chars = bounds.target_chars,
        min_chars = bounds.min_chars,
        max_chars = bounds.max_chars,
        "chunking"
    );

    let mut chunks = Vec::new();
    let mut remaining = text;
    while !remaining.is_empty() {
        if remaining.len() <= bounds.max_chars {
            push_chunk(&mut chunks, remaining);
            break;
        }
        let cut = find_break_point(remaining, bounds.max_chars);
        push_chunk(&mut chunks, &remaining[..cut]);
        remaining = remaining[cut..].trim();
    }
    chunks
}

fn push_chunk(chunks: &mut Vec<ContentChunk>, piece: &str) {
    let text = piece.trim();
    if text.is_empty() {
        return;
    }
    chunks.push(ContentChunk {
        chunk: chunks.len() + 1,
        text: text.to_string(),
        approx_tokens: estimate_tokens(text),
    });
}

/// Byte offset at which to end the next chunk of `text`.
///
/// Always a char boundary in `1..=text.len()`.
pub fn find_break_point(text: &str, max_chars: usize) -> usize {
    let max = max_chars as f64;

    if let Some(pos) = rfind_at_or_before(text, "\n\n", max_chars) {
        if pos as f64 > max * PARAGRAPH_MIN_FRACTION {
            trace!(pos, "paragraph break");
            return pos + 2;
        }
    }

    if let Some(pos) = rfind_at_or_before(text, "\n", max_chars) {
        if pos as f64 > max * LINE_MIN_FRACTION {
            trace!(pos, "line break");
            return pos + 1;
        }
    }

    if let Some((start, end)) = last_sentence_end(text, max_chars) {
        if start as f64 > max * SENTENCE_MIN_FRACTION {
            trace!(pos = start, "sentence break");
            return end;
        }
    }

    if let Some(pos) = rfind_at_or_before(text, " ", max_chars) {
        if pos as f64 > max * SPACE_MIN_FRACTION {
            trace!(pos, "word break");
            return pos + 1;
        }
    }

    trace!(max_chars, "hard cut");
    hard_cut(text, max_chars)
}

/// Last occurrence of `pat` starting at or before byte `limit`.
fn rfind_at_or_before(text: &str, pat: &str, limit: usize) -> Option<usize> {
    let end = floor_char_boundary(text, limit.saturating_add(pat.len()));
    text[..end].rfind(pat)
}

/// Start and end of the latest sentence ender starting at or before `limit`.
fn last_sentence_end(text: &str, limit: usize) -> Option<(usize, usize)> {
    let end = floor_char_boundary(text, limit.saturating_add(2));
    SENTENCE_ENDERS
        .find_iter(&text[..end])
        .last()
        .map(|m| (m.start(), m.end()))
}

fn hard_cut(text: &str, max_chars: usize) -> usize {
    let cut = floor_char_boundary(text, max_chars);
    if cut > 0 {
        return cut;
    }
    // budget smaller than the first character
    text.chars().next().map_or(text.len(), char::len_utf8)
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut i = index;
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Chunk `text` and wrap it with its detected language and the source tag.
pub fn to_json(text: &str, target_tokens: usize) -> JsonOutput {
    JsonOutput {
        source: SOURCE_TAG.to_string(),
        language: detect_language(text).to_string(),
        content: chunk_text(text, target_tokens),
    }
}
