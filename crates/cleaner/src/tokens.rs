// ABOUTME: Heuristic token estimation for text destined for language models.
// ABOUTME: Weighs whitespace-separated words and punctuation/symbol characters.

/// Tenths of a token per whitespace-separated word (1.3 tokens).
const TENTHS_PER_WORD: usize = 13;

/// Tenths of a token per punctuation or symbol character (0.5 tokens).
const TENTHS_PER_SYMBOL: usize = 5;

/// Estimate how many tokens a subword tokenizer would produce for `text`.
///
/// `ceil(words * 1.3 + symbols * 0.5)`, where a symbol is any character
/// that is neither an ASCII word character (`[A-Za-z0-9_]`) nor
/// whitespace. Letters outside ASCII count as symbols, which keeps
/// unspaced scripts such as Chinese from collapsing to a single "word".
pub fn estimate_tokens(text: &str) -> usize {
    let words = text.split_whitespace().count();
    let symbols = text.chars().filter(|c| is_symbol(*c)).count();
    let tenths = words * TENTHS_PER_WORD + symbols * TENTHS_PER_SYMBOL;
    tenths.div_ceil(10)
}

fn is_symbol(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace())
}
