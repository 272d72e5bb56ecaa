// ABOUTME: Chunking tests over long generated articles, end to end through the JSON envelope.
// ABOUTME: Checks chunk sizes stay near the token target and boundaries land on sentence ends.

use pretty_assertions::assert_eq;
use sift_cleaner::{chunk_text, estimate_tokens, Cleaner, JsonOutput, OutputFormat};

const SUBJECTS: [&str; 5] = [
    "The research team",
    "Our small village",
    "A careful reader",
    "The city council",
    "Every new engineer",
];
const VERBS: [&str; 5] = ["reviewed", "discussed", "questioned", "improved", "described"];
const OBJECTS: [&str; 5] = [
    "the annual budget",
    "a difficult proposal",
    "the old railway bridge",
    "several open questions",
    "the quarterly results",
];
const TAILS: [&str; 5] = [
    "before the long winter",
    "with great patience",
    "during the morning session",
    "after much debate",
    "in plain language",
];

/// Deterministic English paragraphs of five sentences, at least `words` words in total.
fn article_paragraphs(words: usize) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut count = 0;
    let mut i = 0;
    while count < words {
        let sentence = format!(
            "{} {} {} {}.",
            SUBJECTS[i % 5],
            VERBS[(i / 5) % 5],
            OBJECTS[(i / 25) % 5],
            TAILS[(i / 3) % 5]
        );
        count += sentence.split_whitespace().count();
        sentences.push(sentence);
        i += 1;
    }
    sentences.chunks(5).map(|group| group.join(" ")).collect()
}

fn article_html(words: usize) -> String {
    let body: String = article_paragraphs(words)
        .iter()
        .map(|p| format!("<p>{}</p>\n", p))
        .collect();
    format!(
        "<html><head><title>Report</title></head><body><article>\n{}</article></body></html>",
        body
    )
}

#[test]
fn five_thousand_word_article_chunks_near_target() {
    let cleaner = Cleaner::builder()
        .format(OutputFormat::Json)
        .target_tokens(1000)
        .build();
    let result = cleaner.clean(&article_html(5000)).unwrap();
    let out: JsonOutput = serde_json::from_str(&result.content).unwrap();

    assert_eq!(out.language, "en");
    assert!(out.content.len() > 1);
    assert_eq!(out.content.len(), result.stats.chunk_count);

    let (last, rest) = out.content.split_last().unwrap();
    for chunk in rest {
        assert!(
            (800..=1300).contains(&chunk.approx_tokens),
            "chunk {} has {} tokens",
            chunk.chunk,
            chunk.approx_tokens
        );
        assert!(
            chunk.text.ends_with('.'),
            "chunk {} splits a sentence",
            chunk.chunk
        );
    }
    assert!(last.approx_tokens <= 1300);
    assert!(last.text.ends_with('.'));
}

#[test]
fn chunks_are_numbered_and_cover_the_text() {
    let text = article_paragraphs(5000).join("\n\n");
    let chunks = chunk_text(&text, 1000);

    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.chunk, i + 1);
        assert_eq!(chunk.approx_tokens, estimate_tokens(&chunk.text));
    }

    let rejoined = chunks
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    assert_eq!(rejoined, text);
}

#[test]
fn smaller_target_gives_more_chunks() {
    let text = article_paragraphs(5000).join("\n\n");
    let coarse = chunk_text(&text, 2000).len();
    let fine = chunk_text(&text, 400).len();
    assert!(fine > coarse, "{} chunks at 400 vs {} at 2000", fine, coarse);
}

#[test]
fn text_without_delimiters_is_hard_cut() {
    // one word, so the estimate comes almost entirely from symbols
    let text = "x-".repeat(10_000);
    let chunks = chunk_text(&text, 400);
    assert!(chunks.len() > 1);
    let total: usize = chunks.iter().map(|c| c.text.len()).sum();
    assert_eq!(total, text.len());
}
