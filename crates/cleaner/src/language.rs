// ABOUTME: Best-effort language detection from a leading text sample.
// ABOUTME: Checks Unicode script ranges first, then common function words for Latin-script languages.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of leading characters inspected.
pub const SAMPLE_CHARS: usize = 1000;

/// Returned when nothing more specific matches.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Script ranges, checked in order; the first script present wins.
const SCRIPT_RANGES: &[(RangeInclusive<char>, &str)] = &[
    ('\u{4E00}'..='\u{9FFF}', "zh"),
    ('\u{3040}'..='\u{30FF}', "ja"),
    ('\u{AC00}'..='\u{D7AF}', "ko"),
    ('\u{0400}'..='\u{04FF}', "ru"),
    ('\u{0600}'..='\u{06FF}', "ar"),
    ('\u{0590}'..='\u{05FF}', "he"),
    ('\u{0900}'..='\u{097F}', "hi"),
    ('\u{0E00}'..='\u{0E7F}', "th"),
];

// Words that are frequent in each language and rare in English prose.
static FUNCTION_WORDS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("de", r"\b(der|das|und|ist|nicht|eine|für|auf|auch|sich|ich|wir|sind|wird)\b"),
        ("fr", r"\b(le|les|est|une|des|du|dans|pour|avec|sur|qui|cette|nous|vous|être|très)\b"),
        ("es", r"\b(el|los|las|del|por|para|como|pero|está|también|muy|y)\b"),
        ("it", r"\b(il|gli|della|delle|che|sono|questo|questa|anche|nella|è|perché|molto)\b"),
        ("pt", r"\b(não|você|também|uma|são|muito|isso|pelo|pela|seu|sua)\b"),
        ("nl", r"\b(het|een|niet|zijn|ook|maar|voor|wordt|worden|naar|bij|heeft)\b"),
    ]
    .into_iter()
    .map(|(code, pattern)| (code, Regex::new(pattern).unwrap()))
    .collect()
});

/// Classify `text` into a short language code such as `"en"` or `"de"`.
///
/// Only the first [`SAMPLE_CHARS`] characters are inspected. No confidence
/// is reported; unrecognised text is [`DEFAULT_LANGUAGE`].
pub fn detect_language(text: &str) -> &'static str {
    let sample: String = text.chars().take(SAMPLE_CHARS).collect();

    for (range, code) in SCRIPT_RANGES {
        if sample.chars().any(|c| range.contains(&c)) {
            return *code;
        }
    }

    let lowered = sample.to_lowercase();
    FUNCTION_WORDS
        .iter()
        .find(|(_, re)| re.is_match(&lowered))
        .map_or(DEFAULT_LANGUAGE, |(code, _)| *code)
}
