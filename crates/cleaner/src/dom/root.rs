// ABOUTME: Content root selection for a cleaned document.
// ABOUTME: Prefers main/article style containers, then body, then the document element.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Candidate containers for the main content, in priority order.
pub const CONTENT_ROOT_SELECTORS: &[&str] = &[
    "main",
    "article",
    r#"[role="main"]"#,
    "#content",
    ".content",
    "#main",
    ".main",
    ".post",
    ".article",
    ".entry-content",
    ".post-content",
];

/// Pick the element to extract from.
///
/// The first selector in [`CONTENT_ROOT_SELECTORS`] with a match wins; its
/// first match in document order is used.
pub fn select_content_root(doc: &Html) -> ElementRef<'_> {
    for css in CONTENT_ROOT_SELECTORS {
        let selector = match Selector::parse(css) {
            Ok(s) => s,
            Err(_) => {
                debug!(selector = css, "skipping invalid root selector");
                continue;
            }
        };
        if let Some(el) = doc.select(&selector).next() {
            debug!(selector = css, "selected content root");
            return el;
        }
    }

    body(doc).unwrap_or_else(|| doc.root_element())
}

/// The document's `<body>`, if any.
pub fn body(doc: &Html) -> Option<ElementRef<'_>> {
    Selector::parse("body")
        .ok()
        .and_then(|selector| doc.select(&selector).next())
}
