// ABOUTME: Noise removal applied to the raw document before extraction.
// ABOUTME: Drops non-content tags, noise selectors, inline-hidden nodes, and on* handler attributes.

use dom_query::{Document, Matcher};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Tags removed together with their whole subtree.
pub const REMOVE_TAGS: &[&str] = &[
    "script", "style", "noscript", "iframe", "svg", "canvas", "link", "meta", "head", "template",
    "object", "embed", "applet", "audio", "video", "source", "track", "map", "area",
];

/// Selectors for navigation, ads, consent banners, overlays and hidden markers.
pub const NOISE_SELECTORS: &[&str] = &[
    "nav",
    "aside",
    ".sidebar",
    "#sidebar",
    r#"[class*="sidebar"]"#,
    r#"[role="navigation"]"#,
    r#"[role="complementary"]"#,
    ".ad",
    ".ads",
    ".advert",
    ".advertisement",
    r#"[class*="advert"]"#,
    r#"[id^="ad-"]"#,
    r#"[class^="ad-"]"#,
    r#"[class*="sponsor"]"#,
    r#"[class*="promo"]"#,
    r#"[class*="cookie"]"#,
    r#"[id*="cookie"]"#,
    r#"[class*="consent"]"#,
    r#"[class*="popup"]"#,
    r#"[class*="modal"]"#,
    r#"[class*="overlay"]"#,
    "[hidden]",
    r#"[aria-hidden="true"]"#,
    ".sr-only",
    ".visually-hidden",
    ".screen-reader-text",
];

static HIDDEN_STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)display:\s?none|visibility:\s?hidden").unwrap());

/// Counts of what [`strip_noise`] removed, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripStats {
    pub tags: usize,
    pub noise: usize,
    pub hidden: usize,
    pub handlers: usize,
}

/// Remove non-content markup and return the cleaned document as HTML.
///
/// The returned markup is re-parsed for traversal; nothing here can fail.
/// Selectors the engine rejects are skipped.
pub fn strip_noise(html: &str) -> String {
    let doc = Document::from(html);
    let stats = strip_document(&doc);
    debug!(
        tags = stats.tags,
        noise = stats.noise,
        hidden = stats.hidden,
        handlers = stats.handlers,
        "stripped noise"
    );
    doc.html().to_string()
}

/// In-place variant of [`strip_noise`].
pub fn strip_document(doc: &Document) -> StripStats {
    let mut stats = StripStats::default();

    for tag in REMOVE_TAGS {
        stats.tags += remove_matching(doc, tag);
    }
    // class substring selectors can hit `<body class="modal-open">`
    for css in NOISE_SELECTORS {
        stats.noise += remove_matching(doc, &format!("{}:not(html):not(body)", css));
    }

    let styled = doc.select("[style]");
    for node in styled.nodes() {
        let hidden = node
            .attr("style")
            .map_or(false, |style| HIDDEN_STYLE_RE.is_match(&style));
        if hidden {
            node.remove_from_parent();
            stats.hidden += 1;
        }
    }

    let all = doc.select("*");
    for node in all.nodes() {
        let handlers: Vec<String> = node
            .attrs()
            .iter()
            .map(|attr| attr.name.local.to_string())
            .filter(|name| is_event_handler(name))
            .collect();
        for name in &handlers {
            node.remove_attr(name);
        }
        stats.handlers += handlers.len();
    }

    stats
}

fn remove_matching(doc: &Document, css: &str) -> usize {
    let matcher = match Matcher::new(css) {
        Ok(matcher) => matcher,
        Err(_) => {
            debug!(selector = css, "skipping invalid selector");
            return 0;
        }
    };
    let sel = doc.select_matcher(&matcher);
    let nodes = sel.nodes();
    for node in nodes {
        node.remove_from_parent();
    }
    nodes.len()
}

/// Returns true for `onclick`, `onload` and friends.
pub fn is_event_handler(attr_name: &str) -> bool {
    attr_name.len() > 2
        && attr_name
            .get(..2)
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case("on"))
}
