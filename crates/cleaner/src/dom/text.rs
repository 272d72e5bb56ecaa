// ABOUTME: Text collection helpers over scraper's document tree.
// ABOUTME: Whitespace normalization and subtree text that skips script-like content.

use ego_tree::iter::Edge;
use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Node;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Tags whose text never counts as content, even if they survived cleaning.
const SKIP_TEXT_TAGS: &[&str] = &["script", "style", "noscript"];

/// Collapse every whitespace run to a single space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Normalized text of a subtree.
pub fn text_content(node: NodeRef<'_, Node>) -> String {
    normalize_whitespace(&raw_text(node))
}

/// Concatenated text of a subtree, whitespace left as-is.
///
/// `<br>` contributes a newline so that words on either side stay apart.
pub fn raw_text(node: NodeRef<'_, Node>) -> String {
    let mut buf = String::new();
    collect_text(node, &mut buf);
    buf
}

fn collect_text(node: NodeRef<'_, Node>, buf: &mut String) {
    // depth inside a skipped subtree; 0 while collecting
    let mut skipping = 0usize;

    for edge in node.traverse() {
        match edge {
            Edge::Open(n) if n == node => {}
            Edge::Open(n) if skipping > 0 => {
                if n.value().is_element() {
                    skipping += 1;
                }
            }
            Edge::Open(n) => match n.value() {
                Node::Text(text) => buf.push_str(text),
                Node::Element(el) if SKIP_TEXT_TAGS.contains(&el.name()) => skipping = 1,
                Node::Element(el) if el.name() == "br" => buf.push('\n'),
                _ => {}
            },
            Edge::Close(n) => {
                if skipping > 0 && n.value().is_element() {
                    skipping -= 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::{Html, Selector};

    fn first(doc: &Html, css: &str) -> String {
        let sel = Selector::parse(css).unwrap();
        let el = doc.select(&sel).next().unwrap();
        text_content(*el)
    }

    #[test]
    fn normalize_collapses_runs_and_trims() {
        assert_eq!(normalize_whitespace("  a \t\n  b\n\nc  "), "a b c");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn text_content_skips_script_and_style() {
        let doc = Html::parse_fragment(
            "<div>Hello <script>var x = 1;</script><style>.a{}</style><b>world</b></div>",
        );
        assert_eq!(first(&doc, "div"), "Hello world");
    }

    #[test]
    fn text_content_separates_words_around_br() {
        let doc = Html::parse_fragment("<p>one<br>two</p>");
        assert_eq!(first(&doc, "p"), "one two");
    }

    #[test]
    fn raw_text_keeps_indentation() {
        let doc = Html::parse_fragment("<pre>fn main() {\n    run();\n}</pre>");
        let sel = Selector::parse("pre").unwrap();
        let pre = doc.select(&sel).next().unwrap();
        assert_eq!(raw_text(*pre), "fn main() {\n    run();\n}");
    }

    #[test]
    fn nested_skipped_tags_stay_skipped() {
        let doc = Html::parse_fragment(
            "<div>a <noscript><span><b>hidden</b></span></noscript> b <i>c</i></div>",
        );
        assert_eq!(first(&doc, "div"), "a b c");
    }

    #[test]
    fn deep_subtree_text_is_collected() {
        let depth = 50_000;
        let html = format!("<p>{}deep{}</p>", "<span>".repeat(depth), "</span>".repeat(depth));
        let doc = Html::parse_fragment(&html);
        assert_eq!(first(&doc, "p"), "deep");
    }
}
