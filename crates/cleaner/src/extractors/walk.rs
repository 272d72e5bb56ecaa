// ABOUTME: Depth-first traversal that classifies DOM nodes into ExtractedElements.
// ABOUTME: The enclosing list type travels with each pending node on an explicit work stack.

use ego_tree::NodeRef;
use scraper::Node;

use super::elements::{ExtractedElement, ListType};
use crate::dom::text::{normalize_whitespace, raw_text, text_content};

/// Tags that end a visual block; a break follows them in flow output.
pub const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "main", "blockquote", "h1", "h2", "h3", "h4", "h5", "h6",
    "ul", "ol", "li", "dl", "dt", "dd", "table", "tr", "th", "td", "pre", "code", "figure",
    "figcaption", "address", "hr", "br",
];

/// One pending unit of traversal work.
enum Step<'a> {
    /// Classify a node, with the enclosing list type.
    Visit(NodeRef<'a, Node>, Option<ListType>),
    /// All children of a generic container with this tag have been visited.
    Close(&'a str),
}

/// Walk `node` and its descendants, appending raw (unconsolidated) elements.
///
/// Uses an explicit work stack, so nesting depth is bounded by memory
/// rather than by the thread's stack.
pub fn walk(node: NodeRef<'_, Node>, list: Option<ListType>, out: &mut Vec<ExtractedElement>) {
    let mut stack = vec![Step::Visit(node, list)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Visit(node, list) => visit(node, list, &mut stack, out),
            Step::Close(tag) => {
                let ends_in_break = out.last().map_or(true, ExtractedElement::is_break);
                if !ends_in_break && is_block(tag) {
                    out.push(ExtractedElement::line_break());
                }
            }
        }
    }
}

/// Push children so they pop in document order.
fn push_children<'a>(
    stack: &mut Vec<Step<'a>>,
    children: impl DoubleEndedIterator<Item = NodeRef<'a, Node>>,
    list: Option<ListType>,
) {
    stack.extend(children.rev().map(|child| Step::Visit(child, list)));
}

fn visit<'a>(
    node: NodeRef<'a, Node>,
    list: Option<ListType>,
    stack: &mut Vec<Step<'a>>,
    out: &mut Vec<ExtractedElement>,
) {
    match node.value() {
        Node::Text(text) => {
            let content = normalize_whitespace(text);
            if !content.is_empty() {
                out.push(ExtractedElement::text(content));
            }
        }
        Node::Element(el) => visit_element(node, el.name(), list, stack, out),
        Node::Document | Node::Fragment => push_children(stack, node.children(), list),
        _ => {}
    }
}

fn visit_element<'a>(
    node: NodeRef<'a, Node>,
    tag: &'a str,
    list: Option<ListType>,
    stack: &mut Vec<Step<'a>>,
    out: &mut Vec<ExtractedElement>,
) {
    match tag {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => out.push(ExtractedElement::Heading {
            content: text_content(node),
            level: heading_level(tag),
        }),
        "p" => out.push(ExtractedElement::paragraph(text_content(node))),
        "blockquote" => out.push(ExtractedElement::Blockquote {
            content: text_content(node),
        }),
        "pre" | "code" => out.push(ExtractedElement::Code {
            content: raw_text(node).trim().to_string(),
        }),
        "ul" | "ol" => {
            let list_type = if tag == "ol" {
                ListType::Ordered
            } else {
                ListType::Unordered
            };
            let items = node.children().filter(|c| c.value().is_element());
            push_children(stack, items, Some(list_type));
        }
        "li" => out.push(ExtractedElement::ListItem {
            content: text_content(node),
            list_type: list.unwrap_or_default(),
        }),
        "br" => out.push(ExtractedElement::line_break()),
        "hr" => out.push(ExtractedElement::rule()),
        _ => {
            stack.push(Step::Close(tag));
            push_children(stack, node.children(), list);
        }
    }
}

fn heading_level(tag: &str) -> u8 {
    tag[1..].parse().unwrap_or(1)
}

/// Returns true if `tag` is in [`BLOCK_TAGS`].
pub fn is_block(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::{Html, Selector};

    fn walk_body(html: &str) -> Vec<ExtractedElement> {
        let doc = Html::parse_document(html);
        let body = doc.select(&Selector::parse("body").unwrap()).next().unwrap();
        let mut out = Vec::new();
        walk(*body, None, &mut out);
        out
    }

    #[test]
    fn headings_capture_whole_subtree() {
        let out = walk_body("<body><h2>Big <em>news</em>  today</h2></body>");
        assert_eq!(
            out,
            vec![ExtractedElement::Heading {
                content: "Big news today".to_string(),
                level: 2
            }]
        );
    }

    #[test]
    fn list_context_flows_to_items() {
        let out = walk_body("<body><ol><li>one</li><li>two</li></ol><ul><li>x</li></ul></body>");
        let types: Vec<_> = out
            .iter()
            .filter_map(|e| match e {
                ExtractedElement::ListItem { list_type, .. } => Some(*list_type),
                _ => None,
            })
            .collect();
        assert_eq!(
            types,
            vec![ListType::Ordered, ListType::Ordered, ListType::Unordered]
        );
    }

    #[test]
    fn stray_li_defaults_to_unordered() {
        let doc = Html::parse_fragment("<li>orphan</li>");
        let mut out = Vec::new();
        walk(doc.tree.root(), None, &mut out);
        assert_eq!(
            out,
            vec![ExtractedElement::ListItem {
                content: "orphan".to_string(),
                list_type: ListType::Unordered
            }]
        );
    }

    #[test]
    fn code_keeps_raw_text() {
        let out = walk_body("<body><pre>  let x = 1;\n  let y = 2;  </pre></body>");
        assert_eq!(
            out,
            vec![ExtractedElement::Code {
                content: "let x = 1;\n  let y = 2;".to_string()
            }]
        );
    }

    #[test]
    fn block_containers_append_breaks() {
        let out = walk_body("<body><div>first</div><span>inline</span><div>second</div></body>");
        assert_eq!(
            out,
            vec![
                ExtractedElement::text("first"),
                ExtractedElement::line_break(),
                ExtractedElement::text("inline"),
                ExtractedElement::text("second"),
                ExtractedElement::line_break(),
            ]
        );
    }

    #[test]
    fn empty_block_before_content_adds_nothing() {
        let out = walk_body("<body><div></div><p>after</p></body>");
        assert_eq!(out, vec![ExtractedElement::paragraph("after")]);
    }

    #[test]
    fn br_and_hr_become_breaks() {
        let out = walk_body("<body>a<br>b<hr>c</body>");
        assert_eq!(
            out,
            vec![
                ExtractedElement::text("a"),
                ExtractedElement::line_break(),
                ExtractedElement::text("b"),
                ExtractedElement::rule(),
                ExtractedElement::text("c"),
            ]
        );
    }

    #[test]
    fn deep_nesting_does_not_exhaust_the_stack() {
        let depth = 50_000;
        let html = format!(
            "<body>{}<p>deep</p>{}</body>",
            "<div>".repeat(depth),
            "</div>".repeat(depth)
        );
        let out = walk_body(&html);
        assert_eq!(out.first(), Some(&ExtractedElement::paragraph("deep")));
        assert!(out[1..].iter().all(ExtractedElement::is_break));
    }
}
