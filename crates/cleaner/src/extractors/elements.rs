// ABOUTME: The typed content element produced by extraction and consumed by the renderers.
// ABOUTME: Defines ExtractedElement, ListType and the horizontal-rule marker.

use serde::{Deserialize, Serialize};

/// Content marker carried by a break produced from `<hr>`.
pub const RULE_MARKER: &str = "---";

/// The kind of list a list item was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    /// Also used for a `<li>` with no enclosing list.
    #[default]
    Unordered,
}

/// One unit of extracted content, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ExtractedElement {
    Text {
        content: String,
    },
    Heading {
        content: String,
        level: u8,
    },
    Paragraph {
        content: String,
    },
    #[serde(rename_all = "camelCase")]
    ListItem {
        content: String,
        list_type: ListType,
    },
    Blockquote {
        content: String,
    },
    Code {
        content: String,
    },
    /// A line break, or a thematic break when `rule` is set.
    Break {
        #[serde(default)]
        rule: bool,
    },
}

impl ExtractedElement {
    pub fn text(content: impl Into<String>) -> Self {
        ExtractedElement::Text {
            content: content.into(),
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        ExtractedElement::Paragraph {
            content: content.into(),
        }
    }

    pub fn line_break() -> Self {
        ExtractedElement::Break { rule: false }
    }

    pub fn rule() -> Self {
        ExtractedElement::Break { rule: true }
    }

    /// The element's text. Breaks yield `""`, or [`RULE_MARKER`] for rules.
    pub fn content(&self) -> &str {
        match self {
            ExtractedElement::Text { content }
            | ExtractedElement::Heading { content, .. }
            | ExtractedElement::Paragraph { content }
            | ExtractedElement::ListItem { content, .. }
            | ExtractedElement::Blockquote { content }
            | ExtractedElement::Code { content } => content,
            ExtractedElement::Break { rule: true } => RULE_MARKER,
            ExtractedElement::Break { rule: false } => "",
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, ExtractedElement::Break { .. })
    }

    pub fn is_rule(&self) -> bool {
        matches!(self, ExtractedElement::Break { rule: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn break_content_reflects_rule_marker() {
        assert_eq!(ExtractedElement::line_break().content(), "");
        assert_eq!(ExtractedElement::rule().content(), "---");
        assert!(ExtractedElement::rule().is_break());
        assert!(!ExtractedElement::line_break().is_rule());
    }

    #[test]
    fn list_item_serializes_with_kebab_type_and_camel_fields() {
        let item = ExtractedElement::ListItem {
            content: "One".to_string(),
            list_type: ListType::Ordered,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"type":"list-item","content":"One","listType":"ordered"}"#
        );
    }

    #[test]
    fn heading_deserializes() {
        let el: ExtractedElement =
            serde_json::from_str(r#"{"type":"heading","content":"Intro","level":2}"#).unwrap();
        assert_eq!(
            el,
            ExtractedElement::Heading {
                content: "Intro".to_string(),
                level: 2
            }
        );
    }
}
