// ABOUTME: Output format renderers for extracted elements.
// ABOUTME: Serializes an ExtractedElement sequence to plain text or Markdown.

//! Output format conversion module.
//!
//! Both renderers are pure functions over the same element sequence and
//! finish with the same normalization: runs of three or more newlines
//! become a single blank line and the result is trimmed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::elements::{ExtractedElement, ListType, RULE_MARKER};

static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Bullet used for every list item in plain text.
const TEXT_BULLET: &str = "• ";

/// Collapse more than 2 consecutive newlines to exactly 2.
fn collapse_blank_lines_to_two(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").to_string()
}

/// Line buffer shared by both renderers.
#[derive(Default)]
struct Lines(Vec<String>);

impl Lines {
    fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    fn blank(&mut self) {
        self.0.push(String::new());
    }

    /// Add a blank line unless at the start or already after one.
    fn ensure_blank(&mut self) {
        if self.0.last().is_some_and(|line| !line.is_empty()) {
            self.blank();
        }
    }

    fn rule(&mut self) {
        self.blank();
        self.push(RULE_MARKER);
        self.blank();
    }

    fn finish(self) -> String {
        collapse_blank_lines_to_two(&self.0.join("\n"))
            .trim()
            .to_string()
    }
}

/// Render elements as plain text.
///
/// Headings are uppercased and set off by blank lines, list items get a
/// bullet whatever their list type, blockquotes are wrapped in quotes.
pub fn render_text(elements: &[ExtractedElement]) -> String {
    let mut lines = Lines::default();

    for el in elements {
        match el {
            ExtractedElement::Heading { content, .. } => {
                lines.ensure_blank();
                lines.push(content.to_uppercase());
                lines.blank();
            }
            ExtractedElement::Paragraph { content }
            | ExtractedElement::Text { content }
            | ExtractedElement::Code { content } => {
                lines.ensure_blank();
                lines.push(content.as_str());
                lines.blank();
            }
            ExtractedElement::Blockquote { content } => {
                lines.ensure_blank();
                lines.push(format!("\"{}\"", content));
                lines.blank();
            }
            ExtractedElement::ListItem { content, .. } => {
                lines.push(format!("{}{}", TEXT_BULLET, content));
            }
            ExtractedElement::Break { rule: true } => lines.rule(),
            ExtractedElement::Break { rule: false } => lines.ensure_blank(),
        }
    }

    lines.finish()
}

/// Render elements as Markdown.
///
/// Ordered list items are numbered from 1; the count restarts after any
/// heading, paragraph, blockquote, code block, rule, or unordered item.
/// Plain breaks produce nothing.
pub fn render_markdown(elements: &[ExtractedElement]) -> String {
    let mut lines = Lines::default();
    let mut ordered = 0usize;

    for el in elements {
        match el {
            ExtractedElement::Heading { content, level } => {
                ordered = 0;
                lines.ensure_blank();
                lines.push(format!("{} {}", "#".repeat(usize::from(*level)), content));
                lines.blank();
            }
            ExtractedElement::Paragraph { content } | ExtractedElement::Text { content } => {
                ordered = 0;
                lines.ensure_blank();
                lines.push(content.as_str());
                lines.blank();
            }
            ExtractedElement::Blockquote { content } => {
                ordered = 0;
                lines.ensure_blank();
                lines.push(format!("> {}", content));
                lines.blank();
            }
            ExtractedElement::Code { content } => {
                ordered = 0;
                lines.ensure_blank();
                lines.push("```");
                lines.push(content.as_str());
                lines.push("```");
                lines.blank();
            }
            ExtractedElement::ListItem {
                content,
                list_type: ListType::Ordered,
            } => {
                ordered += 1;
                lines.push(format!("{}. {}", ordered, content));
            }
            ExtractedElement::ListItem {
                content,
                list_type: ListType::Unordered,
            } => {
                ordered = 0;
                lines.push(format!("- {}", content));
            }
            ExtractedElement::Break { rule: true } => {
                ordered = 0;
                lines.rule();
            }
            ExtractedElement::Break { rule: false } => {}
        }
    }

    lines.finish()
}
