// ABOUTME: Post-processing of the raw traversal output.
// ABOUTME: Drops empties, collapses breaks, merges adjacent text, trims edge breaks.

use super::elements::ExtractedElement;

/// Normalize a raw element sequence.
///
/// Guarantees on the result: no non-break element has empty content, no
/// two breaks are adjacent, no two text elements are adjacent, and the
/// sequence neither starts nor ends with a break. When a run of breaks
/// contains a rule, the surviving break is a rule.
pub fn consolidate(raw: Vec<ExtractedElement>) -> Vec<ExtractedElement> {
    let mut out: Vec<ExtractedElement> = Vec::with_capacity(raw.len());

    for el in raw {
        if !el.is_break() && el.content().is_empty() {
            continue;
        }

        if let Some(last) = out.last_mut() {
            match (last, &el) {
                (ExtractedElement::Break { rule }, ExtractedElement::Break { rule: next }) => {
                    *rule |= *next;
                    continue;
                }
                (ExtractedElement::Text { content }, ExtractedElement::Text { content: next }) => {
                    content.push(' ');
                    content.push_str(next);
                    continue;
                }
                _ => {}
            }
        }
        out.push(el);
    }

    while out.last().is_some_and(ExtractedElement::is_break) {
        out.pop();
    }
    let leading = out.iter().take_while(|el| el.is_break()).count();
    out.drain(..leading);

    out
}
