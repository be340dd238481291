//! Constrained formatting for agent-authored message text.
//!
//! Exactly three constructs are honored: bold (`**x**`), italics
//! (`*x*`), and paragraph breaks (blank line). The passes run in a
//! fixed order (paragraphs, then bold, then italics) and produce typed
//! spans — agent text can never reach the embedding page as markup.
//! A lone unpaired marker stays literal; an unclosed `**` reads as an
//! empty italics pair in the second pass and drops out.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// Parse message content into paragraphs of inline spans.
pub fn parse_message(content: &str) -> Vec<Vec<Span>> {
    content.split("\n\n").map(parse_inline).collect()
}

fn parse_inline(paragraph: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    for (bold_text, bold) in split_pairs(paragraph, "**") {
        for (text, italic) in split_pairs(&bold_text, "*") {
            if !text.is_empty() {
                spans.push(Span { text, bold, italic });
            }
        }
    }
    spans
}

/// Split `text` on paired occurrences of `delim`. Returns chunks
/// flagged true when they sat between a pair. A trailing unpaired
/// marker stays in the literal text.
fn split_pairs(text: &str, delim: &str) -> Vec<(String, bool)> {
    let mut out = Vec::new();
    let mut rest = text;
    loop {
        let Some(start) = rest.find(delim) else {
            if !rest.is_empty() {
                out.push((rest.to_string(), false));
            }
            break;
        };
        let after = &rest[start + delim.len()..];
        let Some(end) = after.find(delim) else {
            // No closing marker — everything left is literal.
            out.push((rest.to_string(), false));
            break;
        };
        if start > 0 {
            out.push((rest[..start].to_string(), false));
        }
        out.push((after[..end].to_string(), true));
        rest = &after[end + delim.len()..];
    }
    out
}
