//! Content section: heading plus one paragraph per non-blank line.

use crate::model::{Element, Paragraph};

/// Heading opening the content section.
pub const CONTENT_HEADING: &str = "CONTENUTO PIANO OPERATIVO DI SICUREZZA";

/// Gap after the content heading, in points.
const HEADING_GAP: f32 = 12.0;

/// Gap after each content paragraph, in points.
const PARAGRAPH_GAP: f32 = 6.0;

/// Lines of `content` that become paragraphs.
///
/// Content is split on `\n` (a trailing `\r` goes with the terminator) and
/// blank lines are dropped, so runs of blank lines collapse. Kept lines are
/// returned unmodified.
pub fn content_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !is_blank(line))
}

/// Unicode whitespace plus the information separators `\x1c`..`\x1f`,
/// which also count as blank.
fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// The content section elements.
pub fn content_section(content: &str) -> Vec<Element> {
    let mut elements = vec![
        Element::Paragraph(Paragraph::heading(CONTENT_HEADING)),
        Element::Spacer {
            height: HEADING_GAP,
        },
    ];

    for line in content_lines(content) {
        elements.push(Element::Paragraph(Paragraph::normal(line)));
        elements.push(Element::Spacer {
            height: PARAGRAPH_GAP,
        });
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_paragraphs(content: &str) -> Vec<String> {
        content_section(content)
            .into_iter()
            .skip(2)
            .filter_map(|e| match e {
                Element::Paragraph(p) => Some(p.text),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_blank_only_content_has_no_paragraphs() {
        assert!(body_paragraphs("\n\n\n").is_empty());
        assert!(body_paragraphs("").is_empty());
        assert!(body_paragraphs("  \n\t\n \r\n").is_empty());
    }

    #[test]
    fn test_blank_lines_collapse() {
        assert_eq!(body_paragraphs("line1\n\nline2"), vec!["line1", "line2"]);
        assert_eq!(
            body_paragraphs("a\n\n\n\n   \nb\n"),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_separator_only_lines_are_blank() {
        assert!(body_paragraphs("\x1c\x1d\n\x1e \x1f\n").is_empty());
        assert_eq!(body_paragraphs("a\n\x1f\nb"), vec!["a", "b"]);
        assert_eq!(body_paragraphs("\u{3000}\n\u{a0}x"), vec!["\u{a0}x"]);
    }

    #[test]
    fn test_lines_kept_verbatim() {
        assert_eq!(
            body_paragraphs("  indented  \nnext"),
            vec!["  indented  ", "next"]
        );
    }

    #[test]
    fn test_crlf_content() {
        assert_eq!(
            body_paragraphs("Safety notes.\r\nWear helmets.\r\n"),
            vec!["Safety notes.", "Wear helmets."]
        );
    }

    #[test]
    fn test_each_paragraph_followed_by_gap() {
        let section = content_section("one\ntwo");
        assert_eq!(section.len(), 2 + 4);
        assert!(matches!(&section[0], Element::Paragraph(p) if p.text == CONTENT_HEADING));
        assert_eq!(section[1], Element::Spacer { height: 12.0 });
        assert!(section[2].is_paragraph());
        assert_eq!(section[3], Element::Spacer { height: 6.0 });
        assert!(section[4].is_paragraph());
        assert_eq!(section[5], Element::Spacer { height: 6.0 });
    }
}
