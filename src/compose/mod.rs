//! Section builders for the safety-plan layout.
//!
//! The story is always: title block, field table, page break, content
//! section. The footer is drawn by [`draw_footer`] on every page.

mod content;
mod cover;
mod footer;

pub use content::{content_lines, content_section, CONTENT_HEADING};
pub use cover::{field_table, title_block, CITATION, FIELD_LABELS, TITLE};
pub use footer::{draw_footer, page_label, ATTRIBUTION};

use crate::model::Story;
use crate::request::DocumentRequest;
use log::debug;

/// Build the complete story for a request.
pub fn build_story(request: &DocumentRequest) -> Story {
    let mut story: Story = title_block().into_iter().collect();
    story.add_table(field_table(request));
    story.add_page_break();
    story.extend(content_section(request.content()));

    debug!(
        "built story with {} elements ({} paragraphs, {} page breaks)",
        story.len(),
        story.elements.iter().filter(|e| e.is_paragraph()).count(),
        story.elements.iter().filter(|e| e.is_page_break()).count()
    );
    story
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;

    #[test]
    fn test_story_order() {
        let story = build_story(&DocumentRequest::new().with_content("one\ntwo"));
        let kinds: Vec<&str> = story
            .elements
            .iter()
            .map(|e| match e {
                Element::Paragraph(_) => "p",
                Element::Spacer { .. } => "s",
                Element::Table(_) => "t",
                Element::PageBreak => "b",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["p", "p", "s", "t", "b", "p", "s", "p", "s", "p", "s"]
        );
        assert!(story.elements[4].is_page_break());
    }

    #[test]
    fn test_default_content_placeholder() {
        let story = build_story(&DocumentRequest::new());
        let last = story.paragraphs().last().unwrap();
        assert_eq!(last.text, "Contenuto non disponibile");
    }

    #[test]
    fn test_blank_content_has_heading_only() {
        let story = build_story(&DocumentRequest::new().with_content("\n\n\n"));
        let cover_end = story.elements.iter().position(Element::is_page_break).unwrap();
        let after_cover: Vec<_> = story.elements[cover_end + 1..]
            .iter()
            .filter(|e| e.is_paragraph())
            .collect();
        assert_eq!(after_cover.len(), 1);
    }

    #[test]
    fn test_same_request_same_story() {
        let request = DocumentRequest::new()
            .with_address("Via Roma 1")
            .with_content("a\n\nb");
        assert_eq!(build_story(&request), build_story(&request));
    }
}
