//! Plain text outline of a document story.

use crate::model::Story;

/// Convert a story to plain text.
///
/// Paragraphs take one line each, table rows are tab-separated and page
/// breaks appear as a form feed line.
pub fn to_text(story: &Story) -> String {
    story.plain_text().trim().to_string()
}
