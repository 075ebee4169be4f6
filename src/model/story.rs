//! The story: the ordered element list handed to the formatting engine.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// An ordered sequence of presentation elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Elements in reading order
    pub elements: Vec<Element>,
}

impl Story {
    /// Create an empty story.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.elements.push(Element::Paragraph(paragraph));
    }

    /// Append a vertical gap.
    pub fn add_spacer(&mut self, height: f32) {
        self.elements.push(Element::Spacer { height });
    }

    /// Append a table.
    pub fn add_table(&mut self, table: Table) {
        self.elements.push(Element::Table(table));
    }

    /// Append a page break.
    pub fn add_page_break(&mut self) {
        self.elements.push(Element::PageBreak);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the story has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the paragraphs in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.elements.iter().filter_map(|e| match e {
            Element::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Iterate over the tables in order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(|e| match e {
            Element::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Get plain text content of the story.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Paragraph(p) => Some(p.text.clone()),
                Element::Table(t) => Some(t.plain_text()),
                Element::PageBreak => Some("\u{c}".to_string()),
                Element::Spacer { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Extend<Element> for Story {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl FromIterator<Element> for Story {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// A presentation element in a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// Vertical whitespace
    Spacer {
        /// Height in points
        height: f32,
    },

    /// A table
    Table(Table),

    /// Forces the following elements onto a new page
    PageBreak,
}

impl Element {
    /// Check if this element is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Element::Paragraph(_))
    }

    /// Check if this element is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Element::PageBreak)
    }
}
