//! Paragraph types.

use super::{Alignment, Color, StandardFont};
use serde::{Deserialize, Serialize};

/// A paragraph of text set in a single style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// The text content
    pub text: String,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a paragraph with the given style.
    pub fn new(text: impl Into<String>, style: ParagraphStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create a paragraph in the Normal style.
    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, ParagraphStyle::normal())
    }

    /// Create a paragraph in the Heading1 style.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(text, ParagraphStyle::heading1())
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Style name, e.g. `Normal`
    pub name: String,

    /// Font face
    pub font: StandardFont,

    /// Font size in points
    pub font_size: f32,

    /// Distance between baselines in points
    pub leading: f32,

    /// Text color
    pub color: Color,

    /// Text alignment
    pub alignment: Alignment,

    /// Space before paragraph in points
    pub space_before: f32,

    /// Space after paragraph in points
    pub space_after: f32,
}

impl ParagraphStyle {
    /// Body text: Helvetica 10/12.
    pub fn normal() -> Self {
        Self {
            name: "Normal".to_string(),
            font: StandardFont::Helvetica,
            font_size: 10.0,
            leading: 12.0,
            color: Color::BLACK,
            alignment: Alignment::Left,
            space_before: 0.0,
            space_after: 0.0,
        }
    }

    /// First-level heading: Helvetica-Bold 18/22.
    pub fn heading1() -> Self {
        Self {
            name: "Heading1".to_string(),
            font: StandardFont::HelveticaBold,
            font_size: 18.0,
            leading: 22.0,
            space_before: 0.0,
            space_after: 6.0,
            ..Self::normal()
        }
    }

    /// Derive a named style from this one.
    pub fn derive(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Set the font size and return self. Leading is left as inherited.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line spacing and return self.
    pub fn with_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    /// Set the font and return self.
    pub fn with_font(mut self, font: StandardFont) -> Self {
        self.font = font;
        self
    }

    /// Set the text color and return self.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the alignment and return self.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set space after and return self.
    pub fn with_space_after(mut self, points: f32) -> Self {
        self.space_after = points;
        self
    }
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_styles() {
        let p = Paragraph::normal("Hello");
        assert_eq!(p.style.name, "Normal");
        assert_eq!(p.style.font, StandardFont::Helvetica);

        let h = Paragraph::heading("Title");
        assert_eq!(h.style.font, StandardFont::HelveticaBold);
        assert_eq!(h.style.font_size, 18.0);
        assert_eq!(h.style.leading, 22.0);
        assert_eq!(h.style.space_before, 0.0);
        assert_eq!(h.style.space_after, 6.0);
    }

    #[test]
    fn test_derived_style() {
        let style = ParagraphStyle::heading1()
            .derive("CustomTitle")
            .with_font_size(24.0)
            .with_alignment(Alignment::Center)
            .with_space_after(30.0);

        assert_eq!(style.name, "CustomTitle");
        assert_eq!(style.font_size, 24.0);
        assert_eq!(style.leading, 22.0);
        assert_eq!(style.space_before, 0.0);
        assert_eq!(style.alignment, Alignment::Center);

        let loose = style.clone().with_leading(28.0);
        assert_eq!(loose.leading, 28.0);
        assert_eq!(style.space_after, 30.0);
    }

    #[test]
    fn test_paragraph_is_empty() {
        assert!(Paragraph::normal("   \t").is_empty());
        assert!(!Paragraph::normal(" x ").is_empty());
    }
}
