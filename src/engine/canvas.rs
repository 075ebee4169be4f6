//! Per-page drawing surface.

use super::fonts::{encode_win_ansi, string_width};
use crate::model::{Color, StandardFont};
use lopdf::content::Operation;
use lopdf::Object;

/// Drawing surface for one page, in PDF user space (origin at the bottom
/// left corner, y growing upwards).
///
/// Operations are recorded and later written as the page content stream.
#[derive(Debug)]
pub struct Canvas {
    operations: Vec<Operation>,
    state: TextState,
    saved: Vec<TextState>,
    replaced_chars: usize,
}

#[derive(Debug, Clone, Copy)]
struct TextState {
    font: StandardFont,
    size: f32,
}

impl Canvas {
    pub(crate) fn new() -> Self {
        Self {
            operations: Vec::new(),
            state: TextState {
                font: StandardFont::Helvetica,
                size: 10.0,
            },
            saved: Vec::new(),
            replaced_chars: 0,
        }
    }

    /// Push the graphics state.
    pub fn save_state(&mut self) {
        self.saved.push(self.state);
        self.push("q", vec![]);
    }

    /// Pop the graphics state. Unbalanced calls are ignored.
    pub fn restore_state(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
            self.push("Q", vec![]);
        }
    }

    /// Select the font used by the following `draw_*` calls.
    pub fn set_font(&mut self, font: StandardFont, size: f32) {
        self.state = TextState { font, size };
    }

    /// Current font and size.
    pub fn font(&self) -> (StandardFont, f32) {
        (self.state.font, self.state.size)
    }

    /// Set the fill (and text) color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.push("rg", vec![color.r.into(), color.g.into(), color.b.into()]);
    }

    /// Set the stroke color.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.push("RG", vec![color.r.into(), color.g.into(), color.b.into()]);
    }

    /// Set the stroke line width.
    pub fn set_line_width(&mut self, width: f32) {
        self.push("w", vec![width.into()]);
    }

    /// Width of `text` in the current font.
    pub fn string_width(&self, text: &str) -> f32 {
        string_width(text, self.state.font, self.state.size)
    }

    /// Draw text with its baseline starting at (x, y).
    pub fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        let (bytes, replaced) = encode_win_ansi(text);
        self.replaced_chars += replaced;

        let TextState { font, size } = self.state;
        self.push("BT", vec![]);
        self.push("Tf", vec![font.resource_name().into(), size.into()]);
        self.push("Td", vec![x.into(), y.into()]);
        self.push("Tj", vec![Object::string_literal(bytes)]);
        self.push("ET", vec![]);
    }

    /// Draw text so that it ends at `x`.
    pub fn draw_right_string(&mut self, x: f32, y: f32, text: &str) {
        let width = self.string_width(text);
        self.draw_string(x - width, y, text);
    }

    /// Draw text centered on `x`.
    pub fn draw_centred_string(&mut self, x: f32, y: f32, text: &str) {
        let width = self.string_width(text);
        self.draw_string(x - width / 2.0, y, text);
    }

    /// Draw a rectangle with its lower left corner at (x, y).
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: bool, stroke: bool) {
        self.push(
            "re",
            vec![x.into(), y.into(), width.into(), height.into()],
        );
        let paint = match (fill, stroke) {
            (true, true) => "B",
            (true, false) => "f",
            (false, true) => "S",
            (false, false) => "n",
        };
        self.push(paint, vec![]);
    }

    /// Number of characters replaced during WinAnsi encoding so far.
    pub fn replaced_chars(&self) -> usize {
        self.replaced_chars
    }

    /// Recorded operations.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub(crate) fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(canvas: &Canvas) -> Vec<&str> {
        canvas
            .operations()
            .iter()
            .map(|op| op.operator.as_str())
            .collect()
    }

    #[test]
    fn test_draw_string_operations() {
        let mut canvas = Canvas::new();
        canvas.set_font(StandardFont::HelveticaBold, 8.0);
        canvas.draw_string(10.0, 20.0, "Pagina 1");

        assert_eq!(operators(&canvas), vec!["BT", "Tf", "Td", "Tj", "ET"]);
        let tj = &canvas.operations()[3];
        assert!(matches!(&tj.operands[0], Object::String(bytes, _) if bytes == b"Pagina 1"));
        let tf = &canvas.operations()[1];
        assert_eq!(tf.operands[0].as_name().unwrap(), b"F2");
    }

    #[test]
    fn test_draw_right_string_ends_at_x() {
        let mut canvas = Canvas::new();
        canvas.set_font(StandardFont::Helvetica, 10.0);
        canvas.draw_right_string(100.0, 0.0, "Hi");

        let td = &canvas.operations()[2];
        let x = td.operands[0].as_float().unwrap();
        assert!((x - (100.0 - 9.44)).abs() < 1e-3);
    }

    #[test]
    fn test_restore_state_restores_font() {
        let mut canvas = Canvas::new();
        canvas.set_font(StandardFont::Helvetica, 10.0);
        canvas.save_state();
        canvas.set_font(StandardFont::HelveticaBold, 24.0);
        canvas.restore_state();

        assert_eq!(canvas.font(), (StandardFont::Helvetica, 10.0));
        assert_eq!(operators(&canvas), vec!["q", "Q"]);
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut canvas = Canvas::new();
        canvas.restore_state();
        assert!(canvas.operations().is_empty());
    }

    #[test]
    fn test_rect_paint_operators() {
        let mut canvas = Canvas::new();
        canvas.rect(0.0, 0.0, 10.0, 10.0, true, true);
        canvas.rect(0.0, 0.0, 10.0, 10.0, true, false);
        canvas.rect(0.0, 0.0, 10.0, 10.0, false, true);
        assert_eq!(operators(&canvas), vec!["re", "B", "re", "f", "re", "S"]);
    }

    #[test]
    fn test_replacement_count() {
        let mut canvas = Canvas::new();
        canvas.draw_string(0.0, 0.0, "✓ ok ✓");
        assert_eq!(canvas.replaced_chars(), 2);
    }
}
