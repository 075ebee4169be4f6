//! Page footer.

use crate::engine::{Canvas, PageContext, CM};
use crate::model::StandardFont;

/// Attribution printed at the bottom left of every page.
pub const ATTRIBUTION: &str = "Documento generato con Palladia";

const FOOTER_SIZE: f32 = 8.0;

/// Footer text for a page number.
pub fn page_label(number: u32) -> String {
    format!("Pagina {}", number)
}

/// Draw the footer: attribution on the left margin, page number on the
/// right margin, both 1 cm above the bottom edge.
pub fn draw_footer(canvas: &mut Canvas, page: &PageContext) {
    let geometry = &page.geometry;

    canvas.save_state();
    canvas.set_font(StandardFont::Helvetica, FOOTER_SIZE);
    canvas.draw_string(geometry.margin_left, CM, ATTRIBUTION);
    canvas.draw_right_string(
        geometry.width - geometry.margin_right,
        CM,
        &page_label(page.number),
    );
    canvas.restore_state();
}
