//! Formatting engine: text flow, pagination and PDF output.
//!
//! The engine consumes a [`Story`] and produces PDF bytes. Callers decorate
//! pages (footers, page numbers) through a [`PageDecorator`], which the engine
//! invokes once per page with the page number and geometry.
//!
//! # Example
//!
//! ```
//! use pospdf::engine::{Canvas, DocTemplate, PageContext, PageGeometry, CM};
//! use pospdf::model::{Paragraph, Story};
//!
//! let mut story = Story::new();
//! story.add_paragraph(Paragraph::normal("Hello"));
//!
//! let footer = |canvas: &mut Canvas, page: &PageContext| {
//!     canvas.draw_string(page.geometry.margin_left, CM, &format!("{}", page.number));
//! };
//!
//! let template = DocTemplate::new(PageGeometry::a4().with_margins(2.0 * CM));
//! let pdf = template.build(&story, &footer)?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! # Ok::<(), pospdf::Error>(())
//! ```

mod canvas;
pub mod fonts;
mod layout;
pub mod wrap;
mod writer;

pub use canvas::Canvas;

use crate::error::Result;
use crate::model::Story;
use chrono::{DateTime, Utc};
use layout::{PageLayout, PlacedItem};
use log::{debug, trace, warn};

/// Points per centimeter.
pub const CM: f32 = 72.0 / 2.54;

/// Page size and margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Top margin
    pub margin_top: f32,
    /// Right margin
    pub margin_right: f32,
    /// Bottom margin
    pub margin_bottom: f32,
    /// Left margin
    pub margin_left: f32,
}

impl PageGeometry {
    /// Create a page without margins.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margin_top: 0.0,
            margin_right: 0.0,
            margin_bottom: 0.0,
            margin_left: 0.0,
        }
    }

    /// ISO A4 portrait (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(21.0 * CM, 29.7 * CM)
    }

    /// Set the same margin on every side.
    pub fn with_margins(mut self, margin: f32) -> Self {
        self.margin_top = margin;
        self.margin_right = margin;
        self.margin_bottom = margin;
        self.margin_left = margin;
        self
    }

    /// Width available to flowing content.
    pub fn frame_width(&self) -> f32 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    /// Height available to flowing content.
    pub fn frame_height(&self) -> f32 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }
}

/// Engine state handed to a [`PageDecorator`].
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    /// Page number (1-indexed)
    pub number: u32,
    /// Page geometry
    pub geometry: PageGeometry,
}

/// Draws fixed page furniture (headers, footers) on every page.
pub trait PageDecorator {
    /// Called once per page before the page content is painted.
    fn decorate(&self, canvas: &mut Canvas, page: &PageContext);
}

impl<F> PageDecorator for F
where
    F: Fn(&mut Canvas, &PageContext),
{
    fn decorate(&self, canvas: &mut Canvas, page: &PageContext) {
        self(canvas, page)
    }
}

/// Document information dictionary entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// PDF producer
    pub producer: Option<String>,
    /// Creation date (`None` = time of build)
    pub creation_date: Option<DateTime<Utc>>,
}

/// Lays out stories on a fixed page template and writes PDF.
#[derive(Debug, Clone)]
pub struct DocTemplate {
    geometry: PageGeometry,
    info: DocumentInfo,
    compress: bool,
}

impl DocTemplate {
    /// Create a template with the given geometry.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            info: DocumentInfo::default(),
            compress: true,
        }
    }

    /// Set document information and return self.
    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    /// Enable or disable Flate compression of content streams.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Page geometry.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Number of pages the story occupies.
    pub fn page_count(&self, story: &Story) -> usize {
        layout::paginate(story, &self.geometry).len()
    }

    /// Lay out the story, decorate every page and serialize the PDF.
    pub fn build(&self, story: &Story, decorator: &dyn PageDecorator) -> Result<Vec<u8>> {
        let pages = layout::paginate(story, &self.geometry);
        debug!(
            "laid out {} elements on {} pages",
            story.len(),
            pages.len()
        );

        let mut contents = Vec::with_capacity(pages.len());
        for (index, page) in pages.iter().enumerate() {
            let context = PageContext {
                number: index as u32 + 1,
                geometry: self.geometry,
            };

            let mut canvas = Canvas::new();
            decorator.decorate(&mut canvas, &context);
            paint(&mut canvas, page, &self.geometry);

            if canvas.replaced_chars() > 0 {
                warn!(
                    "page {}: {} characters outside WinAnsi were replaced",
                    context.number,
                    canvas.replaced_chars()
                );
            }
            trace!(
                "page {}: {} items ({} text lines), {} operations",
                context.number,
                page.items.len(),
                page.texts().count(),
                canvas.operations().len()
            );
            contents.push(canvas.into_operations());
        }

        writer::write_pdf(contents, &self.geometry, &self.info, self.compress)
    }
}

/// Paint laid-out items, flipping layout y into PDF user space.
fn paint(canvas: &mut Canvas, page: &PageLayout, geometry: &PageGeometry) {
    canvas.save_state();
    for item in &page.items {
        match item {
            PlacedItem::Text {
                x,
                baseline,
                text,
                font,
                size,
                color,
            } => {
                if text.is_empty() {
                    continue;
                }
                canvas.set_fill_color(*color);
                canvas.set_font(*font, *size);
                canvas.draw_string(*x, geometry.height - baseline, text);
            }
            PlacedItem::Rect {
                x,
                top,
                width,
                height,
                fill,
                stroke,
            } => {
                if let Some(color) = fill {
                    canvas.set_fill_color(*color);
                }
                if let Some(grid) = stroke {
                    canvas.set_stroke_color(grid.color);
                    canvas.set_line_width(grid.width);
                }
                canvas.rect(
                    *x,
                    geometry.height - top - height,
                    *width,
                    *height,
                    fill.is_some(),
                    stroke.is_some(),
                );
            }
        }
    }
    canvas.restore_state();
}
