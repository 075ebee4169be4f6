//! Flowing a story into pages.
//!
//! Positions are computed in layout space: x from the left page edge, y
//! from the top page edge growing downwards. Painting flips y into PDF user
//! space.

use super::fonts::{string_width, ASCENT, DESCENT};
use super::wrap::wrap_text;
use super::PageGeometry;
use crate::model::{
    Alignment, Color, Element, GridLine, Paragraph, StandardFont, Story, Table, TableStyle,
};
use log::warn;

/// Items positioned on one page.
#[derive(Debug, Clone, Default)]
pub(crate) struct PageLayout {
    pub items: Vec<PlacedItem>,
}

impl PageLayout {
    /// Text of every placed line, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            PlacedItem::Text { text, .. } => Some(text.as_str()),
            PlacedItem::Rect { .. } => None,
        })
    }
}

/// A positioned drawing primitive.
#[derive(Debug, Clone)]
pub(crate) enum PlacedItem {
    Text {
        x: f32,
        baseline: f32,
        text: String,
        font: StandardFont,
        size: f32,
        color: Color,
    },
    Rect {
        x: f32,
        top: f32,
        width: f32,
        height: f32,
        fill: Option<Color>,
        stroke: Option<GridLine>,
    },
}

/// Lay out the whole story. Always yields at least one page.
pub(crate) fn paginate(story: &Story, geometry: &PageGeometry) -> Vec<PageLayout> {
    let mut paginator = Paginator::new(geometry);
    for element in &story.elements {
        match element {
            Element::Paragraph(paragraph) => paginator.place_paragraph(paragraph),
            Element::Spacer { height } => paginator.place_spacer(*height),
            Element::Table(table) => paginator.place_table(table),
            Element::PageBreak => paginator.page_break(),
        }
    }
    paginator.finish()
}

/// Offset from the top of a line box to its baseline, centering the glyph
/// box (ascender to descender) within the leading.
fn baseline_offset(size: f32, leading: f32) -> f32 {
    (leading + size * (ASCENT + DESCENT)) / 2.0
}

fn aligned_x(left: f32, available: f32, line_width: f32, alignment: Alignment) -> f32 {
    match alignment {
        Alignment::Left => left,
        Alignment::Center => left + (available - line_width) / 2.0,
        Alignment::Right => left + available - line_width,
    }
}

struct Paginator<'a> {
    geometry: &'a PageGeometry,
    pages: Vec<PageLayout>,
    current: PageLayout,
    /// Vertical space consumed in the current frame
    cursor: f32,
}

impl<'a> Paginator<'a> {
    fn new(geometry: &'a PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: PageLayout::default(),
            cursor: 0.0,
        }
    }

    fn at_top(&self) -> bool {
        self.cursor <= 0.0
    }

    fn available(&self) -> f32 {
        self.geometry.frame_height() - self.cursor
    }

    /// Current y position in layout space.
    fn y(&self) -> f32 {
        self.geometry.margin_top + self.cursor
    }

    fn advance(&mut self, height: f32) {
        self.cursor = (self.cursor + height).min(self.geometry.frame_height());
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor = 0.0;
    }

    fn page_break(&mut self) {
        if !self.at_top() {
            self.new_page();
        }
    }

    fn place_spacer(&mut self, height: f32) {
        if self.at_top() {
            return;
        }
        if height > self.available() {
            self.new_page();
            return;
        }
        self.cursor += height;
    }

    fn place_paragraph(&mut self, paragraph: &Paragraph) {
        let style = &paragraph.style;
        let left = self.geometry.margin_left;
        let width = self.geometry.frame_width();
        let lines = wrap_text(&paragraph.text, style.font, style.font_size, width);

        if !self.at_top() {
            self.advance(style.space_before);
        }

        for line in lines {
            if style.leading > self.available() && !self.at_top() {
                self.new_page();
            }
            let line_width = string_width(&line, style.font, style.font_size);
            let x = aligned_x(left, width, line_width, style.alignment);
            let baseline = self.y() + baseline_offset(style.font_size, style.leading);
            self.current.items.push(PlacedItem::Text {
                x,
                baseline,
                text: line,
                font: style.font,
                size: style.font_size,
                color: style.color,
            });
            self.cursor += style.leading;
        }

        self.advance(style.space_after);
    }

    fn place_table(&mut self, table: &Table) {
        if table.is_empty() {
            return;
        }

        let frame_width = self.geometry.frame_width();
        let widths = column_widths(table, frame_width);
        let total: f32 = widths.iter().sum();
        let left = self.geometry.margin_left + (frame_width - total).max(0.0) / 2.0;

        let rows: Vec<MeasuredRow> = table
            .rows
            .iter()
            .map(|row| {
                let texts: Vec<&str> = row.cells.iter().map(|c| c.text.as_str()).collect();
                MeasuredRow::measure(&texts, &widths, &table.style)
            })
            .collect();
        let header_count = table.header().len();

        let mut segment = TableSegment::default();
        for (index, row) in rows.iter().enumerate() {
            if row.height > self.available() && !self.at_top() {
                segment.flush_into(&mut self.current);
                self.new_page();
                if index >= header_count {
                    for header in &rows[..header_count] {
                        self.place_row(&mut segment, header, left, &widths, &table.style);
                    }
                }
            }
            if row.height > self.geometry.frame_height() {
                warn!(
                    "table row {} is {:.1}pt tall and overflows the {:.1}pt frame",
                    index,
                    row.height,
                    self.geometry.frame_height()
                );
            }
            self.place_row(&mut segment, row, left, &widths, &table.style);
        }
        segment.flush_into(&mut self.current);
    }

    fn place_row(
        &mut self,
        segment: &mut TableSegment,
        row: &MeasuredRow,
        left: f32,
        widths: &[f32],
        style: &TableStyle,
    ) {
        let top = self.y();
        let leading = style.leading();
        let mut x = left;

        for (column, &width) in widths.iter().enumerate() {
            let column_style = style.column(column);

            if let Some(fill) = column_style.background {
                segment.backgrounds.push(PlacedItem::Rect {
                    x,
                    top,
                    width,
                    height: row.height,
                    fill: Some(fill),
                    stroke: None,
                });
            }

            let inner_width = (width - 2.0 * style.padding).max(0.0);
            if let Some(lines) = row.cells.get(column) {
                for (line_index, line) in lines.iter().enumerate() {
                    let line_width = string_width(line, column_style.font, style.font_size);
                    segment.texts.push(PlacedItem::Text {
                        x: aligned_x(x + style.padding, inner_width, line_width, column_style.alignment),
                        baseline: top
                            + style.padding
                            + line_index as f32 * leading
                            + baseline_offset(style.font_size, leading),
                        text: line.clone(),
                        font: column_style.font,
                        size: style.font_size,
                        color: column_style.text_color,
                    });
                }
            }

            if let Some(grid) = style.grid {
                segment.grid.push(PlacedItem::Rect {
                    x,
                    top,
                    width,
                    height: row.height,
                    fill: None,
                    stroke: Some(grid),
                });
            }

            x += width;
        }

        self.cursor += row.height;
    }

    fn finish(mut self) -> Vec<PageLayout> {
        if !self.current.items.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Resolve the width of every column. Missing or absent widths share the
/// frame width left over by the explicit ones.
fn column_widths(table: &Table, frame_width: f32) -> Vec<f32> {
    let columns = table.column_count();
    let explicit = table.column_widths.as_deref().unwrap_or(&[]);

    let given: Vec<Option<f32>> = (0..columns).map(|c| explicit.get(c).copied()).collect();
    let used: f32 = given.iter().flatten().sum();
    let missing = given.iter().filter(|w| w.is_none()).count();
    let share = if missing > 0 {
        (frame_width - used).max(0.0) / missing as f32
    } else {
        0.0
    };

    given.into_iter().map(|w| w.unwrap_or(share)).collect()
}

/// A table row with its cells wrapped and its height known.
struct MeasuredRow {
    cells: Vec<Vec<String>>,
    height: f32,
}

impl MeasuredRow {
    fn measure(texts: &[&str], widths: &[f32], style: &TableStyle) -> Self {
        let cells: Vec<Vec<String>> = widths
            .iter()
            .enumerate()
            .map(|(column, &width)| {
                let text = texts.get(column).copied().unwrap_or("");
                let inner = (width - 2.0 * style.padding).max(0.0);
                wrap_text(text, style.column(column).font, style.font_size, inner)
            })
            .collect();
        let max_lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
        let height = max_lines as f32 * style.leading() + 2.0 * style.padding;
        Self { cells, height }
    }
}

/// Table items on one page, kept in layers so grid lines are painted over
/// every background.
#[derive(Default)]
struct TableSegment {
    backgrounds: Vec<PlacedItem>,
    texts: Vec<PlacedItem>,
    grid: Vec<PlacedItem>,
}

impl TableSegment {
    fn flush_into(&mut self, page: &mut PageLayout) {
        page.items.append(&mut self.backgrounds);
        page.items.append(&mut self.texts);
        page.items.append(&mut self.grid);
    }
}
