//! Table types.

use super::{Alignment, Color, StandardFont};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Number of header rows repeated after a page split (0 = no header)
    pub header_rows: u8,

    /// Column widths in points (optional, equal split of the frame otherwise)
    pub column_widths: Option<Vec<f32>>,

    /// Table style
    pub style: TableStyle,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            header_rows: 0,
            column_widths: None,
            style: TableStyle::default(),
        }
    }

    /// Create a table with fixed column widths.
    pub fn with_column_widths(widths: Vec<f32>) -> Self {
        Self {
            column_widths: Some(widths),
            ..Self::new()
        }
    }

    /// Set the style and return self.
    pub fn styled(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (widest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get header rows.
    pub fn header(&self) -> &[TableRow] {
        let count = (self.header_rows as usize).min(self.rows.len());
        &self.rows[..count]
    }

    /// Text of the cell at (row, column), if present.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(column))
            .map(|c| c.text.as_str())
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell text
    pub text: String,
}

impl TableCell {
    /// Create a new cell with text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Table-wide styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStyle {
    /// Font size for every cell, in points
    pub font_size: f32,

    /// Padding on every side of every cell, in points
    pub padding: f32,

    /// Grid drawn around every cell
    pub grid: Option<GridLine>,

    /// Per-column styles; columns past the end use the default column style
    pub columns: Vec<ColumnStyle>,
}

impl TableStyle {
    /// Style of the given column.
    pub fn column(&self, index: usize) -> ColumnStyle {
        self.columns.get(index).copied().unwrap_or_default()
    }

    /// Distance between baselines inside cells.
    pub fn leading(&self) -> f32 {
        self.font_size * 1.2
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            padding: 6.0,
            grid: None,
            columns: Vec::new(),
        }
    }
}

/// Styling of one table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnStyle {
    /// Cell background
    pub background: Option<Color>,

    /// Text color
    pub text_color: Color,

    /// Font face
    pub font: StandardFont,

    /// Text alignment within the cell
    pub alignment: Alignment,
}

/// A stroked grid line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    /// Line width in points
    pub width: f32,

    /// Line color
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_table_with_data() {
        let mut table = Table::with_column_widths(vec![100.0, 200.0]);
        table.header_rows = 1;
        table.add_row(TableRow::from_strings(["Name", "Age"]));
        table.add_row(TableRow::from_strings(["Alice", "30"]));
        table.add_row(TableRow::from_strings(["Bob", "25"]));

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.header().len(), 1);
        assert_eq!(table.cell_text(2, 0), Some("Bob"));
        assert_eq!(table.cell_text(3, 0), None);
        assert_eq!(table.plain_text(), "Name\tAge\nAlice\t30\nBob\t25");
    }

    #[test]
    fn test_header_rows_beyond_row_count() {
        let mut table = Table::new();
        table.header_rows = 3;
        table.add_row(TableRow::from_strings(["only"]));
        assert_eq!(table.header().len(), 1);
    }

    #[test]
    fn test_column_style_fallback() {
        let style = TableStyle {
            columns: vec![ColumnStyle {
                background: Some(Color::GREY),
                text_color: Color::WHITESMOKE,
                font: StandardFont::HelveticaBold,
                alignment: Alignment::Left,
            }],
            ..TableStyle::default()
        };
        assert_eq!(style.column(0).font, StandardFont::HelveticaBold);
        assert_eq!(style.column(5), ColumnStyle::default());
    }

    #[test]
    fn test_cell_text() {
        let cell = TableCell::text("Hello");
        assert!(!cell.is_empty());
        assert!(TableCell::text("  ").is_empty());
    }
}
