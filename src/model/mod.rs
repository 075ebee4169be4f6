//! Story model types for safety-plan documents.
//!
//! This module defines the intermediate representation that bridges the
//! section builders and the formatting engine. A [`Story`] is an ordered list
//! of [`Element`]s; the engine lays it out into pages.

mod paragraph;
mod story;
mod style;
mod table;

pub use paragraph::{Paragraph, ParagraphStyle};
pub use story::{Element, Story};
pub use style::{Alignment, Color, StandardFont};
pub use table::{ColumnStyle, GridLine, Table, TableCell, TableRow, TableStyle};
