//! Cover page: title block and field table.

use crate::engine::CM;
use crate::model::{
    Alignment, Color, ColumnStyle, Element, GridLine, Paragraph, ParagraphStyle, StandardFont,
    Table, TableRow, TableStyle,
};
use crate::request::DocumentRequest;

/// Document title.
pub const TITLE: &str = "PIANO OPERATIVO DI SICUREZZA";

/// Regulatory citation under the title.
pub const CITATION: &str =
    "(Allegato XV, art. 89 e art. 96 del D.Lgs. 9 aprile 2008, n. 81 e s.m.i.)";

/// Labels of the field table rows, in order.
pub const FIELD_LABELS: [&str; 4] = ["Oggetto:", "Tipo lavori:", "Numero operai:", "Data:"];

const TITLE_COLOR: &str = "#003366";

/// Title, citation and the gap before the field table.
pub fn title_block() -> Vec<Element> {
    let title_style = ParagraphStyle::heading1()
        .derive("CustomTitle")
        .with_font(StandardFont::HelveticaBold)
        .with_font_size(24.0)
        .with_color(Color::from_hex(TITLE_COLOR).unwrap_or_default())
        .with_alignment(Alignment::Center)
        .with_space_after(30.0);

    vec![
        Element::Paragraph(Paragraph::new(TITLE, title_style)),
        Element::Paragraph(Paragraph::normal(CITATION)),
        Element::Spacer { height: 40.0 },
    ]
}

/// The label/value table summarizing the request.
pub fn field_table(request: &DocumentRequest) -> Table {
    let values = [
        request.address().to_string(),
        request.work_type().to_string(),
        request.num_workers().to_string(),
        request.date().to_string(),
    ];

    let mut table = Table::with_column_widths(vec![4.0 * CM, 10.0 * CM]).styled(field_table_style());
    for (label, value) in FIELD_LABELS.iter().zip(values) {
        table.add_row(TableRow::from_strings([label.to_string(), value]));
    }
    table
}

fn field_table_style() -> TableStyle {
    TableStyle {
        font_size: 10.0,
        padding: 12.0,
        grid: Some(GridLine {
            width: 1.0,
            color: Color::BLACK,
        }),
        columns: vec![
            ColumnStyle {
                background: Some(Color::GREY),
                text_color: Color::WHITESMOKE,
                font: StandardFont::HelveticaBold,
                alignment: Alignment::Left,
            },
            ColumnStyle {
                background: Some(Color::BEIGE),
                text_color: Color::BLACK,
                font: StandardFont::Helvetica,
                alignment: Alignment::Left,
            },
        ],
    }
}
