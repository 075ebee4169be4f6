//! PDF object assembly.

use super::{DocumentInfo, PageGeometry};
use crate::error::Result;
use crate::model::StandardFont;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use std::io::Write;

const PDF_VERSION: &str = "1.7";

/// Serialize painted pages into a complete PDF file.
pub(crate) fn write_pdf(
    pages: Vec<Vec<Operation>>,
    geometry: &PageGeometry,
    info: &DocumentInfo,
    compress: bool,
) -> Result<Vec<u8>> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in StandardFont::ALL {
        fonts.set(
            font.resource_name(),
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            },
        );
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let media_box: Vec<Object> = vec![
        0_i64.into(),
        0_i64.into(),
        geometry.width.into(),
        geometry.height.into(),
    ];

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations }.encode()?;
        let content_id = doc.add_object(content_stream(content, compress)?);
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box.clone(),
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(info_dictionary(info));
    doc.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

fn content_stream(content: Vec<u8>, compress: bool) -> Result<Stream> {
    if !compress {
        return Ok(Stream::new(Dictionary::new(), content));
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&content)?;
    let compressed = encoder.finish()?;
    Ok(Stream::new(dictionary! { "Filter" => "FlateDecode" }, compressed))
}

fn info_dictionary(info: &DocumentInfo) -> Dictionary {
    let mut dict = Dictionary::new();
    let entries = [
        ("Title", &info.title),
        ("Author", &info.author),
        ("Subject", &info.subject),
        ("Creator", &info.creator),
        ("Producer", &info.producer),
    ];
    for (key, value) in entries {
        if let Some(value) = value {
            dict.set(key, text_string(value));
        }
    }
    let created = info.creation_date.unwrap_or_else(chrono::Utc::now);
    dict.set(
        "CreationDate",
        Object::string_literal(created.format("D:%Y%m%d%H%M%S+00'00'").to_string()),
    );
    dict
}

/// A PDF text string: literal for ASCII, UTF-16BE with byte order mark
/// otherwise.
fn text_string(value: &str) -> Object {
    if value.is_ascii() {
        return Object::string_literal(value);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in value.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}
