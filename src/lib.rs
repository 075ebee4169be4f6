//! # pospdf
//!
//! Renders a "Piano Operativo di Sicurezza" (construction site safety plan)
//! as a paginated A4 PDF.
//!
//! A [`DocumentRequest`] carries the site address, type of works, number of
//! workers, date and free-text content. The renderer turns it into a fixed
//! layout: a cover with the title block and a field table, then the content
//! section, with an attribution and page number in the footer of every page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pospdf::DocumentRequest;
//!
//! fn main() -> pospdf::Result<()> {
//!     let request = DocumentRequest::from_json(
//!         r#"{"address":"Via Roma 1","workType":"Demolition","numWorkers":5,
//!             "date":"2024-01-01","content":"Safety notes.\nWear helmets."}"#,
//!     )?;
//!
//!     let path = pospdf::render(&request, "out.pdf")?;
//!     println!("{}", path.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Fixed layout**: title block, field table, content paragraphs, footer
//! - **Pagination**: word wrapping, table splitting, page numbering
//! - **Standard fonts**: Helvetica with WinAnsi encoding, no font files needed
//! - **Story exports**: JSON snapshot and plain-text outline of the layout

pub mod compose;
pub mod engine;
pub mod error;
pub mod model;
pub mod render;
pub mod request;

// Re-export commonly used types
pub use engine::{DocTemplate, DocumentInfo, PageContext, PageDecorator, PageGeometry};
pub use error::{Error, Result};
pub use model::{Element, Paragraph, ParagraphStyle, Story, Table};
pub use render::{JsonFormat, PosRenderer, RenderOptions};
pub use request::DocumentRequest;

use std::path::{Path, PathBuf};

/// Render a request to a PDF file with default options.
///
/// # Arguments
///
/// * `request` - Field values for the safety plan
/// * `output_path` - Destination file; its directory must exist
///
/// # Returns
///
/// The path that was written.
pub fn render<P: AsRef<Path>>(request: &DocumentRequest, output_path: P) -> Result<PathBuf> {
    render::render(request, output_path)
}

/// Decode a JSON payload and render it to a PDF file.
///
/// A malformed payload fails before any file is created.
///
/// # Example
///
/// ```no_run
/// use pospdf::render_json;
///
/// let path = render_json(r#"{"address":"Via Roma 1"}"#, "out.pdf").unwrap();
/// ```
pub fn render_json<P: AsRef<Path>>(payload: &str, output_path: P) -> Result<PathBuf> {
    let request = DocumentRequest::from_json(payload)?;
    render(&request, output_path)
}

/// Build the story for a JSON payload.
///
/// # Example
///
/// ```
/// let story = pospdf::story_from_json(r#"{"content":"uno\n\ndue"}"#)?;
/// assert_eq!(story.paragraphs().filter(|p| p.text == "uno").count(), 1);
/// # Ok::<(), pospdf::Error>(())
/// ```
pub fn story_from_json(payload: &str) -> Result<Story> {
    let request = DocumentRequest::from_json(payload)?;
    Ok(compose::build_story(&request))
}

/// Convert a JSON payload to the JSON story snapshot.
pub fn to_json(payload: &str, format: JsonFormat) -> Result<String> {
    let story = story_from_json(payload)?;
    render::to_json(&story, format)
}

/// Convert a JSON payload to the plain-text outline of its story.
pub fn to_text(payload: &str) -> Result<String> {
    let story = story_from_json(payload)?;
    Ok(render::to_text(&story))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_rejects_malformed() {
        let dir = std::env::temp_dir();
        let path = dir.join("pospdf-lib-malformed.pdf");
        let err = render_json("{not json", &path).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_story_from_json_defaults() {
        let story = story_from_json("{}").unwrap();
        let table = story.tables().next().unwrap();
        assert_eq!(table.cell_text(0, 1), Some("N/A"));
        assert_eq!(table.cell_text(2, 1), Some("0"));
    }

    #[test]
    fn test_to_text_lists_values() {
        let text = to_text(r#"{"workType":"Scavi","numWorkers":3}"#).unwrap();
        assert!(text.contains("Tipo lavori:\tScavi"));
        assert!(text.contains("Numero operai:\t3"));
    }

    #[test]
    fn test_to_json_is_stable() {
        let payload = r#"{"address":"Via Roma 1","content":"a\n\nb"}"#;
        let first = to_json(payload, JsonFormat::Compact).unwrap();
        let second = to_json(payload, JsonFormat::Compact).unwrap();
        assert_eq!(first, second);
    }
}
