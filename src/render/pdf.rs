//! Safety-plan PDF renderer.

use super::options::{RenderOptions, DEFAULT_TITLE};
use crate::compose::{build_story, draw_footer};
use crate::engine::{DocTemplate, DocumentInfo, PageGeometry, CM};
use crate::error::Result;
use crate::model::Story;
use crate::request::DocumentRequest;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Page margin on every side.
pub const MARGIN: f32 = 2.0 * CM;

/// Fixed page template: A4 with 2 cm margins.
pub fn page_geometry() -> PageGeometry {
    PageGeometry::a4().with_margins(MARGIN)
}

/// Renders document requests to PDF.
///
/// # Example
///
/// ```no_run
/// use pospdf::{DocumentRequest, PosRenderer, RenderOptions};
///
/// let request = DocumentRequest::new().with_address("Via Roma 1");
/// let renderer = PosRenderer::new(RenderOptions::default().with_compression(false));
/// let path = renderer.render(&request, "out.pdf")?;
/// println!("{}", path.display());
/// # Ok::<(), pospdf::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PosRenderer {
    options: RenderOptions,
}

impl PosRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Rendering options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Build the story for a request without producing a PDF.
    pub fn story(&self, request: &DocumentRequest) -> Story {
        build_story(request)
    }

    /// Information dictionary for a request. Without an explicit title the
    /// document is titled `POS - <address>`, or the generic title when the
    /// request has no address.
    pub fn document_info(&self, request: &DocumentRequest) -> DocumentInfo {
        let mut info = self.options.info.clone();
        if info.title.is_none() {
            info.title = Some(match &request.address {
                Some(address) => format!("POS - {}", address),
                None => DEFAULT_TITLE.to_string(),
            });
        }
        info
    }

    fn template(&self, request: &DocumentRequest) -> DocTemplate {
        DocTemplate::new(page_geometry())
            .with_info(self.document_info(request))
            .with_compression(self.options.compress)
    }

    /// Number of pages the request renders to.
    pub fn page_count(&self, request: &DocumentRequest) -> usize {
        self.template(request).page_count(&self.story(request))
    }

    /// Render a request to PDF bytes.
    pub fn render_to_bytes(&self, request: &DocumentRequest) -> Result<Vec<u8>> {
        let story = self.story(request);
        self.template(request).build(&story, &draw_footer)
    }

    /// Render a request and write the PDF to `output_path`.
    ///
    /// The document is complete in memory before the file is created, so
    /// a failure never leaves a partial file behind. Parent directories are
    /// not created.
    pub fn render<P: AsRef<Path>>(
        &self,
        request: &DocumentRequest,
        output_path: P,
    ) -> Result<PathBuf> {
        let path = output_path.as_ref();
        let bytes = self.render_to_bytes(request)?;
        fs::write(path, &bytes)?;

        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(path.to_path_buf())
    }
}

/// Render a request to `output_path` with default options.
pub fn render<P: AsRef<Path>>(request: &DocumentRequest, output_path: P) -> Result<PathBuf> {
    PosRenderer::default().render(request, output_path)
}

/// Render a request to PDF bytes with default options.
pub fn render_to_bytes(request: &DocumentRequest) -> Result<Vec<u8>> {
    PosRenderer::default().render_to_bytes(request)
}
