//! Rendering module: safety-plan PDF output and story exports.

mod json;
mod options;
mod pdf;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, APPLICATION, DEFAULT_TITLE};
pub use pdf::{page_geometry, render, render_to_bytes, PosRenderer, MARGIN};
pub use text::to_text;
