//! JSON export of a document story.

use crate::error::{Error, Result};
use crate::model::Story;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a story to JSON.
pub fn to_json(story: &Story, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(story),
        JsonFormat::Compact => serde_json::to_string(story),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
