//! Rendering options and configuration.

use crate::engine::DocumentInfo;
use chrono::{DateTime, Utc};

/// Document title used when the request names no site; also the subject.
pub const DEFAULT_TITLE: &str = "Piano Operativo di Sicurezza";

/// Application recorded as author and creator.
pub const APPLICATION: &str = "Palladia";

/// Options for rendering a safety-plan PDF.
///
/// Page geometry is fixed (A4, 2 cm margins) and is not an option.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Flate-compress page content streams
    pub compress: bool,

    /// Document information dictionary. A `None` title is derived from the
    /// request's site address.
    pub info: DocumentInfo,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.info.title = Some(title.into());
        self
    }

    /// Set the document subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.info.subject = Some(subject.into());
        self
    }

    /// Pin the creation date (reproducible output).
    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.info.creation_date = Some(date);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            compress: true,
            info: DocumentInfo {
                title: None,
                author: Some(APPLICATION.to_string()),
                subject: Some(DEFAULT_TITLE.to_string()),
                creator: Some(APPLICATION.to_string()),
                producer: Some(format!("pospdf {}", env!("CARGO_PKG_VERSION"))),
                creation_date: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.compress);
        assert!(options.info.title.is_none());
        assert_eq!(options.info.subject.as_deref(), Some(DEFAULT_TITLE));
        assert_eq!(options.info.creator.as_deref(), Some("Palladia"));
        assert!(options.info.creation_date.is_none());
    }

    #[test]
    fn test_builder() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let options = RenderOptions::new()
            .with_compression(false)
            .with_title("POS Via Roma 1")
            .with_subject("Demolition")
            .with_creation_date(date);

        assert!(!options.compress);
        assert_eq!(options.info.title.as_deref(), Some("POS Via Roma 1"));
        assert_eq!(options.info.subject.as_deref(), Some("Demolition"));
        assert_eq!(options.info.creation_date, Some(date));
    }
}
