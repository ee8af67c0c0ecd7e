//! Text extraction seam.
//!
//! The analysis pipeline consumes extraction through the [`TextExtractor`]
//! trait and owns none of its internals. [`DefaultTextExtractor`] handles
//! the two supported formats: PDF (per-page, pure Rust) and plain text
//! (strict UTF-8).

mod pdf;
mod text;

use async_trait::async_trait;
use thiserror::Error;

/// Declared or detected input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    Pdf,
    Text,
}

impl FormatHint {
    /// Derive the format from the declared content type, the filename
    /// suffix, or the content magic bytes, in that order.
    pub fn detect(content_type: Option<&str>, filename: &str, bytes: &[u8]) -> Self {
        if let Some(ct) = content_type {
            let base = ct.split(';').next().unwrap_or(ct).trim();
            if base.eq_ignore_ascii_case("application/pdf") {
                return Self::Pdf;
            }
        }
        let guessed = mime_guess::from_path(filename).first_raw();
        if guessed == Some("application/pdf") {
            return Self::Pdf;
        }
        if infer::get(bytes).map(|t| t.mime_type()) == Some("application/pdf") {
            return Self::Pdf;
        }
        Self::Text
    }
}

/// Errors from text extraction backends.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Input bytes are not valid UTF-8 text")]
    InvalidUtf8,

    #[error("Unreadable PDF: {0}")]
    Pdf(String),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Raw bytes plus a format hint in, ordered per-page text out.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: &[u8], format: FormatHint) -> Result<Vec<String>, ExtractError>;
}

/// Default extractor covering the two supported formats.
#[derive(Debug, Clone, Default)]
pub struct DefaultTextExtractor;

impl DefaultTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for DefaultTextExtractor {
    async fn extract(&self, bytes: &[u8], format: FormatHint) -> Result<Vec<String>, ExtractError> {
        match format {
            FormatHint::Pdf => pdf::extract_pages(bytes).await,
            FormatHint::Text => text::extract_pages(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_content_type() {
        let hint = FormatHint::detect(Some("application/pdf"), "upload.bin", b"whatever");
        assert_eq!(hint, FormatHint::Pdf);
    }

    #[test]
    fn test_detect_from_filename_suffix() {
        let hint = FormatHint::detect(None, "scan.pdf", b"not really pdf bytes");
        assert_eq!(hint, FormatHint::Pdf);
    }

    #[test]
    fn test_detect_from_magic_bytes() {
        let hint = FormatHint::detect(None, "upload", b"%PDF-1.7\n...");
        assert_eq!(hint, FormatHint::Pdf);
    }

    #[test]
    fn test_detect_defaults_to_text() {
        let hint = FormatHint::detect(Some("text/plain"), "notes.txt", b"plain words");
        assert_eq!(hint, FormatHint::Text);
    }

    #[tokio::test]
    async fn test_plain_text_single_page() {
        let extractor = DefaultTextExtractor::new();
        let pages = extractor
            .extract(b"hello world", FormatHint::Text)
            .await
            .unwrap();
        assert_eq!(pages, vec!["hello world".to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_rejected() {
        let extractor = DefaultTextExtractor::new();
        let err = extractor
            .extract(&[0xff, 0xfe, 0x00], FormatHint::Text)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUtf8));
    }
}
