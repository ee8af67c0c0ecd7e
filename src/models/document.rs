//! Stored document models.
//!
//! Documents are append-only and owned exclusively by the tenant that
//! created them; no component ever reads them across tenant boundaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of characters of extracted text persisted per document.
pub const EXCERPT_LIMIT: usize = 5000;

/// A document to persist after analysis.
#[derive(Debug, Clone)]
pub struct NewDocument {
    /// Owning tenant. Every corpus read filters on this.
    pub tenant_id: String,
    /// Original upload filename.
    pub filename: String,
    /// Predicted document type, as a display string.
    pub doc_type: String,
    /// Extracted text excerpt, capped at [`EXCERPT_LIMIT`] characters.
    pub text_excerpt: String,
}

impl NewDocument {
    /// Build a new document record, truncating the text to the excerpt limit.
    pub fn new(tenant_id: &str, filename: &str, doc_type: &str, text: &str) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            filename: filename.to_string(),
            doc_type: doc_type.to_string(),
            text_excerpt: text.chars().take(EXCERPT_LIMIT).collect(),
        }
    }
}

/// A persisted document, as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub tenant_id: String,
    pub filename: String,
    pub doc_type: String,
    pub text_content: String,
    pub created_at: DateTime<Utc>,
}
