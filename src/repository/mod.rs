//! Repository layer for document persistence.
//!
//! The analysis pipeline has no direct storage dependency: it talks to the
//! [`DocumentStore`] trait and can be tested with the in-memory fake.

mod memory;
mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewDocument, StoredDocument};

pub use memory::InMemoryDocumentStore;
pub use sqlite::SqliteDocumentStore;

/// Errors from document store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Store task failed: {0}")]
    Task(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}

/// Tenant-scoped, append-only document persistence.
///
/// `list_by_tenant` returns documents in insertion order; the similarity
/// scan depends on that order for stable tie-breaking.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a document and return its newly assigned id.
    async fn save(&self, doc: NewDocument) -> Result<String, StoreError>;

    /// All documents owned by the given tenant, oldest first.
    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<StoredDocument>, StoreError>;
}
