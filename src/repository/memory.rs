//! In-memory document store for tests and demos.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewDocument, StoredDocument};

use super::{DocumentStore, StoreError};

/// Process-local store backed by a vector in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<StoredDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored documents across all tenants.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn save(&self, doc: NewDocument) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let stored = StoredDocument {
            id: id.clone(),
            tenant_id: doc.tenant_id,
            filename: doc.filename,
            doc_type: doc.doc_type,
            text_content: doc.text_excerpt,
            created_at: Utc::now(),
        };
        self.documents.write().await.push(stored);
        Ok(id)
    }

    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<StoredDocument>, StoreError> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .filter(|d| d.tenant_id == tenant_id)
            .cloned()
            .collect())
    }
}
