//! SQLite-backed document store.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{NewDocument, StoredDocument};

use super::{DocumentStore, StoreError};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS documents (
    id TEXT PRIMARY KEY,
    tenant_id TEXT NOT NULL,
    filename TEXT NOT NULL,
    doc_type TEXT NOT NULL,
    text_content TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_documents_tenant ON documents(tenant_id);
";

/// Document store on a single SQLite database file.
///
/// The documents table is append-only; rowid order doubles as insertion
/// order for `list_by_tenant`.
pub struct SqliteDocumentStore {
    conn: Mutex<Connection>,
}

impl SqliteDocumentStore {
    /// Open (or create) the database at the given path and apply the schema.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (used by tests).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn save(&self, doc: NewDocument) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339();
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO documents (id, tenant_id, filename, doc_type, text_content, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id,
                doc.tenant_id,
                doc.filename,
                doc.doc_type,
                doc.text_excerpt,
                created_at
            ],
        )?;
        Ok(id)
    }

    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, tenant_id, filename, doc_type, text_content, created_at
             FROM documents WHERE tenant_id = ?1 ORDER BY rowid",
        )?;
        let rows = stmt.query_map(params![tenant_id], |row| {
            Ok(StoredDocument {
                id: row.get(0)?,
                tenant_id: row.get(1)?,
                filename: row.get(2)?,
                doc_type: row.get(3)?,
                text_content: row.get(4)?,
                created_at: parse_created_at(&row.get::<_, String>(5)?),
            })
        })?;
        let mut docs = Vec::new();
        for row in rows {
            docs.push(row?);
        }
        Ok(docs)
    }
}

/// Parse a stored RFC 3339 timestamp, defaulting to Unix epoch on error.
fn parse_created_at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}
