//! Document listing command.

use docsense::config::Settings;
use docsense::repository::{DocumentStore, SqliteDocumentStore};

/// List analyzed documents for a tenant.
pub async fn cmd_documents(settings: &Settings, tenant: &str) -> anyhow::Result<()> {
    let store = SqliteDocumentStore::open(&settings.database)?;
    let docs = store.list_by_tenant(tenant).await?;

    if docs.is_empty() {
        println!("No documents for tenant {tenant}");
        return Ok(());
    }

    println!("{:<38} {:<20} {:<20} created", "id", "filename", "type");
    for doc in docs {
        println!(
            "{:<38} {:<20} {:<20} {}",
            doc.id,
            doc.filename,
            doc.doc_type,
            doc.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}
