//! Document analysis and summarization commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use docsense::config::Settings;
use docsense::extract::{DefaultTextExtractor, FormatHint, TextExtractor};
use docsense::repository::SqliteDocumentStore;
use docsense::services::analysis::{AnalyzeRequest, DocumentAnalyzer};
use docsense::services::summary;

/// Run the full analysis pipeline on a file and print the result.
pub async fn cmd_analyze(
    settings: &Settings,
    file: &Path,
    tenant: &str,
    content_type: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("Cannot read {}", file.display()))?;
    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let store = Arc::new(SqliteDocumentStore::open(&settings.database)?);
    let analyzer = DocumentAnalyzer::new(store).with_similar_limit(settings.similar_limit);

    let outcome = analyzer
        .analyze(AnalyzeRequest {
            tenant_id: tenant.to_string(),
            filename,
            content_type,
            bytes,
        })
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
        return Ok(());
    }

    let result = &outcome.result;
    println!("Type:       {}", result.doc_type);
    println!("Confidence: {:.1}%", result.confidence * 100.0);
    println!("Quality:    {}/100", result.quality_score);
    println!("Tags:       {}", result.tags.join(", "));

    if !result.keywords_matched.is_empty() {
        println!("Keywords:   {}", result.keywords_matched.join(", "));
    }

    println!("\nFields:");
    for field in &result.extracted_fields {
        println!(
            "  {:<16} {}  ({:.0}%)",
            field.name,
            field.value.as_deref().unwrap_or("-"),
            field.confidence * 100.0
        );
    }

    if !result.fraud_signals.is_empty() {
        println!("\nFraud signals:");
        for signal in &result.fraud_signals {
            println!(
                "  [{}] {}: {}",
                signal.severity.as_str(),
                signal.label,
                signal.description
            );
        }
    }

    if !result.similar_docs.is_empty() {
        println!("\nSimilar documents:");
        for doc in &result.similar_docs {
            println!(
                "  {} ({}, {:.0}% overlap)",
                doc.filename,
                doc.doc_type,
                doc.similarity * 100.0
            );
        }
    }

    println!("\nPages:");
    for page in &result.page_map {
        println!(
            "  page {:<3} {} ({:.0}%)",
            page.page_number,
            page.doc_type,
            page.confidence * 100.0
        );
    }

    match &outcome.document_id {
        Some(id) => println!("\nStored as document {id}"),
        None => println!("\nWarning: document was not persisted"),
    }

    Ok(())
}

/// Extract text from a file and print a first-N-words summary.
pub async fn cmd_summarize(file: &Path, max_words: usize) -> anyhow::Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("Cannot read {}", file.display()))?;
    if bytes.is_empty() {
        anyhow::bail!("Empty file: {}", file.display());
    }

    let filename = file.display().to_string();
    let format = FormatHint::detect(None, &filename, &bytes);
    let pages = DefaultTextExtractor::new().extract(&bytes, format).await?;
    let text = pages.join("\n");
    if text.trim().is_empty() {
        anyhow::bail!("No text could be extracted from {}", file.display());
    }

    let result = summary::summarize(&text, max_words);
    println!("{}", result.summary);
    println!("\n({} words)", result.word_count);
    Ok(())
}
