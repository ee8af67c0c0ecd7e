//! Analysis pipeline orchestration.
//!
//! One synchronous pass per document: extract, classify, score, extract
//! fields, flag fraud, rate quality, tag, map pages, rank similar
//! documents, then persist. Only extraction and persistence await; every
//! stage in between is a pure function. Persistence is best-effort: the
//! computed result is returned even when the save fails.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::extract::{DefaultTextExtractor, FormatHint, TextExtractor};
use crate::models::{AnalysisResult, EngineBreakdown, ExtractionField, NewDocument};
use crate::repository::DocumentStore;
use crate::services::scoring::{PlaceholderSemanticScorer, SemanticScorer};
use crate::services::{classify, fields, fraud, quality, scoring, similarity, tags};

/// An upload to analyze on behalf of a tenant.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub tenant_id: String,
    pub filename: String,
    /// Declared content type, if the transport provided one.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Analysis result plus the id assigned by persistence, when it succeeded.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    pub document_id: Option<String>,
}

/// The analysis pipeline with its external collaborators.
pub struct DocumentAnalyzer {
    extractor: Arc<dyn TextExtractor>,
    semantic: Arc<dyn SemanticScorer>,
    store: Arc<dyn DocumentStore>,
    similar_limit: usize,
}

impl DocumentAnalyzer {
    /// Build an analyzer with the default extractor and the placeholder
    /// semantic scorer.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            extractor: Arc::new(DefaultTextExtractor::new()),
            semantic: Arc::new(PlaceholderSemanticScorer),
            store,
            similar_limit: similarity::DEFAULT_SIMILAR_LIMIT,
        }
    }

    /// Replace the text extraction backend.
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replace the semantic scorer (the learned-model extension point).
    pub fn with_semantic_scorer(mut self, semantic: Arc<dyn SemanticScorer>) -> Self {
        self.semantic = semantic;
        self
    }

    /// Change the number of similar documents returned.
    pub fn with_similar_limit(mut self, limit: usize) -> Self {
        self.similar_limit = limit;
        self
    }

    /// Run the full pipeline on one upload.
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisOutcome, AnalysisError> {
        if request.bytes.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let format = FormatHint::detect(
            request.content_type.as_deref(),
            &request.filename,
            &request.bytes,
        );
        let pages = self
            .extractor
            .extract(&request.bytes, format)
            .await
            .map_err(|e| AnalysisError::UnsupportedEncoding(e.to_string()))?;

        let full_text = pages.join("\n");
        if full_text.trim().is_empty() {
            return Err(AnalysisError::NoTextExtracted);
        }
        let text_lower = full_text.to_lowercase();

        // Type decision comes from the keyword engine alone; the other two
        // engines only move the confidence.
        let keyword = classify::classify(&text_lower);
        let layout = scoring::layout_score(&full_text, pages.len());
        let semantic = self.semantic.score(keyword.doc_type);
        let final_confidence = scoring::combine_confidence(semantic, keyword.score, layout);
        debug!(
            doc_type = keyword.doc_type.as_str(),
            keyword = keyword.score,
            semantic,
            layout,
            final_confidence,
            "classified document"
        );

        let extracted_fields = fields::extract_fields(keyword.doc_type, &full_text);
        let fraud_signals = fraud::detect_signals(keyword.doc_type, &text_lower, &extracted_fields);
        let quality_score = quality::score_quality(&full_text, format == FormatHint::Pdf);
        let tag_list = tags::generate_tags(keyword.doc_type, &extracted_fields, &fraud_signals);
        let page_map = classify::classify_pages(&pages);

        // Corpus snapshot is taken once per request; a failed read degrades
        // to an empty similar list rather than aborting the analysis.
        let corpus = match self.store.list_by_tenant(&request.tenant_id).await {
            Ok(corpus) => corpus,
            Err(e) => {
                warn!(tenant = %request.tenant_id, "corpus read failed: {e}");
                Vec::new()
            }
        };
        let similar_docs = similarity::find_similar(&full_text, &corpus, self.similar_limit);

        let highlight_phrases = build_highlights(&keyword.matched, &extracted_fields);

        let result = AnalysisResult {
            doc_type: keyword.doc_type,
            confidence: final_confidence,
            keywords_matched: keyword.matched,
            engine_breakdown: EngineBreakdown::new(
                keyword.score,
                semantic,
                layout,
                final_confidence,
            ),
            extracted_fields,
            fraud_signals,
            tags: tag_list,
            quality_score,
            similar_docs,
            page_map,
            highlight_phrases,
        };

        let record = NewDocument::new(
            &request.tenant_id,
            &request.filename,
            result.doc_type.as_str(),
            &full_text,
        );
        let document_id = match self.store.save(record).await {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(tenant = %request.tenant_id, "persisting analyzed document failed: {e}");
                None
            }
        };

        Ok(AnalysisOutcome {
            result,
            document_id,
        })
    }
}

/// Keyword matches followed by non-null, non-"Note" field values,
/// deduplicated with first-occurrence order preserved.
fn build_highlights(keywords: &[String], fields: &[ExtractionField]) -> Vec<String> {
    let values = fields
        .iter()
        .filter(|f| f.name != "Note")
        .filter_map(|f| f.value.clone());

    let mut seen = HashSet::new();
    let mut phrases = Vec::new();
    for phrase in keywords.iter().cloned().chain(values) {
        if seen.insert(phrase.clone()) {
            phrases.push(phrase);
        }
    }
    phrases
}
