//! Domain models for document analysis and storage.

mod analysis;
mod document;

pub use analysis::{
    AnalysisResult, DocType, EngineBreakdown, ExtractionField, FraudSignal, PageClassification,
    Severity, SimilarDocument,
};
pub use document::{NewDocument, StoredDocument, EXCERPT_LIMIT};
