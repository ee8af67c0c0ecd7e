//! Fatal analysis errors.
//!
//! These are the only conditions that abort the pipeline. Every stage past
//! text extraction is total: missing matches produce documented defaults,
//! never errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Empty upload: the document contains no bytes")]
    EmptyInput,

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("No text could be extracted from the document")]
    NoTextExtracted,
}
