//! docsense - insurance document analysis engine.
//!
//! Ingests an uploaded document (PDF or plain text) and produces a structured
//! analysis: predicted document type, a multi-signal confidence score,
//! type-specific extracted fields, heuristic fraud indicators, a text-quality
//! score, categorical tags, a per-page type map, and similar previously seen
//! documents for the same tenant.

// Model types use `from_str` methods that return Option<Self>,
// not Result<Self, Error> as std::str::FromStr requires.
#![allow(clippy::should_implement_trait)]

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod repository;
pub mod services;
