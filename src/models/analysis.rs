//! Analysis result types.
//!
//! These are the exact payload shapes returned to callers; field names are
//! part of the serialized contract and must not drift.

use serde::{Deserialize, Serialize};

/// Predicted document type.
///
/// The variant order here is not the classification order; the ordered
/// category table lives in [`crate::services::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocType {
    #[serde(rename = "Claim Form")]
    ClaimForm,
    #[serde(rename = "Inspection Report")]
    InspectionReport,
    Invoice,
    #[serde(rename = "Policy Document")]
    PolicyDocument,
    Letter,
    Other,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClaimForm => "Claim Form",
            Self::InspectionReport => "Inspection Report",
            Self::Invoice => "Invoice",
            Self::PolicyDocument => "Policy Document",
            Self::Letter => "Letter",
            Self::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Claim Form" => Some(Self::ClaimForm),
            "Inspection Report" => Some(Self::InspectionReport),
            "Invoice" => Some(Self::Invoice),
            "Policy Document" => Some(Self::PolicyDocument),
            "Letter" => Some(Self::Letter),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Lower-cased, hyphenated form used as the base tag ("claim-form").
    pub fn slug(&self) -> String {
        self.as_str().to_lowercase().replace(' ', "-")
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single extracted field.
///
/// Confidence is always present, even when the value is absent (0.4 for a
/// searched-but-missing field, 0.3 for the fallback "Note" field).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionField {
    pub name: String,
    pub value: Option<String>,
    pub confidence: f64,
}

/// Severity of a heuristic fraud signal. Ordinal, not a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A heuristic fraud indicator. The description embeds the specific
/// evidence (matched words, missing field name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudSignal {
    pub label: String,
    pub severity: Severity,
    pub description: String,
}

/// Per-page classification entry. Page numbers are 1-based and sequential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageClassification {
    pub page_number: usize,
    pub doc_type: DocType,
    pub confidence: f64,
}

/// A previously seen document with strictly positive token-set overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarDocument {
    pub id: String,
    pub filename: String,
    pub doc_type: String,
    pub similarity: f64,
}

/// Per-engine confidence contributions plus the fused final value.
/// All values are rounded to 3 decimal places at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineBreakdown {
    pub keyword_engine: f64,
    pub semantic_engine: f64,
    pub layout_engine: f64,
    pub final_confidence: f64,
}

impl EngineBreakdown {
    pub fn new(keyword: f64, semantic: f64, layout: f64, final_confidence: f64) -> Self {
        Self {
            keyword_engine: round3(keyword),
            semantic_engine: round3(semantic),
            layout_engine: round3(layout),
            final_confidence: round3(final_confidence),
        }
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// The full analysis aggregate returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub doc_type: DocType,
    pub confidence: f64,
    pub keywords_matched: Vec<String>,
    pub engine_breakdown: EngineBreakdown,
    pub extracted_fields: Vec<ExtractionField>,
    pub fraud_signals: Vec<FraudSignal>,
    pub tags: Vec<String>,
    pub quality_score: u8,
    pub similar_docs: Vec<SimilarDocument>,
    pub page_map: Vec<PageClassification>,
    pub highlight_phrases: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_type_round_trip() {
        for ty in [
            DocType::ClaimForm,
            DocType::InspectionReport,
            DocType::Invoice,
            DocType::PolicyDocument,
            DocType::Letter,
            DocType::Other,
        ] {
            assert_eq!(DocType::from_str(ty.as_str()), Some(ty));
        }
        assert_eq!(DocType::from_str("Receipt"), None);
    }

    #[test]
    fn test_doc_type_serializes_display_name() {
        let json = serde_json::to_string(&DocType::ClaimForm).unwrap();
        assert_eq!(json, "\"Claim Form\"");
    }

    #[test]
    fn test_slug() {
        assert_eq!(DocType::InspectionReport.slug(), "inspection-report");
        assert_eq!(DocType::Invoice.slug(), "invoice");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn test_breakdown_rounding() {
        let b = EngineBreakdown::new(0.333333, 0.85, 0.1999, 0.51666);
        assert_eq!(b.keyword_engine, 0.333);
        assert_eq!(b.semantic_engine, 0.85);
        assert_eq!(b.layout_engine, 0.2);
        assert_eq!(b.final_confidence, 0.517);
    }
}
