//! Keyword-based document classification.
//!
//! Categories are an ordered list, not a map: iteration order is the
//! tie-break, and reorderings change results.

use crate::models::{DocType, PageClassification};

/// A document category and the keyword phrases that vote for it.
pub struct DocCategory {
    pub doc_type: DocType,
    pub keywords: &'static [&'static str],
}

/// Ordered category table. Earlier entries win exact score ties.
pub static CATEGORIES: &[DocCategory] = &[
    DocCategory {
        doc_type: DocType::ClaimForm,
        keywords: &["claim number", "policy number", "loss date", "incident"],
    },
    DocCategory {
        doc_type: DocType::InspectionReport,
        keywords: &["inspection", "survey", "inspector", "site visit"],
    },
    DocCategory {
        doc_type: DocType::Invoice,
        keywords: &["invoice", "gst", "amount due", "bill no"],
    },
    DocCategory {
        doc_type: DocType::PolicyDocument,
        keywords: &["policy schedule", "sum insured", "premium", "coverage"],
    },
    DocCategory {
        doc_type: DocType::Letter,
        keywords: &["dear", "sincerely", "regards", "yours faithfully"],
    },
];

/// Classification outcome for one text.
#[derive(Debug, Clone)]
pub struct KeywordMatch {
    pub doc_type: DocType,
    pub matched: Vec<String>,
    pub score: f64,
}

impl KeywordMatch {
    fn none() -> Self {
        Self {
            doc_type: DocType::Other,
            matched: Vec::new(),
            score: 0.0,
        }
    }
}

/// Score each category by keyword overlap and pick the best.
///
/// Input must already be lower-cased. Score is hits over keyword count for
/// the category, so every category weighs a single hit equally. Strictly
/// greater wins; an exact tie keeps the earlier category. All-zero scores
/// fall back to [`DocType::Other`].
pub fn classify(text_lower: &str) -> KeywordMatch {
    let mut best = KeywordMatch::none();
    for category in CATEGORIES {
        let matched: Vec<String> = category
            .keywords
            .iter()
            .filter(|kw| text_lower.contains(**kw))
            .map(|kw| kw.to_string())
            .collect();
        let score = matched.len() as f64 / category.keywords.len() as f64;
        if score > best.score {
            best = KeywordMatch {
                doc_type: category.doc_type,
                matched,
                score,
            };
        }
    }
    best
}

/// Classify each page independently to build the page map.
///
/// Page numbers are 1-based and sequential. A page with no keyword hits
/// defaults to Other at 0.4; otherwise confidence is anchored at 0.6 and
/// scaled by the keyword score into (0.6, 1.0].
pub fn classify_pages(pages: &[String]) -> Vec<PageClassification> {
    pages
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let result = classify(&page.to_lowercase());
            let confidence = if result.doc_type == DocType::Other {
                0.4
            } else {
                0.6 + result.score * 0.4
            };
            PageClassification {
                page_number: index + 1,
                doc_type: result.doc_type,
                confidence,
            }
        })
        .collect()
}
