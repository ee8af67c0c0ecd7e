//! Categorical tag generation.
//!
//! Tags are a set rendered as a sorted sequence; callers rely on the
//! ascending order and absence of duplicates.

use std::collections::BTreeSet;

use crate::models::{DocType, ExtractionField, FraudSignal};

/// Derive tags from the final type, extracted fields, and fraud signals.
pub fn generate_tags(
    doc_type: DocType,
    fields: &[ExtractionField],
    signals: &[FraudSignal],
) -> Vec<String> {
    let mut tags = BTreeSet::new();
    tags.insert(doc_type.slug());

    if has_value(fields, |name| name.contains("Amount")) {
        tags.insert("amount-detected".to_string());
    }
    if has_value(fields, |name| name == "Claim Number") {
        tags.insert("claim-identified".to_string());
    }
    if !signals.is_empty() {
        tags.insert("fraud-review".to_string());
    }
    if doc_type == DocType::Invoice {
        tags.insert("finance".to_string());
    }
    if doc_type == DocType::ClaimForm {
        tags.insert("claims".to_string());
    }

    tags.into_iter().collect()
}

/// True when any field with a matching name carries a non-empty value.
fn has_value(fields: &[ExtractionField], name_matches: impl Fn(&str) -> bool) -> bool {
    fields
        .iter()
        .any(|f| name_matches(&f.name) && f.value.as_deref().is_some_and(|v| !v.is_empty()))
}
