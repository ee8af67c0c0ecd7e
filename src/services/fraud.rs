//! Heuristic fraud signals.
//!
//! Two rules: suspicious wording anywhere in the text, and missing
//! mandatory fields for types that require them. Output order is fixed:
//! the language signal (at most one) first, then missing-field signals in
//! required-field declaration order.

use crate::models::{DocType, ExtractionField, FraudSignal, Severity};

/// Words whose presence alone warrants a review flag.
const SUSPICIOUS_WORDS: &[&str] = &["urgent", "immediately", "lost", "duplicate", "backdated"];

/// Mandatory fields per document type. Types not listed have no
/// completeness rule.
const REQUIRED_FIELDS: &[(DocType, &[&str])] = &[
    (DocType::Invoice, &["Invoice Number", "Amount"]),
    (DocType::ClaimForm, &["Claim Number", "Policy Number"]),
];

/// Scan for fraud indicators.
///
/// Expects lower-cased text; field values come from the extractor output
/// for the same document.
pub fn detect_signals(
    doc_type: DocType,
    text_lower: &str,
    fields: &[ExtractionField],
) -> Vec<FraudSignal> {
    let mut signals = Vec::new();

    let matched: Vec<&str> = SUSPICIOUS_WORDS
        .iter()
        .copied()
        .filter(|word| text_lower.contains(word))
        .collect();
    if !matched.is_empty() {
        signals.push(FraudSignal {
            label: "Suspicious language".to_string(),
            severity: Severity::Medium,
            description: format!("Suspicious wording detected: {}", matched.join(", ")),
        });
    }

    if let Some((_, required)) = REQUIRED_FIELDS.iter().find(|(ty, _)| *ty == doc_type) {
        for name in *required {
            let present = fields
                .iter()
                .any(|f| f.name == *name && f.value.as_deref().is_some_and(|v| !v.is_empty()));
            if !present {
                signals.push(FraudSignal {
                    label: format!("Missing {name}"),
                    severity: Severity::High,
                    description: format!(
                        "Required field '{name}' was not found in this {doc_type}."
                    ),
                });
            }
        }
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fields::extract_fields;

    #[test]
    fn test_clean_text_has_no_signals() {
        let text = "invoice no: inv-1\namount due: 10.00";
        let fields = extract_fields(DocType::Invoice, text);
        assert!(detect_signals(DocType::Invoice, text, &fields).is_empty());
    }

    #[test]
    fn test_suspicious_words_single_medium_signal() {
        let text = "urgent replacement for the duplicate invoice no: inv-1\namount due: 10.00";
        let fields = extract_fields(DocType::Invoice, text);
        let signals = detect_signals(DocType::Invoice, text, &fields);

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].label, "Suspicious language");
        assert_eq!(signals[0].severity, Severity::Medium);
        assert!(signals[0].description.contains("urgent, duplicate"));
    }

    #[test]
    fn test_missing_required_fields_high_signals() {
        let text = "invoice for consulting services";
        let fields = extract_fields(DocType::Invoice, text);
        let signals = detect_signals(DocType::Invoice, text, &fields);

        assert_eq!(signals.len(), 2);
        assert_eq!(signals[0].label, "Missing Invoice Number");
        assert_eq!(signals[0].severity, Severity::High);
        assert_eq!(signals[1].label, "Missing Amount");
    }

    #[test]
    fn test_language_signal_precedes_missing_fields() {
        let text = "urgent invoice, details to follow";
        let fields = extract_fields(DocType::Invoice, text);
        let signals = detect_signals(DocType::Invoice, text, &fields);

        assert_eq!(signals.len(), 3);
        assert_eq!(signals[0].label, "Suspicious language");
        assert_eq!(signals[1].label, "Missing Invoice Number");
        assert_eq!(signals[2].label, "Missing Amount");
    }

    #[test]
    fn test_types_without_completeness_rule() {
        let text = "inspection went fine";
        let fields = extract_fields(DocType::InspectionReport, text);
        assert!(detect_signals(DocType::InspectionReport, text, &fields).is_empty());
    }

    #[test]
    fn test_claim_form_required_fields() {
        let text = "claim form submitted after the incident";
        let fields = extract_fields(DocType::ClaimForm, text);
        let signals = detect_signals(DocType::ClaimForm, text, &fields);
        let labels: Vec<_> = signals.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Missing Claim Number", "Missing Policy Number"]);
    }
}
