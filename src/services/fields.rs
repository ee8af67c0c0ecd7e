//! Type-specific structured field extraction.
//!
//! Each field is a label phrase (with accepted variants) followed by a
//! delimiter and a value token whose shape depends on the field. Absence of
//! a match is a normal low-confidence outcome, never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{DocType, ExtractionField};

/// Confidence assigned to a searched-but-absent field.
const ABSENT_CONFIDENCE: f64 = 0.4;

/// Confidence of the fallback "Note" field for types with no field table.
const NOTE_CONFIDENCE: f64 = 0.3;

const NOTE_TEXT: &str = "No specific structured fields extracted.";

/// One named field with its pattern rule and found-confidence.
pub struct FieldRule {
    name: &'static str,
    pattern: Regex,
    confidence: f64,
}

impl FieldRule {
    fn new(name: &'static str, pattern: &str, confidence: f64) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            confidence,
        }
    }

    /// Run the rule against raw text. The first capture group is the value.
    fn apply(&self, text: &str) -> ExtractionField {
        let value = self
            .pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|v| !v.is_empty());

        match value {
            Some(v) => ExtractionField {
                name: self.name.to_string(),
                value: Some(v),
                confidence: self.confidence,
            },
            None => ExtractionField {
                name: self.name.to_string(),
                value: None,
                confidence: ABSENT_CONFIDENCE,
            },
        }
    }
}

// Value shapes: identifiers allow alphanumerics with dashes and slashes,
// amounts are decimal with optional thousands separators and currency
// marker, dates are numeric D/M/Y-like with -, / or . separators.
const IDENT: &str = r"([A-Za-z0-9][A-Za-z0-9/-]*)";
const AMOUNT: &str = r"(?:rs\.?|inr|usd|\$|€|£)?\s*([0-9][0-9,]*(?:\.[0-9]{1,2})?)";
const DATE: &str = r"([0-9]{1,4}[-/.][0-9]{1,2}[-/.][0-9]{2,4})";

static INVOICE_FIELDS: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        FieldRule::new(
            "Invoice Number",
            &format!(r"(?i)invoice\s*(?:number|num|no|#)\.?\s*[:#-]?\s*{IDENT}"),
            0.9,
        ),
        FieldRule::new(
            "Amount",
            &format!(r"(?i)(?:amount\s*due|total\s*amount|amount)\s*[:#-]?\s*{AMOUNT}"),
            0.9,
        ),
        FieldRule::new(
            "Invoice Date",
            &format!(r"(?i)(?:invoice\s*date|dated|date)\s*[:#-]?\s*{DATE}"),
            0.8,
        ),
    ]
});

static CLAIM_FORM_FIELDS: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        FieldRule::new(
            "Claim Number",
            &format!(r"(?i)claim\s*(?:number|num|no|id|#)\.?\s*[:#-]?\s*{IDENT}"),
            0.9,
        ),
        FieldRule::new(
            "Policy Number",
            &format!(r"(?i)policy\s*(?:number|num|no|#)\.?\s*[:#-]?\s*{IDENT}"),
            0.85,
        ),
        FieldRule::new(
            "Loss Date",
            &format!(r"(?i)(?:loss\s*date|date\s*of\s*loss|incident\s*date)\s*[:#-]?\s*{DATE}"),
            0.8,
        ),
    ]
});

static INSPECTION_FIELDS: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        FieldRule::new(
            "Inspector Name",
            r"(?i)(?:inspector(?:\s*name)?|inspected\s*by)\s*[:-]\s*([A-Za-z][A-Za-z .']*)",
            0.7,
        ),
        FieldRule::new(
            "Inspection Date",
            &format!(r"(?i)(?:inspection\s*date|date\s*of\s*inspection|visit\s*date)\s*[:#-]?\s*{DATE}"),
            0.8,
        ),
    ]
});

static POLICY_FIELDS: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        FieldRule::new(
            "Sum Insured",
            &format!(r"(?i)sum\s*insured\s*[:#-]?\s*{AMOUNT}"),
            0.85,
        ),
        FieldRule::new(
            "Coverage Limit",
            &format!(r"(?i)(?:coverage|cover)\s*limit\s*[:#-]?\s*{AMOUNT}"),
            0.85,
        ),
    ]
});

/// Extract the field table for the final type against the raw text.
///
/// Types with no table (Other, Letter) yield the single "Note" placeholder
/// field instead of an empty list.
pub fn extract_fields(doc_type: DocType, text: &str) -> Vec<ExtractionField> {
    let rules: &[FieldRule] = match doc_type {
        DocType::Invoice => INVOICE_FIELDS.as_slice(),
        DocType::ClaimForm => CLAIM_FORM_FIELDS.as_slice(),
        DocType::InspectionReport => INSPECTION_FIELDS.as_slice(),
        DocType::PolicyDocument => POLICY_FIELDS.as_slice(),
        DocType::Letter | DocType::Other => &[],
    };

    if rules.is_empty() {
        return vec![ExtractionField {
            name: "Note".to_string(),
            value: Some(NOTE_TEXT.to_string()),
            confidence: NOTE_CONFIDENCE,
        }];
    }

    rules.iter().map(|rule| rule.apply(text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(fields: &'a [ExtractionField], name: &str) -> &'a ExtractionField {
        fields.iter().find(|f| f.name == name).unwrap()
    }

    #[test]
    fn test_invoice_number_and_amount() {
        let text = "Invoice No: INV-2024-007\nAmount Due: 1500.00\n";
        let fields = extract_fields(DocType::Invoice, text);

        let number = field(&fields, "Invoice Number");
        assert_eq!(number.value.as_deref(), Some("INV-2024-007"));
        assert_eq!(number.confidence, 0.9);

        let amount = field(&fields, "Amount");
        assert_eq!(amount.value.as_deref(), Some("1500.00"));
        assert_eq!(amount.confidence, 0.9);
    }

    #[test]
    fn test_invoice_date_formats() {
        for raw in ["Invoice Date: 12/03/2024", "Invoice Date - 2024-03-12"] {
            let fields = extract_fields(DocType::Invoice, raw);
            assert!(
                field(&fields, "Invoice Date").value.is_some(),
                "no date in {raw:?}"
            );
        }
    }

    #[test]
    fn test_absent_field_keeps_low_confidence() {
        let fields = extract_fields(DocType::Invoice, "Invoice # A-1");
        let date = field(&fields, "Invoice Date");
        assert_eq!(date.value, None);
        assert_eq!(date.confidence, 0.4);
    }

    #[test]
    fn test_claim_form_fields() {
        let text = "Claim Number: CLM/88/2024\nPolicy No. POL-5512\nDate of Loss: 01-06-2024";
        let fields = extract_fields(DocType::ClaimForm, text);
        assert_eq!(
            field(&fields, "Claim Number").value.as_deref(),
            Some("CLM/88/2024")
        );
        assert_eq!(
            field(&fields, "Policy Number").value.as_deref(),
            Some("POL-5512")
        );
        assert_eq!(
            field(&fields, "Loss Date").value.as_deref(),
            Some("01-06-2024")
        );
    }

    #[test]
    fn test_inspector_name_trimmed() {
        let text = "Inspector: R. Mehta\nInspection Date: 03/04/2024";
        let fields = extract_fields(DocType::InspectionReport, text);
        assert_eq!(
            field(&fields, "Inspector Name").value.as_deref(),
            Some("R. Mehta")
        );
        assert_eq!(field(&fields, "Inspector Name").confidence, 0.7);
    }

    #[test]
    fn test_policy_document_amounts() {
        let text = "Sum Insured: Rs. 5,00,000\nCoverage Limit: 250000.50";
        let fields = extract_fields(DocType::PolicyDocument, text);
        assert_eq!(
            field(&fields, "Sum Insured").value.as_deref(),
            Some("5,00,000")
        );
        assert_eq!(
            field(&fields, "Coverage Limit").value.as_deref(),
            Some("250000.50")
        );
    }

    #[test]
    fn test_unmatched_type_yields_note() {
        for ty in [DocType::Other, DocType::Letter] {
            let fields = extract_fields(ty, "any text at all");
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].name, "Note");
            assert_eq!(
                fields[0].value.as_deref(),
                Some("No specific structured fields extracted.")
            );
            assert_eq!(fields[0].confidence, 0.3);
        }
    }

    #[test]
    fn test_field_order_follows_declaration() {
        let names: Vec<_> = extract_fields(DocType::Invoice, "")
            .iter()
            .map(|f| f.name.clone())
            .collect();
        assert_eq!(names, vec!["Invoice Number", "Amount", "Invoice Date"]);
    }
}
