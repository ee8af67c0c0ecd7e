//! Token-set similarity over the tenant's stored corpus.
//!
//! The repository does the (tenant-filtered) fetch; everything here is a
//! pure function over the corpus snapshot taken at request start.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::{SimilarDocument, StoredDocument};

/// Default number of similar documents returned.
pub const DEFAULT_SIMILAR_LIMIT: usize = 3;

/// Jaccard similarity of two texts' lower-cased whitespace token sets.
///
/// Zero when either set is empty.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    let set_a: HashSet<&str> = a_lower.split_whitespace().collect();
    let set_b: HashSet<&str> = b_lower.split_whitespace().collect();

    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    intersection as f64 / union as f64
}

/// Rank the corpus against the current text.
///
/// Zero-similarity documents are excluded, never returned. The sort is
/// stable, so equal scores keep the corpus scan order.
pub fn find_similar(
    text: &str,
    corpus: &[StoredDocument],
    limit: usize,
) -> Vec<SimilarDocument> {
    let mut scored: Vec<SimilarDocument> = corpus
        .iter()
        .filter_map(|doc| {
            let similarity = jaccard(text, &doc.text_content);
            (similarity > 0.0).then(|| SimilarDocument {
                id: doc.id.clone(),
                filename: doc.filename.clone(),
                doc_type: doc.doc_type.clone(),
                similarity,
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn doc(id: &str, text: &str) -> StoredDocument {
        StoredDocument {
            id: id.to_string(),
            tenant_id: "t1".to_string(),
            filename: format!("{id}.txt"),
            doc_type: "Other".to_string(),
            text_content: text.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_jaccard_exact_value() {
        // Sets: {a b c d e f g h} and {a b c d e f x y}: 6 shared, 10 unique.
        let a = "a b c d e f g h";
        let b = "a b c d e f x y";
        assert!((jaccard(a, b) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_jaccard_case_and_repeats_collapse() {
        assert_eq!(jaccard("Hello hello HELLO", "hello"), 1.0);
    }

    #[test]
    fn test_jaccard_empty_side_is_zero() {
        assert_eq!(jaccard("", "words here"), 0.0);
        assert_eq!(jaccard("words here", "   "), 0.0);
    }

    #[test]
    fn test_zero_similarity_excluded() {
        let corpus = vec![doc("d1", "completely different tokens")];
        let similar = find_similar("nothing shared whatsoever", &corpus, 3);
        assert!(similar.is_empty());
    }

    #[test]
    fn test_sorted_descending_with_limit() {
        let corpus = vec![
            doc("low", "alpha zzz yyy xxx"),
            doc("high", "alpha beta gamma delta"),
            doc("mid", "alpha beta qqq rrr"),
            doc("also-low", "alpha www vvv uuu"),
        ];
        let similar = find_similar("alpha beta gamma delta", &corpus, 3);

        let ids: Vec<_> = similar.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
        assert!(similar.windows(2).all(|w| w[0].similarity >= w[1].similarity));
    }

    #[test]
    fn test_ties_keep_scan_order() {
        let corpus = vec![
            doc("first", "alpha one two three"),
            doc("second", "alpha ten twenty thirty"),
        ];
        let similar = find_similar("alpha solo", &corpus, 3);
        assert_eq!(similar.len(), 2);
        assert_eq!(similar[0].id, "first");
        assert_eq!(similar[1].id, "second");
        assert_eq!(similar[0].similarity, similar[1].similarity);
    }
}
