//! Confidence scoring: layout heuristics, the semantic placeholder, and
//! score fusion.

use crate::models::DocType;

/// Fixed fusion weights. Calibration debt inherited from the original
/// heuristics; replace together with a learned model, not piecemeal.
pub const SEMANTIC_WEIGHT: f64 = 0.4;
pub const KEYWORD_WEIGHT: f64 = 0.35;
pub const LAYOUT_WEIGHT: f64 = 0.25;

/// Type-confidence from surface text statistics.
///
/// Line-less text scores a flat 0.2. Otherwise: 0.3 base, +0.3 for
/// invoice/bill wording, +0.2 for long average lines, +0.1 for more than
/// three pages, clamped to [0, 1].
pub fn layout_score(text: &str, page_count: usize) -> f64 {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return 0.2;
    }

    let mut score: f64 = 0.3;

    let lower = text.to_lowercase();
    if lower.contains("invoice") || lower.contains("bill") {
        score += 0.3;
    }

    let total_len: usize = lines.iter().map(|line| line.chars().count()).sum();
    let mean_len = total_len as f64 / lines.len() as f64;
    if mean_len > 60.0 {
        score += 0.2;
    }

    if page_count > 3 {
        score += 0.1;
    }

    score.clamp(0.0, 1.0)
}

/// Confidence booster for the predicted type.
///
/// Swappable seam: any implementation must map a predicted type to a
/// confidence in [0, 1].
pub trait SemanticScorer: Send + Sync {
    fn score(&self, doc_type: DocType) -> f64;
}

/// Stand-in for a future learned model: flat 0.85 for any recognized type,
/// 0.4 for Other.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSemanticScorer;

impl SemanticScorer for PlaceholderSemanticScorer {
    fn score(&self, doc_type: DocType) -> f64 {
        if doc_type == DocType::Other {
            0.4
        } else {
            0.85
        }
    }
}

/// Fuse the three engine scores into the final confidence.
///
/// The type decision itself comes from the keyword engine alone; layout and
/// semantic scores only move the confidence.
pub fn combine_confidence(semantic: f64, keyword: f64, layout: f64) -> f64 {
    (SEMANTIC_WEIGHT * semantic + KEYWORD_WEIGHT * keyword + LAYOUT_WEIGHT * layout).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_empty_text() {
        assert_eq!(layout_score("", 1), 0.2);
    }

    #[test]
    fn test_layout_base_only() {
        assert_eq!(layout_score("short\nlines", 1), 0.3);
    }

    #[test]
    fn test_layout_invoice_wording() {
        assert!((layout_score("invoice attached", 1) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_layout_long_lines_and_many_pages() {
        let line = "x".repeat(80);
        let text = format!("{line}\n{line}");
        // 0.3 base + 0.2 long lines + 0.1 pages
        assert!((layout_score(&text, 4) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_layout_all_bonuses_clamped_inside_range() {
        let line = format!("invoice {}", "y".repeat(70));
        let score = layout_score(&line, 10);
        assert!((score - 0.9).abs() < 1e-9);
        assert!(score <= 1.0);
    }

    #[test]
    fn test_semantic_placeholder() {
        let scorer = PlaceholderSemanticScorer;
        assert_eq!(scorer.score(DocType::Invoice), 0.85);
        assert_eq!(scorer.score(DocType::Letter), 0.85);
        assert_eq!(scorer.score(DocType::Other), 0.4);
    }

    #[test]
    fn test_combine_weights() {
        let fused = combine_confidence(0.85, 0.5, 0.6);
        assert!((fused - (0.4 * 0.85 + 0.35 * 0.5 + 0.25 * 0.6)).abs() < 1e-9);
    }

    #[test]
    fn test_combine_clamps() {
        assert_eq!(combine_confidence(2.0, 2.0, 2.0), 1.0);
        assert_eq!(combine_confidence(-1.0, -1.0, -1.0), 0.0);
    }
}
