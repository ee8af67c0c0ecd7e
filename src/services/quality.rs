//! Text-quality scoring.
//!
//! Rates how analysis-ready the extracted text is, on a 0-100 scale.

/// Score text quality from length, source format, and character content.
///
/// Base by character count: under 300 scores 50, under 2000 scores 80,
/// anything longer 90. Non-PDF sources lose 5; any character above code
/// point 126 (newline and tab excluded) loses 10. Clamped to [0, 100].
pub fn score_quality(text: &str, is_pdf: bool) -> u8 {
    let char_count = text.chars().count();
    let mut score: i32 = if char_count < 300 {
        50
    } else if char_count < 2000 {
        80
    } else {
        90
    };

    if !is_pdf {
        score -= 5;
    }

    let has_non_ascii = text
        .chars()
        .any(|c| c != '\n' && c != '\t' && (c as u32) > 126);
    if has_non_ascii {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_base() {
        assert_eq!(score_quality("short", true), 50);
    }

    #[test]
    fn test_medium_text_base() {
        let text = "a".repeat(500);
        assert_eq!(score_quality(&text, true), 80);
    }

    #[test]
    fn test_long_text_base() {
        let text = "a".repeat(3000);
        assert_eq!(score_quality(&text, true), 90);
    }

    #[test]
    fn test_non_pdf_penalty() {
        let text = "a".repeat(500);
        assert_eq!(score_quality(&text, false), 75);
    }

    #[test]
    fn test_non_ascii_penalty() {
        let text = format!("{}é", "a".repeat(500));
        assert_eq!(score_quality(&text, true), 70);
    }

    #[test]
    fn test_newlines_and_tabs_not_penalized() {
        let text = format!("{}\n\tmore", "a".repeat(500));
        assert_eq!(score_quality(&text, true), 80);
    }

    #[test]
    fn test_penalties_stack() {
        assert_eq!(score_quality("résumé", false), 35);
    }
}
