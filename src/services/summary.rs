//! Policy document summarization.
//!
//! Naive first-N-words baseline; the seam exists so a real summarizer can
//! replace it without touching callers.

use serde::Serialize;

/// Default summary length in words.
pub const DEFAULT_MAX_WORDS: usize = 200;

#[derive(Debug, Clone, Serialize)]
pub struct PolicySummary {
    pub summary: String,
    pub word_count: usize,
}

/// Summarize text by taking its first `max_words` words.
pub fn summarize(text: &str, max_words: usize) -> PolicySummary {
    let words: Vec<&str> = text.split_whitespace().collect();
    let summary = if words.len() <= max_words {
        text.to_string()
    } else {
        words[..max_words].join(" ")
    };
    let word_count = summary.split_whitespace().count();
    PolicySummary {
        summary,
        word_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        let result = summarize("full policy wording here", 200);
        assert_eq!(result.summary, "full policy wording here");
        assert_eq!(result.word_count, 4);
    }

    #[test]
    fn test_long_text_truncated_to_word_limit() {
        let text = (0..500).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let result = summarize(&text, 200);
        assert_eq!(result.word_count, 200);
        assert!(result.summary.starts_with("w0 w1"));
        assert!(result.summary.ends_with("w199"));
    }

    #[test]
    fn test_exact_limit_not_truncated() {
        let text = "one two three";
        let result = summarize(text, 3);
        assert_eq!(result.summary, text);
    }
}
