//! Sentence splitting and cleanup of raw OCR output.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Splits raw recognized text into cleaned, ordered sentences.
pub struct SentenceSplitter {
    boundary: Regex,
    strip: Regex,
}

impl SentenceSplitter {
    /// Create a splitter with the fixed boundary and strip patterns.
    pub fn new() -> Self {
        Self {
            // Runs of terminators count as a single sentence boundary.
            boundary: Regex::new(r"[.!?]+").unwrap(),
            // Keep ASCII letters, digits, whitespace, comma, colon, hyphen.
            strip: Regex::new(r"[^a-zA-Z0-9\s,:\-]").unwrap(),
        }
    }

    /// Split raw text into cleaned sentences, preserving source order.
    ///
    /// Whitespace runs are collapsed, sentence terminators (`.` `!` `?`)
    /// mark boundaries, and every character outside the kept set is
    /// stripped. Fragments that end up empty are dropped, so an
    /// all-punctuation input yields an empty list.
    pub fn split(&self, text: &str) -> Vec<String> {
        let normalized: String = text.nfc().collect();
        let collapsed = normalized.split_whitespace().collect::<Vec<_>>().join(" ");

        self.boundary
            .split(&collapsed)
            .filter(|s| !s.trim().is_empty())
            .map(|s| self.strip.replace_all(s.trim(), "").trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text with the default splitter.
pub fn split_sentences(text: &str) -> Vec<String> {
    SentenceSplitter::new().split(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let sentences = split_sentences("Cats are great pets. Cats need food and water.");
        assert_eq!(
            sentences,
            vec!["Cats are great pets", "Cats need food and water"]
        );
    }

    #[test]
    fn test_split_collapses_whitespace() {
        let sentences = split_sentences("Hello   world.\n\tSecond\n line.");
        assert_eq!(sentences, vec!["Hello world", "Second line"]);
    }

    #[test]
    fn test_split_terminator_runs() {
        let sentences = split_sentences("Wait... what?! Really.");
        assert_eq!(sentences, vec!["Wait", "what", "Really"]);
    }

    #[test]
    fn test_split_strips_special_chars() {
        let sentences = split_sentences("Price: $5 (approx). A-B, C;D.");
        assert_eq!(sentences, vec!["Price: 5 approx", "A-B, CD"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_split_punctuation_only() {
        assert!(split_sentences("!!! ??? ...").is_empty());
        assert!(split_sentences("@#$%^&*()").is_empty());
    }

    #[test]
    fn test_split_drops_fragments_emptied_by_strip() {
        // Middle fragment is pure symbols and disappears after stripping.
        let sentences = split_sentences("First. @#$. Third.");
        assert_eq!(sentences, vec!["First", "Third"]);
    }

    #[test]
    fn test_split_preserves_order() {
        let sentences = split_sentences("one. two! three? four.");
        assert_eq!(sentences, vec!["one", "two", "three", "four"]);
    }
}
