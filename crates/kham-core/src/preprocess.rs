use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::language::Segmenter;

// Non-greedy, so "(a (b) c)" loses "(a (b)" and keeps " c)"
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("valid parenthetical pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// How word tokens are put back together after segmentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStyle {
    /// Word tokens separated by single spaces
    Space,
    /// Tokens glued back as they came, whitespace tokens included
    #[default]
    Concatenate,
}

/// Remove every `(...)` span
pub fn strip_parentheticals(text: &str) -> String {
    PARENTHETICAL.replace_all(text, "").into_owned()
}

/// Collapse whitespace runs to one space and trim
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Best-effort text cleanup backed by a segmenter.
///
/// Segmenter failures never propagate: the input comes back untouched.
#[derive(Clone)]
pub struct TextNormalizer {
    segmenter: Arc<dyn Segmenter>,
    join: JoinStyle,
}

impl TextNormalizer {
    pub fn new(segmenter: Arc<dyn Segmenter>, join: JoinStyle) -> Self {
        Self { segmenter, join }
    }

    /// Strip asides and re-segment with the configured join style
    pub fn normalize(&self, text: &str) -> String {
        let text: String = strip_parentheticals(text).nfc().collect();
        self.retokenize(&text, self.join)
    }

    /// Strip asides and tidy whitespace without re-segmenting
    pub fn clean(&self, text: &str) -> String {
        let text: String = strip_parentheticals(text).nfc().collect();
        collapse_whitespace(&text)
    }

    pub fn retokenize(&self, text: &str, join: JoinStyle) -> String {
        let tokens = match self.segmenter.words(text) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!("Tokenizer failed, keeping text as-is: {}", e);
                return text.to_string();
            }
        };

        match join {
            JoinStyle::Space => tokens
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            JoinStyle::Concatenate => tokens.concat(),
        }
    }

    /// Extractive pre-summary: the first `limit` sentences joined by spaces
    pub fn first_sentences(&self, text: &str, limit: usize) -> String {
        match self.segmenter.sentences(text) {
            Ok(sentences) => sentences
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .take(limit)
                .collect::<Vec<_>>()
                .join(" "),
            Err(e) => {
                tracing::warn!("Sentence segmentation failed, keeping text as-is: {}", e);
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::SegmentError;

    struct WhitespaceSegmenter;

    impl Segmenter for WhitespaceSegmenter {
        fn language_code(&self) -> &str {
            "en"
        }

        fn words(&self, text: &str) -> Result<Vec<String>, SegmentError> {
            let mut tokens = Vec::new();
            let mut current = String::new();
            for c in text.chars() {
                let boundary = current
                    .chars()
                    .last()
                    .is_some_and(|last| last.is_whitespace() != c.is_whitespace());
                if boundary {
                    tokens.push(std::mem::take(&mut current));
                }
                current.push(c);
            }
            if !current.is_empty() {
                tokens.push(current);
            }
            Ok(tokens)
        }

        fn sentences(&self, text: &str) -> Result<Vec<String>, SegmentError> {
            Ok(text
                .split_inclusive('.')
                .map(|s| s.trim().to_string())
                .collect())
        }
    }

    struct BrokenSegmenter;

    impl Segmenter for BrokenSegmenter {
        fn language_code(&self) -> &str {
            "th"
        }

        fn words(&self, _text: &str) -> Result<Vec<String>, SegmentError> {
            Err(SegmentError::NotReady("no dictionary".to_string()))
        }

        fn sentences(&self, _text: &str) -> Result<Vec<String>, SegmentError> {
            Err(SegmentError::Failed("boom".to_string()))
        }
    }

    fn normalizer(join: JoinStyle) -> TextNormalizer {
        TextNormalizer::new(Arc::new(WhitespaceSegmenter), join)
    }

    #[test]
    fn strips_every_parenthetical() {
        assert_eq!(
            strip_parentheticals("A test definition (details). More (x) text."),
            "A test definition . More  text."
        );
    }

    #[test]
    fn nested_parentheses_close_at_first_paren() {
        assert_eq!(strip_parentheticals("a (b (c) d) e"), "a  d) e");
    }

    #[test]
    fn clean_collapses_leftover_spaces() {
        let n = normalizer(JoinStyle::Space);
        assert_eq!(n.clean("A test  definition (details)."), "A test definition .");
    }

    #[test]
    fn space_join_drops_whitespace_tokens() {
        let n = normalizer(JoinStyle::Space);
        assert_eq!(n.normalize("one   two (x) three"), "one two three");
    }

    #[test]
    fn concatenate_join_keeps_original_spacing() {
        let n = normalizer(JoinStyle::Concatenate);
        assert_eq!(n.retokenize("one  two", JoinStyle::Concatenate), "one  two");
    }

    #[test]
    fn tokenizer_failure_fails_open() {
        let n = TextNormalizer::new(Arc::new(BrokenSegmenter), JoinStyle::Space);
        assert_eq!(n.retokenize("ข้อความ ทดสอบ", JoinStyle::Space), "ข้อความ ทดสอบ");
        assert_eq!(n.first_sentences("a. b. c.", 1), "a. b. c.");
    }

    #[test]
    fn first_sentences_truncates() {
        let n = normalizer(JoinStyle::Space);
        assert_eq!(n.first_sentences("One. Two. Three.", 2), "One. Two.");
    }
}
