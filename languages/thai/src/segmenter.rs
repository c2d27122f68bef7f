use std::collections::HashSet;

use kham_core::{SegmentError, Segmenter};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

const EMBEDDED_WORDS: &str = include_str!("../data/th_words.txt");

/// Thai word and sentence segmenter.
///
/// Non-Thai text follows UAX #29 word boundaries. Thai runs carry no spaces
/// between words and are split by longest dictionary match over grapheme
/// clusters. Text between known words stays together as one token.
pub struct ThaiSegmenter {
    words: HashSet<String>,
    /// Longest dictionary word, in graphemes
    max_len: usize,
}

impl ThaiSegmenter {
    /// Segmenter backed by the embedded word list
    pub fn new() -> Self {
        let words = EMBEDDED_WORDS
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'));
        let segmenter = Self::from_words(words);
        tracing::info!("Loaded {} Thai dictionary words", segmenter.words.len());
        segmenter
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segmenter = Self {
            words: HashSet::new(),
            max_len: 0,
        };
        segmenter.extend(words);
        segmenter
    }

    /// Add words, e.g. the Thai side of the glossary
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word: String = word.as_ref().trim().nfc().collect();
            if word.is_empty() {
                continue;
            }
            self.max_len = self.max_len.max(word.graphemes(true).count());
            self.words.insert(word);
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Longest dictionary word starting at `start`, as a grapheme count
    fn longest_match(&self, graphemes: &[&str], start: usize) -> Option<usize> {
        let limit = self.max_len.min(graphemes.len() - start);
        (1..=limit)
            .rev()
            .find(|&len| self.words.contains(&graphemes[start..start + len].concat()))
    }

    fn split_thai(&self, run: &str, tokens: &mut Vec<String>) {
        let graphemes: Vec<&str> = run.graphemes(true).collect();
        let mut unknown = String::new();
        let mut i = 0;

        while i < graphemes.len() {
            match self.longest_match(&graphemes, i) {
                Some(len) => {
                    if !unknown.is_empty() {
                        tokens.push(std::mem::take(&mut unknown));
                    }
                    tokens.push(graphemes[i..i + len].concat());
                    i += len;
                }
                None => {
                    unknown.push_str(graphemes[i]);
                    i += 1;
                }
            }
        }

        if !unknown.is_empty() {
            tokens.push(unknown);
        }
    }
}

impl Default for ThaiSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_thai(c: char) -> bool {
    ('\u{0E00}'..='\u{0E7F}').contains(&c)
}

/// Split into maximal Thai and non-Thai runs. UAX #29 breaks between every
/// Thai letter, so Thai runs are handed to the dictionary instead.
fn script_runs(text: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, c) in text.char_indices() {
        let thai = is_thai(c);
        match current {
            Some(prev) if prev != thai => {
                runs.push((prev, &text[start..idx]));
                start = idx;
            }
            _ => {}
        }
        current = Some(thai);
    }

    if let Some(thai) = current {
        runs.push((thai, &text[start..]));
    }
    runs
}

impl Segmenter for ThaiSegmenter {
    fn language_code(&self) -> &str {
        "th"
    }

    fn words(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        let text: String = text.nfc().collect();
        let mut tokens = Vec::new();

        for (thai, run) in script_runs(&text) {
            if !thai {
                tokens.extend(run.split_word_bounds().map(str::to_string));
                continue;
            }
            if self.words.is_empty() {
                return Err(SegmentError::NotReady("Thai dictionary is empty".to_string()));
            }
            self.split_thai(run, &mut tokens);
        }

        Ok(tokens)
    }

    fn sentences(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        Ok(text
            .unicode_sentences()
            .flat_map(|s| s.split('\n'))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }
}
