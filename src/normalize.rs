//! Input normalization: case folding and tokenization by whitespace.

use crate::error::{Result, TranscriptionError};
use regex::Regex;

/// Lowercases text and isolates runs of non-word characters as tokens.
///
/// After normalization, punctuation is always separated from words by a
/// single space, whitespace runs are collapsed and the ends are trimmed.
pub struct Normalizer {
    word_then_other: Regex,
    other_then_word: Regex,
    whitespace: Regex,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            word_then_other: compile(r"(\w)(\W)")?,
            other_then_word: compile(r"(\W)(\w)")?,
            whitespace: compile(r"\s+")?,
        })
    }

    pub fn normalize(&self, text: &str) -> String {
        let folded = text.to_lowercase();
        let split = self.word_then_other.replace_all(&folded, "$1 $2");
        let split = self.other_then_word.replace_all(&split, "$1 $2");
        let collapsed = self.whitespace.replace_all(&split, " ");
        collapsed.trim().to_string()
    }
}

fn compile(source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|source_err| TranscriptionError::RuleCompile {
        pattern: source.to_string(),
        source: source_err,
    })
}
