use crate::config::TextConfig;
use crate::error::{NGramError, NgResult};
use regex::Regex;

/// Normalizes raw text and cuts it into sentences.
///
/// The configured classes are regex character-class bodies, so they are
/// compiled once here and reused for every call.
#[derive(Debug, Clone)]
pub struct Segmenter {
    stray: Regex,
    whitespace: Regex,
    boundary: Regex,
}

impl Segmenter {
    pub fn new(config: &TextConfig) -> NgResult<Self> {
        Ok(Self {
            stray: compile(&format!("[^{}{}]", config.word_chars, config.sentence_chars))?,
            whitespace: compile(r"\s+")?,
            boundary: compile(&format!("[{}]", config.sentence_chars))?,
        })
    }

    /// Lower-cases, drops every character outside both classes and collapses
    /// whitespace runs into a single space.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.trim().to_lowercase();
        let kept = self.stray.replace_all(&lowered, "");
        self.whitespace.replace_all(kept.trim(), " ").into_owned()
    }

    /// Splits on sentence characters. Empty fragments are dropped.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        self.boundary
            .split(&self.normalize(text))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn compile(pattern: &str) -> NgResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| NGramError::Config(format!("bad character class '{}': {}", pattern, e)))
}


/// Splits a normalized sentence into words behind `order - 1` start markers.
/// An empty marker disables padding.
pub fn tokenize<'a>(sentence: &'a str, marker: &'a str, order: usize) -> Vec<&'a str> {
    let padding = if marker.is_empty() {
        0
    } else {
        order.saturating_sub(1)
    };

    std::iter::repeat(marker)
        .take(padding)
        .chain(sentence.split(' ').filter(|w| !w.is_empty()))
        .collect()
}

/// Number of words in a normalized sentence, markers excluded.
pub fn word_count(sentence: &str) -> usize {
    sentence.split(' ').filter(|w| !w.is_empty()).count()
}
