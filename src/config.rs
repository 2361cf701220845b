use crate::error::{NGramError, NgResult};
use clap::Args;

pub const DEFAULT_START_MARKER: &str = "<START>";
pub const DEFAULT_WORD_CHARS: &str = r"a-zA-Z0-9 \-";
pub const DEFAULT_SENTENCE_CHARS: &str = ".?!";

/// Text handling knobs shared by the corpus builder and the phrase estimator.
///
/// `word_chars` and `sentence_chars` are the bodies of regex character
/// classes, e.g. `a-z0-9 \-`. Text is lower-cased before either is applied.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TextConfig {
    #[arg(global = true, long, default_value = DEFAULT_START_MARKER)]
    pub start_marker: String,

    #[arg(
        global = true,
        long,
        default_value = DEFAULT_WORD_CHARS,
        allow_hyphen_values = true
    )]
    pub word_chars: String,

    #[arg(
        global = true,
        long,
        default_value = DEFAULT_SENTENCE_CHARS,
        allow_hyphen_values = true
    )]
    pub sentence_chars: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            start_marker: DEFAULT_START_MARKER.to_string(),
            word_chars: DEFAULT_WORD_CHARS.to_string(),
            sentence_chars: DEFAULT_SENTENCE_CHARS.to_string(),
        }
    }
}

impl TextConfig {
    pub fn validate(&self) -> NgResult<()> {
        if self.start_marker.is_empty() {
            return Err(NGramError::Config("start marker cannot be empty".to_string()));
        }
        if self.start_marker.chars().any(char::is_whitespace) {
            return Err(NGramError::Config(format!(
                "start marker '{}' cannot contain whitespace",
                self.start_marker
            )));
        }
        if self.sentence_chars.is_empty() {
            return Err(NGramError::Config(
                "at least one sentence split character is required".to_string(),
            ));
        }
        if !self.word_chars.contains(' ') {
            // Words are separated by single spaces after normalization.
            return Err(NGramError::Config(format!(
                "word character class '{}' must include a space",
                self.word_chars
            )));
        }
        Ok(())
    }
}
