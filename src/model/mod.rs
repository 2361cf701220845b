pub mod builder;
pub mod estimator;
pub mod types;

pub use self::builder::build_table;
pub use self::estimator::{probability, score_batch, score_phrase};
pub use self::types::{NGram, NGramTable, OrderBucket, PhraseScore, SentenceMode};

use crate::config::TextConfig;
use crate::error::NgResult;
use crate::loader::load_corpus;
use std::path::{Path, PathBuf};

/// A corpus and the n-gram table currently computed from it.
///
/// The table can be recomputed at another order without reloading the
/// corpus from disk.
pub struct NGramModel {
    corpus: String,
    source: Option<PathBuf>,
    table: NGramTable,
}

impl NGramModel {
    pub fn from_text(order: usize, text: impl Into<String>, config: TextConfig) -> NgResult<Self> {
        let corpus = text.into();
        let table = build_table(order, &corpus, &config)?;
        Ok(Self {
            corpus,
            source: None,
            table,
        })
    }

    pub fn from_file<P: AsRef<Path>>(order: usize, path: P, config: TextConfig) -> NgResult<Self> {
        let corpus = load_corpus(path.as_ref())?;
        let mut model = Self::from_text(order, corpus, config)?;
        model.source = Some(path.as_ref().to_path_buf());
        Ok(model)
    }

    /// Recomputes the table at `order`. The previous table is kept on error.
    pub fn rebuild(&mut self, order: usize) -> NgResult<()> {
        self.table = build_table(order, &self.corpus, self.table.config())?;
        Ok(())
    }

    pub fn build_bigrams(&mut self) -> NgResult<()> {
        self.rebuild(2)
    }

    pub fn build_trigrams(&mut self) -> NgResult<()> {
        self.rebuild(3)
    }

    pub fn build_quadrigrams(&mut self) -> NgResult<()> {
        self.rebuild(4)
    }

    pub fn build_pentagrams(&mut self) -> NgResult<()> {
        self.rebuild(5)
    }

    pub fn probability(&self, phrase: &str, mode: SentenceMode) -> NgResult<f64> {
        probability(&self.table, phrase, mode)
    }

    pub fn score_batch<S: AsRef<str> + Sync>(
        &self,
        phrases: &[S],
        mode: SentenceMode,
    ) -> NgResult<Vec<PhraseScore>> {
        score_batch(&self.table, phrases, mode)
    }

    /// Switches the model to bigrams and scores from the start of a sentence.
    pub fn bigram_probability(&mut self, phrase: &str) -> NgResult<f64> {
        self.build_bigrams()?;
        self.probability(phrase, SentenceMode::StartOfSentence)
    }

    /// Switches the model to trigrams and scores from the start of a sentence.
    pub fn trigram_probability(&mut self, phrase: &str) -> NgResult<f64> {
        self.build_trigrams()?;
        self.probability(phrase, SentenceMode::StartOfSentence)
    }

    pub fn table(&self) -> &NGramTable {
        &self.table
    }

    pub fn order(&self) -> usize {
        self.table.order()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
