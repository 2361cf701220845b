use crate::config::TextConfig;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// How a phrase is matched against the corpus.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum SentenceMode {
    /// Only matches sequences found at the beginning of a sentence.
    #[strum(to_string = "start", serialize = "start_of_sentence")]
    StartOfSentence,
    /// Matches sequences found anywhere in a sentence.
    Anywhere,
}

/// A word sequence and the number of times it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGram {
    words: Vec<String>,
    count: usize,
}

impl NGram {
    pub(crate) fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
            count: 1,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_refs(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn order(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn increment(&mut self) {
        self.count += 1;
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

pub(crate) fn bucket_key(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// All distinct n-grams of one order, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBucket {
    ngrams: Vec<NGram>,
    // lower-cased, space-joined words -> position in `ngrams`
    index: HashMap<String, usize>,
}

impl OrderBucket {
    pub fn iter(&self) -> std::slice::Iter<'_, NGram> {
        self.ngrams.iter()
    }

    pub fn len(&self) -> usize {
        self.ngrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }

    pub fn first(&self) -> Option<&NGram> {
        self.ngrams.first()
    }

    pub fn find(&self, words: &[&str]) -> Option<&NGram> {
        self.index
            .get(&bucket_key(words))
            .map(|&i| &self.ngrams[i])
    }

    /// Sum of all counts in this bucket.
    pub fn total_count(&self) -> usize {
        self.ngrams.iter().map(NGram::count).sum()
    }

    /// Increments the matching n-gram when `may_increment` allows it, or
    /// appends a new one with a count of 1.
    pub(crate) fn observe<F>(&mut self, words: &[&str], may_increment: F)
    where
        F: FnOnce(&NGram) -> bool,
    {
        let key = bucket_key(words);
        match self.index.get(&key) {
            Some(&i) => {
                let ngram = &mut self.ngrams[i];
                if may_increment(ngram) {
                    ngram.increment();
                }
            }
            None => {
                self.index.insert(key, self.ngrams.len());
                self.ngrams.push(NGram::new(words));
            }
        }
    }
}

impl<'a> IntoIterator for &'a OrderBucket {
    type Item = &'a NGram;
    type IntoIter = std::slice::Iter<'a, NGram>;

    fn into_iter(self) -> Self::IntoIter {
        self.ngrams.iter()
    }
}

/// Order-1..N n-gram counts for one body of text.
///
/// If an n-gram of order k is present, every prefix of order k-1 down to 1
/// is present as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGramTable {
    buckets: Vec<OrderBucket>,
    term_count: usize,
    config: TextConfig,
}

impl NGramTable {
    pub(crate) fn with_order(order: usize, config: TextConfig) -> Self {
        Self {
            buckets: vec![OrderBucket::default(); order],
            term_count: 0,
            config,
        }
    }

    /// Highest n-gram order held by the table.
    pub fn order(&self) -> usize {
        self.buckets.len()
    }

    /// Sum of the words of every sentence plus two per sentence.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    pub(crate) fn set_term_count(&mut self, term_count: usize) {
        self.term_count = term_count;
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    pub fn buckets(&self) -> &[OrderBucket] {
        &self.buckets
    }

    /// Bucket holding n-grams of the given order (1-based).
    pub fn bucket(&self, order: usize) -> Option<&OrderBucket> {
        order.checked_sub(1).and_then(|i| self.buckets.get(i))
    }

    pub(crate) fn bucket_mut(&mut self, order: usize) -> &mut OrderBucket {
        &mut self.buckets[order - 1]
    }

    /// Looks up an n-gram by its words in the bucket of matching order.
    pub fn find(&self, words: &[&str]) -> Option<&NGram> {
        self.bucket(words.len())?.find(words)
    }
}

impl fmt::Display for NGramTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            writeln!(f, "{}-GRAM", i + 1)?;
            for (n, ngram) in bucket.iter().enumerate() {
                write!(f, "({})", n + 1)?;
                for word in ngram.words() {
                    write!(f, " {}", word)?;
                }
                writeln!(f, " {}", ngram.count())?;
            }
            write!(f, "\n\n\n{}\n\n\n", "=".repeat(70))?;
        }
        Ok(())
    }
}

/// Probability of one phrase, with the order it was actually scored at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseScore {
    pub phrase: String,
    pub mode: SentenceMode,
    pub order: usize,
    pub probability: f64,
}
