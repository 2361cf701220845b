use super::builder::build_from_sentences;
use super::types::{NGram, NGramTable, PhraseScore, SentenceMode};
use crate::error::{NGramError, NgResult};
use crate::text::{word_count, Segmenter};
use rayon::prelude::*;

/// Probability of `phrase` under the MLE chain rule against `table`.
///
/// Any n-gram missing from the corpus makes the whole result 0.
pub fn probability(table: &NGramTable, phrase: &str, mode: SentenceMode) -> NgResult<f64> {
    estimate(table, phrase, mode).map(|(_, p)| p)
}

/// Like [`probability`], but keeps the phrase, mode and effective order.
pub fn score_phrase(table: &NGramTable, phrase: &str, mode: SentenceMode) -> NgResult<PhraseScore> {
    let (order, probability) = estimate(table, phrase, mode)?;
    Ok(PhraseScore {
        phrase: phrase.to_string(),
        mode,
        order,
        probability,
    })
}

/// Scores independent phrases in parallel. Results keep the input order.
pub fn score_batch<S>(
    table: &NGramTable,
    phrases: &[S],
    mode: SentenceMode,
) -> NgResult<Vec<PhraseScore>>
where
    S: AsRef<str> + Sync,
{
    phrases
        .par_iter()
        .map(|phrase| score_phrase(table, phrase.as_ref(), mode))
        .collect()
}

fn estimate(table: &NGramTable, phrase: &str, mode: SentenceMode) -> NgResult<(usize, f64)> {
    let config = table.config();
    let sentences = Segmenter::new(config)?.sentences(phrase);
    let phrase_words: usize = sentences.iter().map(|s| word_count(s)).sum();
    if phrase_words == 0 {
        return Err(NGramError::EmptyInput("phrase"));
    }

    let order = table.order().min(phrase_words);
    let marker = match mode {
        SentenceMode::StartOfSentence => config.start_marker.as_str(),
        SentenceMode::Anywhere => "",
    };
    let query = build_from_sentences(order, &sentences, marker, config.clone())?;

    let mut probability = 1.0;

    // Lower orders are not covered by the highest-order walk below when the
    // phrase is not anchored by start markers.
    if mode == SentenceMode::Anywhere {
        let upper = if order == 1 { 1 } else { order - 1 };
        for n in 1..=upper {
            let factor = match query.bucket(n).and_then(|b| b.first()) {
                Some(gram) if n == 1 => unigram_probability(table, gram),
                Some(gram) => conditional_probability(table, gram),
                None => 0.0,
            };
            probability *= factor;
            if probability == 0.0 {
                return Ok((order, 0.0));
            }
        }
    }

    // At order 1 from the start there is no history to condition on, but
    // every word still has to be in the corpus.
    if mode == SentenceMode::StartOfSentence && order == 1 {
        let seen = query.bucket(1).is_some_and(|bucket| {
            !bucket.is_empty()
                && bucket
                    .iter()
                    .all(|gram| table.find(&gram.word_refs()).is_some())
        });
        if !seen || table.term_count() == 0 {
            return Ok((order, 0.0));
        }
    }

    if order >= 2 {
        if let Some(highest) = query.bucket(order) {
            for gram in highest {
                probability *= conditional_probability(table, gram);
                if probability == 0.0 {
                    return Ok((order, 0.0));
                }
            }
        }
    }

    Ok((order, probability))
}

fn unigram_probability(table: &NGramTable, gram: &NGram) -> f64 {
    match table.find(&gram.word_refs()) {
        Some(found) => ratio(found.count(), table.term_count()),
        None => 0.0,
    }
}

/// count(w1..wk) / count(w1..wk-1), both taken from the corpus table.
fn conditional_probability(table: &NGramTable, gram: &NGram) -> f64 {
    let words = gram.word_refs();
    let Some(found) = table.find(&words) else {
        return 0.0;
    };
    match table.find(&words[..words.len() - 1]) {
        Some(prefix) => ratio(found.count(), prefix.count()),
        None => 0.0,
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
