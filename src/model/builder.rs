use super::types::NGramTable;
use crate::config::TextConfig;
use crate::error::{NGramError, NgResult};
use crate::text::{tokenize, word_count, Segmenter};
use tracing::{debug, warn};

/// Builds order-1..`order` n-gram counts from raw corpus text.
pub fn build_table(order: usize, text: &str, config: &TextConfig) -> NgResult<NGramTable> {
    if order < 1 {
        return Err(NGramError::InvalidOrder(order));
    }
    config.validate()?;

    let sentences = Segmenter::new(config)?.sentences(text);
    if sentences.is_empty() {
        warn!("⚠️  Corpus contains no sentences. Every query will score 0.");
    }

    let table = build_from_sentences(order, &sentences, &config.start_marker, config.clone())?;

    debug!(
        "Built {}-gram table: {} sentences, {} terms, bucket sizes {:?}",
        table.order(),
        sentences.len(),
        table.term_count(),
        table.buckets().iter().map(|b| b.len()).collect::<Vec<_>>()
    );

    Ok(table)
}

/// Counts every order in a single pass over already segmented sentences.
///
/// `marker` pads each sentence `order - 1` times; an empty marker means no
/// padding. The single-word marker n-gram never counts past the number of
/// sentences.
pub(crate) fn build_from_sentences(
    order: usize,
    sentences: &[String],
    marker: &str,
    config: TextConfig,
) -> NgResult<NGramTable> {
    if order < 1 {
        return Err(NGramError::InvalidOrder(order));
    }

    let sentence_count = sentences.len();
    let marker_key = marker.to_lowercase();
    let mut table = NGramTable::with_order(order, config);
    let mut words_seen = 0;

    for sentence in sentences {
        words_seen += word_count(sentence);
        let words = tokenize(sentence, marker, order);

        // The window only ever shrinks within a sentence.
        let mut window = order;
        for start in 0..words.len() {
            while start + window > words.len() {
                window -= 1;
            }
            let n_words = &words[start..start + window];

            for n in 1..=window {
                table.bucket_mut(n).observe(&n_words[..n], |ngram| {
                    let capped_marker = n == 1
                        && !marker_key.is_empty()
                        && ngram.words()[0].to_lowercase() == marker_key
                        && ngram.count() >= sentence_count;
                    !capped_marker
                });
            }
        }
    }

    table.set_term_count(words_seen + 2 * sentence_count);
    Ok(table)
}
