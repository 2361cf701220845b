use ngramprob::config::TextConfig;
use ngramprob::error::NGramError;
use ngramprob::model::{build_table, probability, score_phrase, NGramModel, NGramTable, SentenceMode};
use rstest::{fixture, rstest};
use std::str::FromStr;

const CAT_DOG: &str = "The cat sat. The dog sat.";
const EPS: f64 = 1e-12;

#[fixture]
fn bigrams() -> NGramTable {
    build_table(2, CAT_DOG, &TextConfig::default()).unwrap()
}

#[fixture]
fn trigrams() -> NGramTable {
    build_table(3, CAT_DOG, &TextConfig::default()).unwrap()
}

// --- BIGRAM TABLE ---

#[rstest]
#[case("the cat", SentenceMode::StartOfSentence, 0.5)]
#[case("THE Cat", SentenceMode::StartOfSentence, 0.5)]
#[case("the fox", SentenceMode::StartOfSentence, 0.0)]
#[case("cat sat", SentenceMode::StartOfSentence, 0.0)]
#[case("the cat sat", SentenceMode::StartOfSentence, 0.5)]
#[case("the", SentenceMode::Anywhere, 0.2)]
#[case("fox", SentenceMode::Anywhere, 0.0)]
#[case("the cat", SentenceMode::Anywhere, 0.1)]
#[case("cat sat", SentenceMode::Anywhere, 0.1)]
#[case("the dog sat", SentenceMode::Anywhere, 0.1)]
#[case("the fox", SentenceMode::Anywhere, 0.0)]
fn test_bigram_probabilities(
    bigrams: NGramTable,
    #[case] phrase: &str,
    #[case] mode: SentenceMode,
    #[case] expected: f64,
) {
    let p = probability(&bigrams, phrase, mode).unwrap();
    assert!(
        (p - expected).abs() < EPS,
        "P({:?}, {}) = {}, expected {}",
        phrase,
        mode,
        p,
        expected
    );
}

#[rstest]
fn test_single_word_anywhere_is_unigram_frequency(bigrams: NGramTable) {
    let the = bigrams.find(&["the"]).unwrap().count() as f64;
    let expected = the / bigrams.term_count() as f64;
    let p = probability(&bigrams, "the", SentenceMode::Anywhere).unwrap();
    assert!((p - expected).abs() < EPS);
}

#[rstest]
#[case("the", 1.0)]
#[case("SAT", 1.0)]
#[case("zebra", 0.0)]
fn test_single_word_from_start_needs_a_corpus_word(
    bigrams: NGramTable,
    #[case] phrase: &str,
    #[case] expected: f64,
) {
    // No history to condition on once the order drops to 1.
    let p = probability(&bigrams, phrase, SentenceMode::StartOfSentence).unwrap();
    assert_eq!(p, expected);
}

#[test]
fn test_order_one_table_from_start_checks_every_word() {
    let table = build_table(1, CAT_DOG, &TextConfig::default()).unwrap();
    assert_eq!(probability(&table, "the cat", SentenceMode::StartOfSentence).unwrap(), 1.0);
    assert_eq!(probability(&table, "the zebra", SentenceMode::StartOfSentence).unwrap(), 0.0);
}

// --- TRIGRAM TABLE ---

#[rstest]
#[case("the cat sat", SentenceMode::StartOfSentence, 0.5)]
#[case("the dog sat", SentenceMode::StartOfSentence, 0.5)]
#[case("the cat", SentenceMode::StartOfSentence, 0.5)]
#[case("dog sat", SentenceMode::StartOfSentence, 0.0)]
#[case("the cat sat", SentenceMode::Anywhere, 0.1)]
#[case("cat sat", SentenceMode::Anywhere, 0.1)]
#[case("the cat ran", SentenceMode::Anywhere, 0.0)]
fn test_trigram_probabilities(
    trigrams: NGramTable,
    #[case] phrase: &str,
    #[case] mode: SentenceMode,
    #[case] expected: f64,
) {
    let p = probability(&trigrams, phrase, mode).unwrap();
    assert!((p - expected).abs() < EPS, "P({:?}) = {}", phrase, p);
}

// --- ORDER REDUCTION ---

#[rstest]
fn test_long_phrase_uses_table_order(bigrams: NGramTable) {
    let score = score_phrase(&bigrams, "the cat sat", SentenceMode::StartOfSentence).unwrap();
    assert_eq!(score.order, 2);
}

#[rstest]
fn test_short_phrase_lowers_order(trigrams: NGramTable) {
    let score = score_phrase(&trigrams, "the cat", SentenceMode::StartOfSentence).unwrap();
    assert_eq!(score.order, 2);
    let score = score_phrase(&trigrams, "cat", SentenceMode::Anywhere).unwrap();
    assert_eq!(score.order, 1);
}

// --- EDGE CASES ---

#[rstest]
#[case("")]
#[case("   ")]
#[case("?!.")]
#[case("$%^")]
fn test_empty_phrase_is_rejected(bigrams: NGramTable, #[case] phrase: &str) {
    let err = probability(&bigrams, phrase, SentenceMode::Anywhere).unwrap_err();
    assert!(matches!(err, NGramError::EmptyInput(_)));
}

#[test]
fn test_empty_corpus_scores_zero() {
    let table = build_table(2, "", &TextConfig::default()).unwrap();
    assert_eq!(probability(&table, "the", SentenceMode::Anywhere).unwrap(), 0.0);
    assert_eq!(
        probability(&table, "the cat", SentenceMode::StartOfSentence).unwrap(),
        0.0
    );
    assert_eq!(
        probability(&table, "zebra", SentenceMode::StartOfSentence).unwrap(),
        0.0
    );
}

#[test]
fn test_sentence_mode_parses_from_cli_names() {
    assert_eq!(
        SentenceMode::from_str("start").unwrap(),
        SentenceMode::StartOfSentence
    );
    assert_eq!(
        SentenceMode::from_str("Anywhere").unwrap(),
        SentenceMode::Anywhere
    );
    assert_eq!(SentenceMode::StartOfSentence.to_string(), "start");
    assert!(SentenceMode::from_str("middle").is_err());
}

// --- BATCH & SESSION ---

#[rstest]
fn test_batch_keeps_input_order(bigrams: NGramTable) {
    let phrases = ["the cat", "the fox", "the dog sat", "the"];
    let scores = ngramprob::model::score_batch(&bigrams, &phrases, SentenceMode::Anywhere).unwrap();

    assert_eq!(scores.len(), phrases.len());
    for (score, phrase) in scores.iter().zip(phrases) {
        assert_eq!(score.phrase, phrase);
        let single = probability(&bigrams, phrase, SentenceMode::Anywhere).unwrap();
        assert_eq!(score.probability, single);
    }
}

#[rstest]
fn test_batch_fails_on_empty_phrase(bigrams: NGramTable) {
    let phrases = vec!["the cat".to_string(), String::new()];
    assert!(ngramprob::model::score_batch(&bigrams, &phrases, SentenceMode::Anywhere).is_err());
}

#[test]
fn test_model_switches_orders() {
    let mut model = NGramModel::from_text(2, CAT_DOG, TextConfig::default()).unwrap();
    assert_eq!(model.order(), 2);
    assert!(model.source().is_none());

    let p = model.trigram_probability("the dog sat").unwrap();
    assert_eq!(model.order(), 3);
    assert!((p - 0.5).abs() < EPS);

    let p = model.bigram_probability("the cat").unwrap();
    assert_eq!(model.order(), 2);
    assert!((p - 0.5).abs() < EPS);

    model.build_quadrigrams().unwrap();
    assert_eq!(model.order(), 4);
    model.build_pentagrams().unwrap();
    assert_eq!(model.order(), 5);
    model.build_trigrams().unwrap();
    assert_eq!(model.order(), 3);
    model.build_bigrams().unwrap();
    assert_eq!(model.order(), 2);
}

#[test]
fn test_failed_rebuild_keeps_previous_table() {
    let mut model = NGramModel::from_text(3, CAT_DOG, TextConfig::default()).unwrap();
    let before = model.table().clone();

    assert!(matches!(model.rebuild(0), Err(NGramError::InvalidOrder(0))));
    assert_eq!(model.table(), &before);
}
