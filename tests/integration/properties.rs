//! Properties that hold for every input

use gramcheck::engine::{CheckerConfig, HyphenSpacing, NounCapitalization, Rule};
use gramcheck::foundation::SentenceSplitter;
use gramcheck::text::{Sentence, UnicodeSentenceSplitter, normalize};
use proptest::prelude::*;

use crate::{standard_checker, test_lexicon};

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "I", "i", "He", "he", "You", "you", "She", "It", "They", "we", "Customer", "am", "is",
        "are", "was", "were", "have", "has", "had", "been", "would", "could", "not", "play",
        "playing", "went", "gone", "book", "london", "apples,", "oranges,", "happy", "the",
        "of", "-", "well-known",
    ])
}

fn sentence() -> impl Strategy<Value = String> {
    (prop::collection::vec(word(), 1..8), prop::sample::select(vec![".", "!", "?", ""]))
        .prop_map(|(words, end)| format!("{}{end}", words.join(" ")))
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 0..5).prop_map(|sentences| sentences.join(" "))
}

proptest! {
    #[test]
    fn report_keys_equal_the_split(text in text()) {
        let report = standard_checker(CheckerConfig::strict()).check(&text).unwrap();
        let mut expected: Vec<String> = Vec::new();
        for sentence in UnicodeSentenceSplitter::new().split(&text).unwrap() {
            if !expected.contains(&sentence) {
                expected.push(sentence);
            }
        }
        prop_assert_eq!(report.sentences().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn questions_only_get_subject_independent_errors(words in prop::collection::vec(word(), 1..8)) {
        let question = format!("{}?", words.join(" "));
        let checker = standard_checker(CheckerConfig::default());
        let errors = checker.check_sentence(&question).unwrap();

        let normalized = Sentence::new(normalize(&question));
        let lexicon = test_lexicon();
        let mut expected = Vec::new();
        for rule in [&NounCapitalization as &dyn Rule, &HyphenSpacing] {
            expected.extend(rule.apply(&normalized, &lexicon).unwrap());
        }
        prop_assert_eq!(errors, expected);
    }

    #[test]
    fn normalization_is_idempotent(sentence in sentence()) {
        let once = normalize(&sentence);
        prop_assert_eq!(normalize(&once), once);
    }
}
