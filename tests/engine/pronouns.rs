//! Integration tests for the pronoun rules

use gramcheck_engine::profile::{HE, I, YOU};
use gramcheck_engine::{PronounRules, Rule, SubjectProfile};
use gramcheck_text::{Sentence, normalize};
use proptest::prelude::*;

use crate::test_lexicon;

fn run(rules: PronounRules, text: &str) -> Vec<String> {
    rules.apply(&Sentence::new(text), &test_lexicon()).unwrap()
}

fn run_all(text: &str) -> Vec<String> {
    let sentence = Sentence::new(normalize(text));
    let lexicon = test_lexicon();
    [
        PronounRules::second_person(),
        PronounRules::third_person(),
        PronounRules::first_person(),
    ]
    .iter()
    .flat_map(|rules| rules.apply(&sentence, &lexicon).unwrap())
    .collect()
}

// =============================================================================
// Documented Examples
// =============================================================================

#[test]
fn i_has_a_book() {
    let errors = run_all("I has a book.");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Wrong usage of 'I'."));
}

#[test]
fn he_sing() {
    // "sing" ends in "ing", so the participle check fires alongside the
    // verb-class check.
    let errors = run_all("he sing.");
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("Present participle form of the verb"));
    assert!(errors[1].starts_with("Pronoun should be used with a third form of verb"));
}

#[test]
fn i_am_playing_basketball() {
    assert!(run_all("i am playing basketball.").is_empty());
}

#[test]
fn they_should_of_went() {
    let errors = run_all("They should of went.");
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.contains("verb")));
}

#[test]
fn customer_is_checked_as_he() {
    assert!(run_all("Customer left early.").is_empty());
    // Verb-class and participle ("sing" ends in "ing").
    assert_eq!(run_all("Customer sing.").len(), 2);
}

// =============================================================================
// Agreement
// =============================================================================

#[test]
fn copula_agreement() {
    for (text, expected) in [
        ("I am playing.", 0),
        ("He is playing.", 0),
        ("You are playing.", 0),
        ("I is playing.", 1),
        ("He are playing.", 1),
        ("You is playing.", 1),
    ] {
        assert_eq!(run_all(text).len(), expected, "{text}");
    }
}

#[test]
fn perfect_agreement() {
    assert!(run(PronounRules::third_person(), "He has gone home.").is_empty());
    assert!(run(PronounRules::first_person(), "I have gone home.").is_empty());
    assert!(run(PronounRules::second_person(), "You had gone home.").is_empty());
    assert_eq!(run(PronounRules::third_person(), "He have gone home.").len(), 1);
}

#[test]
fn messages_name_the_bare_word() {
    let errors = run(PronounRules::third_person(), "He has been play.");
    assert_eq!(errors, vec!["Wrong form of the verb is used here (play).".to_string()]);
}

#[test]
fn subject_must_open_the_sentence() {
    assert!(run(PronounRules::first_person(), "Then I has a book.").is_empty());
}

#[test]
fn every_profile_is_gated_on_its_own_subject() {
    for profile in SubjectProfile::all() {
        let rules = PronounRules::new(profile);
        let text = format!("{} been", profile.subject);
        assert!(!run(rules, &text).is_empty(), "{}", profile.subject);
        for other in SubjectProfile::all() {
            if other.subject != profile.subject {
                assert!(run(PronounRules::new(other), &text).is_empty());
            }
        }
    }
}

#[test]
fn rule_names() {
    assert_eq!(PronounRules::first_person().name(), "pronoun-i");
    assert_eq!(PronounRules::third_person().name(), "pronoun-he");
    assert_eq!(PronounRules::second_person().name(), "pronoun-you");
}

// =============================================================================
// Subject Tables
// =============================================================================

/// (subject, sentence, message template, word it names, whether it fires)
type Case = (&'static SubjectProfile, &'static str, &'static str, &'static str, bool);

fn assert_cases(cases: &[Case]) {
    for &(profile, text, template, word, fires) in cases {
        let expected = template.replace("{word}", word);
        let errors = run(PronounRules::new(profile), text);
        assert_eq!(
            errors.contains(&expected),
            fires,
            "{} / {text}: {errors:?}",
            profile.subject
        );
    }
}

#[test]
fn verb_class_by_subject() {
    assert_cases(&[
        (&I, "I sings", I.messages.verb_class, "sings", true),
        (&HE, "He sings", HE.messages.verb_class, "sings", false),
        (&YOU, "You sings", YOU.messages.verb_class, "sings", true),
        (&I, "I happy", I.messages.verb_class, "happy", false),
        (&HE, "He happy", HE.messages.verb_class, "happy", true),
        (&YOU, "You happy", YOU.messages.verb_class, "happy", true),
    ]);
}

#[test]
fn determiner_by_subject() {
    assert_cases(&[
        (&HE, "He is london.", HE.messages.determiner, "", true),
        (&I, "I am london.", I.messages.determiner, "", false),
        (&YOU, "You are london.", YOU.messages.determiner, "", false),
        (&I, "I am best.", I.messages.determiner, "", true),
        (&HE, "He is best.", HE.messages.determiner, "", true),
        (&YOU, "You are best.", YOU.messages.determiner, "", true),
    ]);
}

#[test]
fn continuous_by_subject() {
    assert_cases(&[
        (&YOU, "You are best.", YOU.messages.continuous, "best", false),
        (&HE, "He is best.", HE.messages.continuous, "best", true),
        (&I, "I am best.", I.messages.continuous, "best", true),
        (&HE, "He is eaten.", HE.messages.continuous, "eaten", true),
        (&I, "I am eaten.", I.messages.continuous, "eaten", false),
        (&YOU, "You are eaten.", YOU.messages.continuous, "eaten", false),
        (&I, "I am london.", I.messages.continuous, "london", false),
        (&HE, "He is london.", HE.messages.continuous, "london", true),
    ]);
}

#[test]
fn modal_required_by_subject() {
    assert_cases(&[
        (&I, "I really have been gone", I.messages.modal_required, "", true),
        (&HE, "He really have been gone", HE.messages.modal_required, "", true),
        (&YOU, "You really have been gone", YOU.messages.modal_required, "", true),
        (&I, "I would have been gone", I.messages.modal_required, "", false),
    ]);
}

#[test]
fn been_without_auxiliary_by_subject() {
    assert_cases(&[
        (&I, "I was been here", I.messages.been_without_auxiliary, "", true),
        (&HE, "He was been here", HE.messages.been_without_auxiliary, "", true),
        (&YOU, "You were been here", YOU.messages.been_without_auxiliary, "", true),
        (&I, "I had been here", I.messages.been_without_auxiliary, "", false),
        (&HE, "He has been here", HE.messages.been_without_auxiliary, "", false),
        (&YOU, "You had been here", YOU.messages.been_without_auxiliary, "", false),
    ]);
}

#[test]
fn perfect_progressive_by_subject() {
    assert_cases(&[
        (&I, "I have been gone", I.messages.perfect_progressive, "gone", false),
        (&HE, "He has been gone", HE.messages.perfect_progressive, "gone", false),
        (&YOU, "You have been gone", YOU.messages.perfect_progressive, "gone", true),
        // Only "have" opens the perfect progressive for "I".
        (&I, "I had been play", I.messages.perfect_progressive, "play", false),
        (&HE, "He had been play", HE.messages.perfect_progressive, "play", true),
    ]);
}

#[test]
fn modal_complement_by_subject() {
    assert_cases(&[
        (&HE, "He would of", HE.messages.modal_complement, "of", false),
        (&YOU, "You would of", YOU.messages.modal_complement, "of", true),
        (&I, "I would of", I.messages.modal_complement, "of", true),
        (&I, "I would early", I.messages.modal_complement, "early", false),
        (&YOU, "You would early", YOU.messages.modal_complement, "early", true),
    ]);
}

#[test]
fn modal_perfect_by_subject() {
    assert_cases(&[
        (&HE, "He would have been play", HE.messages.modal_perfect, "play", true),
        (&HE, "He would have been gone", HE.messages.modal_perfect, "gone", false),
        (&HE, "He would have been early", HE.messages.modal_perfect, "early", false),
        (&YOU, "You would have been gone", YOU.messages.modal_perfect, "gone", true),
        (&YOU, "You would have been happy", YOU.messages.modal_perfect, "happy", false),
        (&I, "I would have been gone", I.messages.modal_perfect, "gone", false),
        (&I, "I would have been early", I.messages.modal_perfect, "early", true),
    ]);
}

// =============================================================================
// Properties
// =============================================================================

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "I", "i", "he", "He", "you", "You", "She", "they", "am", "is", "are", "have", "has",
        "had", "been", "would", "not", "play", "playing", "went", "gone", "book", "happy",
        "the", "of",
    ])
}

proptest! {
    #[test]
    fn questions_never_get_pronoun_errors(words in prop::collection::vec(word(), 1..8)) {
        let text = format!("{}?", words.join(" "));
        prop_assert!(run_all(&text).is_empty());
    }

    #[test]
    fn pronoun_rules_never_fail_on_short_input(words in prop::collection::vec(word(), 0..6)) {
        let sentence = Sentence::new(words.join(" "));
        let lexicon = test_lexicon();
        for profile in SubjectProfile::all() {
            prop_assert!(PronounRules::new(profile).apply(&sentence, &lexicon).is_ok());
        }
    }
}
