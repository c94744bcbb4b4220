//! Integration tests for subject normalization

use gramcheck_text::normalize;
use proptest::prelude::*;

// =============================================================================
// Rewrites
// =============================================================================

#[test]
fn third_person_subjects_become_he() {
    assert_eq!(normalize("Customer left early."), "He left early.");
    assert_eq!(normalize("She has gone"), "He has gone");
    assert_eq!(normalize("it works"), "he works");
}

#[test]
fn plural_subjects_become_you() {
    assert_eq!(normalize("They should of went."), "You should of went.");
    assert_eq!(normalize("we are late"), "you are late");
}

#[test]
fn both_rewrites_apply() {
    assert_eq!(normalize("They said she left"), "You said he left");
}

#[test]
fn only_exact_forms_are_replaced() {
    // "SHE" triggers the rewrite but is neither lower-case nor capitalized.
    assert_eq!(normalize("SHE  said it"), "SHE said he");
}

#[test]
fn punctuated_tokens_do_not_trigger() {
    assert_eq!(normalize("Give it."), "Give it.");
    assert_eq!(normalize("Ask them, they."), "Ask them, they.");
}

#[test]
fn untouched_text_keeps_its_whitespace() {
    assert_eq!(normalize("I  am   here."), "I  am   here.");
    assert_eq!(normalize(""), "");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn normalization_is_idempotent(text in "((She|she|SHE|They|we|it\\.|It|I|am|is|are|here)[ ]{1,2}){0,8}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_text_has_no_exact_subject_forms(text in "((She|they|We|customer|I|run)[ ]){0,8}") {
        let normalized = normalize(&text);
        for form in ["she", "She", "they", "They", "we", "We", "customer", "Customer"] {
            prop_assert!(!normalized.split_whitespace().any(|t| t == form));
        }
    }
}
