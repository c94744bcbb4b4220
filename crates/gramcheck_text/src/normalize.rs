//! Subject normalization.
//!
//! The pronoun rules are written for three canonical subjects only: `i`,
//! `he` and `you`. Third-person singular subjects are rewritten to `he`
//! and plural ones to `you` before the rules run.

use tracing::debug;

/// Surface forms rewritten to `he`, with their capitalized counterparts.
const THIRD_PERSON: [(&str, &str); 3] = [("customer", "Customer"), ("she", "She"), ("it", "It")];

/// Surface forms rewritten to `you`, with their capitalized counterparts.
const PLURAL: [(&str, &str); 2] = [("they", "They"), ("we", "We")];

/// Rewrites third-person and plural subjects to their canonical forms.
///
/// Triggered by a case-insensitive match on any whitespace-split token.
/// Once triggered, only exact lower-case or capitalized tokens are
/// replaced; everything else, punctuation included, is left untouched and
/// the result is re-joined with single spaces. Text with no trigger is
/// returned unchanged, which makes the function idempotent.
#[must_use]
pub fn normalize(sentence: &str) -> String {
    let mut tokens: Vec<&str> = sentence.split_whitespace().collect();
    let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    let mut triggered = false;

    if triggers(&lowered, &THIRD_PERSON) {
        replace(&mut tokens, &THIRD_PERSON, "he", "He");
        triggered = true;
    }
    if triggers(&lowered, &PLURAL) {
        replace(&mut tokens, &PLURAL, "you", "You");
        triggered = true;
    }

    if !triggered {
        return sentence.to_string();
    }

    let normalized = tokens.join(" ");
    debug!(original = sentence, normalized = %normalized, "normalized subject");
    normalized
}

fn triggers(lowered: &[String], forms: &[(&str, &str)]) -> bool {
    lowered
        .iter()
        .any(|token| forms.iter().any(|(lower, _)| token.as_str() == *lower))
}

fn replace<'a>(
    tokens: &mut [&'a str],
    forms: &[(&str, &str)],
    lower: &'a str,
    capitalized: &'a str,
) {
    for token in tokens.iter_mut() {
        if forms.iter().any(|(form, _)| *token == *form) {
            *token = lower;
        } else if forms.iter().any(|(_, form)| *token == *form) {
            *token = capitalized;
        }
    }
}
