//! End-to-end checks of whole texts

use gramcheck::engine::{CheckerConfig, Etcetera, HyphenSpacing, TerminalPunctuation};
use gramcheck::runtime::render::{render_json, render_text};

use crate::standard_checker;

const ESSAY: &str = "Customer left early. They should of went. I has a book. \
                     He sing. I am playing basketball. We flew to london. \
                     It was a well - known fact. Did she have gone?";

#[test]
fn essay_report() {
    let report = standard_checker(CheckerConfig::default()).check(ESSAY).unwrap();

    assert_eq!(report.len(), 8);
    let errors = |sentence: &str| report.get(sentence).unwrap().to_vec();

    assert!(errors("Customer left early.").is_empty());
    assert_eq!(errors("They should of went.").len(), 1);
    assert!(errors("I has a book.")[0].starts_with("Wrong usage of 'I'."));
    // Verb class, plus the participle check since "sing" ends in "ing".
    assert_eq!(errors("He sing.").len(), 2);
    assert!(errors("I am playing basketball.").is_empty());
    assert_eq!(
        errors("We flew to london."),
        vec!["The noun 'london' should be capitalised.".to_string()]
    );
    assert_eq!(errors("It was a well - known fact."), vec![HyphenSpacing::SPACED.to_string()]);
    assert!(errors("Did she have gone?").is_empty());
}

#[test]
fn json_response_body() {
    let report = standard_checker(CheckerConfig::default())
        .check("He left. I has a book.")
        .unwrap();
    let json = render_json(&report).unwrap();

    assert!(json.starts_with(r#"{"response":{"He left.":[],"I has a book.":["Wrong usage of 'I'."#));
    assert!(json.ends_with("]}}"));
}

#[test]
fn text_rendering_lists_sentences_in_order() {
    let report = standard_checker(CheckerConfig::default())
        .check("He left. I has a book.")
        .unwrap();
    let text = render_text(&report);
    let he = text.find("He left.").unwrap();
    let i = text.find("I has a book.").unwrap();
    assert!(he < i);
}

#[test]
fn strict_checking_adds_optional_rules() {
    let checker = standard_checker(CheckerConfig::strict());
    let report = checker.check("I like apples, oranges, bananas").unwrap();
    let errors = report.get("I like apples, oranges, bananas").unwrap();
    assert_eq!(
        errors,
        [
            TerminalPunctuation::MESSAGE.to_string(),
            Etcetera::ET_CETERA.to_string()
        ]
    );
}
