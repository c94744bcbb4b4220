//! Integration tests for the lexicon tagger

use gramcheck_foundation::{ErrorKind, Tag, Tagger};
use gramcheck_text::Lexicon;
use std::io::Write;

#[test]
fn standard_lexicon_knows_closed_class_words() {
    let lexicon = Lexicon::standard().unwrap();
    assert_eq!(lexicon.tag("would").unwrap(), Tag::MD);
    assert_eq!(lexicon.tag("has").unwrap(), Tag::VBZ);
    assert_eq!(lexicon.tag("am").unwrap(), Tag::VBP);
    assert_eq!(lexicon.tag("the").unwrap(), Tag::DT);
    assert_eq!(lexicon.tag("I").unwrap(), Tag::PRP);
    assert_eq!(lexicon.tag("zebra").unwrap(), Tag::Unclassified);
}

#[test]
fn source_lines_and_comments() {
    let lexicon = Lexicon::parse(
        "# nouns\n\
         NN   book  car   # trailing comment\n\
         \n\
         NNP  london\n",
    )
    .unwrap();
    assert_eq!(lexicon.len(), 3);
    assert_eq!(lexicon.lookup("Book"), Some(Tag::NN));
    assert_eq!(lexicon.lookup("london"), Some(Tag::NNP));
    assert_eq!(lexicon.lookup("paris"), None);
}

#[test]
fn later_lines_override_earlier_ones() {
    let lexicon = Lexicon::parse("NN run\nVB run\n").unwrap();
    assert_eq!(lexicon.lookup("run"), Some(Tag::VB));
    assert_eq!(lexicon.len(), 1);
}

#[test]
fn unknown_tag_is_a_parse_error_with_line() {
    let err = Lexicon::parse("NN book\nNOUN car\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { line: 2, .. }));
}

#[test]
fn tag_without_words_is_a_parse_error() {
    let err = Lexicon::parse("NN\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { line: 1, .. }));
}

#[test]
fn fallback_and_builders() {
    let lexicon = Lexicon::new()
        .with_fallback(Tag::NN)
        .with_entry("went", Tag::VBD)
        .with_words(Tag::VBG, &["playing", "singing"]);
    assert_eq!(lexicon.fallback(), Tag::NN);
    assert_eq!(lexicon.tag("went").unwrap(), Tag::VBD);
    assert_eq!(lexicon.tag("Singing").unwrap(), Tag::VBG);
    assert_eq!(lexicon.tag("anything").unwrap(), Tag::NN);
}

#[test]
fn load_layers_file_over_standard() {
    let path = std::env::temp_dir().join(format!("gramcheck-lexicon-{}.lex", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "NNP london paris").unwrap();
        writeln!(file, "VBD went").unwrap();
    }

    let lexicon = Lexicon::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(lexicon.tag("london").unwrap(), Tag::NNP);
    assert_eq!(lexicon.tag("went").unwrap(), Tag::VBD);
    assert_eq!(lexicon.tag("would").unwrap(), Tag::MD);
}

#[test]
fn load_missing_file_is_fatal() {
    let err = Lexicon::load("/nonexistent/gramcheck.lex").unwrap_err();
    assert!(err.is_fatal());
    assert!(err.context.is_some());
}
