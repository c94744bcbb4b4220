//! Cross-layer integration tests for gramcheck
//!
//! Tests that drive text through the splitter, normalizer, rule engine,
//! and report rendering together.

mod end_to_end;
mod properties;

use gramcheck::engine::CheckerConfig;
use gramcheck::foundation::Tag;
use gramcheck::runtime::{StandardChecker, assemble};
use gramcheck::text::{Lexicon, NullStyleChecker};

/// A lexicon with enough open-class words to exercise every rule.
const LEXICON: &str = "
VBD  went played left worked
VBN  gone eaten
VBG  playing sleeping singing
VB   sing play go sleep
JJ   happy red late
NNP  london paris
NNS  apples oranges bananas books
";

fn test_lexicon() -> Lexicon {
    let mut lexicon = Lexicon::standard().unwrap().with_fallback(Tag::NN);
    lexicon.extend_from_source(LEXICON).unwrap();
    lexicon
}

fn standard_checker(config: CheckerConfig) -> StandardChecker {
    assemble(test_lexicon(), NullStyleChecker, config)
}
