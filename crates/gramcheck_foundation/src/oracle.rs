//! Ports to the external oracles the rule engine depends on.
//!
//! The engine never tags words, splits sentences, or runs a general style
//! checker itself. It asks these traits instead, so that production
//! adapters and deterministic test doubles are interchangeable.

use crate::error::Result;
use crate::tag::Tag;

/// Assigns a part-of-speech tag to a single word.
pub trait Tagger {
    /// Tags one word. The word arrives lower-cased or as written, with
    /// trailing punctuation already stripped.
    ///
    /// # Errors
    ///
    /// Returns an error if the tagger produces a tag outside the known
    /// vocabulary, or an `OracleUnavailable` error if it cannot be reached.
    fn tag(&self, word: &str) -> Result<Tag>;
}

/// Splits free text into sentences.
pub trait SentenceSplitter {
    /// Splits `text` into sentences, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the splitter cannot be reached.
    fn split(&self, text: &str) -> Result<Vec<String>>;
}

/// A single complaint from an external style checker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleMatch {
    /// Human-readable description of the problem.
    pub message: String,
}

impl StyleMatch {
    /// Creates a new match with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A generic grammar and spelling checker consulted before the rule engine.
pub trait StyleChecker {
    /// Checks a sentence and returns its complaints, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the checker cannot be reached.
    fn check(&self, sentence: &str) -> Result<Vec<StyleMatch>>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, word: &str) -> Result<Tag> {
        (**self).tag(word)
    }
}

impl<T: SentenceSplitter + ?Sized> SentenceSplitter for &T {
    fn split(&self, text: &str) -> Result<Vec<String>> {
        (**self).split(text)
    }
}

impl<T: StyleChecker + ?Sized> StyleChecker for &T {
    fn check(&self, sentence: &str) -> Result<Vec<StyleMatch>> {
        (**self).check(sentence)
    }
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn tag(&self, word: &str) -> Result<Tag> {
        (**self).tag(word)
    }
}

impl<T: SentenceSplitter + ?Sized> SentenceSplitter for Box<T> {
    fn split(&self, text: &str) -> Result<Vec<String>> {
        (**self).split(text)
    }
}

impl<T: StyleChecker + ?Sized> StyleChecker for Box<T> {
    fn check(&self, sentence: &str) -> Result<Vec<StyleMatch>> {
        (**self).check(sentence)
    }
}
