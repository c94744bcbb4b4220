//! The rule seam.
//!
//! A rule inspects one normalized sentence and returns the messages it
//! found. Evaluation can also fail part-way, for example when the tagger
//! returns a tag outside the vocabulary; the failure carries whatever the
//! rule had already found so the caller can keep partial results.

use std::fmt;

use gramcheck_foundation::{Error, Result, Tag, Tagger};
use gramcheck_text::{Sentence, Word};

/// Outcome of evaluating one rule against one sentence.
pub type RuleResult = std::result::Result<Vec<String>, RuleFailure>;

/// A rule that stopped before finishing.
#[derive(Debug)]
pub struct RuleFailure {
    /// Messages produced before the failure.
    pub found: Vec<String>,
    /// What went wrong.
    pub error: Error,
}

impl fmt::Display for RuleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (after {} finding(s))", self.error, self.found.len())
    }
}

/// A grammar check over a single sentence.
pub trait Rule {
    /// Short, stable name used in logs.
    fn name(&self) -> &'static str;

    /// Evaluates the rule.
    ///
    /// # Errors
    ///
    /// Returns a [`RuleFailure`] if the tagger fails mid-evaluation.
    fn apply(&self, sentence: &Sentence, tagger: &dyn Tagger) -> RuleResult;
}

/// Ordered message accumulator local to one rule evaluation.
#[derive(Debug, Default)]
pub struct Findings {
    messages: Vec<String>,
}

impl Findings {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Number of messages recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Turns the outcome of an evaluation body into a [`RuleResult`].
    ///
    /// # Errors
    ///
    /// Returns a [`RuleFailure`] holding the recorded messages if `outcome`
    /// is an error.
    pub fn conclude(self, outcome: Result<()>) -> RuleResult {
        match outcome {
            Ok(()) => Ok(self.messages),
            Err(error) => Err(RuleFailure {
                found: self.messages,
                error,
            }),
        }
    }
}

/// Tags a word by its bare, lower-cased form.
///
/// Words that are nothing but punctuation are tagged without asking the
/// tagger.
pub(crate) fn tag_word(tagger: &dyn Tagger, word: &Word) -> Result<Tag> {
    tag_text(tagger, word.bare())
}

/// Tags arbitrary text, short-circuiting empty input.
pub(crate) fn tag_text(tagger: &dyn Tagger, text: &str) -> Result<Tag> {
    if text.is_empty() {
        Ok(Tag::Punctuation)
    } else {
        tagger.tag(text)
    }
}
