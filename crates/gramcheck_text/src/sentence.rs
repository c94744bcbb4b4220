//! Sentences, words, and cursors.
//!
//! A [`Sentence`] owns its text and a whitespace-split view of it. Rules
//! never index that view directly: they anchor a [`Cursor`] on a word and
//! ask for words at an offset, getting `None` past the end instead of a
//! panic.

use std::fmt;

/// A whitespace-delimited word.
///
/// Keeps the word as written (with any trailing punctuation) alongside a
/// lower-cased copy. Semantic checks look at [`Word::bare`], which drops
/// trailing ASCII punctuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    raw: String,
    lower: String,
    bare_len: usize,
}

impl Word {
    /// Creates a word from its written form.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lower = raw.to_lowercase();
        let bare_len = lower
            .trim_end_matches(|c: char| c.is_ascii_punctuation())
            .len();
        Self {
            raw,
            lower,
            bare_len,
        }
    }

    /// The word as written.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The lower-cased word, punctuation included.
    #[must_use]
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// The lower-cased word without trailing punctuation.
    #[must_use]
    pub fn bare(&self) -> &str {
        &self.lower[..self.bare_len]
    }

    /// Returns true if the bare word equals `word`.
    #[must_use]
    pub fn is(&self, word: &str) -> bool {
        self.bare() == word
    }

    /// Returns true if the bare word is one of `words`.
    #[must_use]
    pub fn is_any(&self, words: &[&str]) -> bool {
        words.contains(&self.bare())
    }

    /// Returns true for present participles and gerunds by spelling alone.
    #[must_use]
    pub fn ends_with_ing(&self) -> bool {
        self.bare().ends_with("ing")
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A single sentence, the unit of analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    words: Vec<Word>,
}

impl Sentence {
    /// Creates a sentence, splitting it on whitespace.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let words = text.split_whitespace().map(Word::new).collect();
        Self { text, words }
    }

    /// The sentence text, exactly as given.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The whitespace-split words.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the sentence has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The first word, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    /// The last character of the text, ignoring trailing whitespace.
    #[must_use]
    pub fn last_char(&self) -> Option<char> {
        self.text.trim_end().chars().next_back()
    }

    /// Returns true if the sentence ends with a question mark.
    #[must_use]
    pub fn is_question(&self) -> bool {
        self.last_char() == Some('?')
    }

    /// Index of the first word whose lower-cased form is exactly `lower`.
    #[must_use]
    pub fn position(&self, lower: &str) -> Option<usize> {
        self.words.iter().position(|w| w.lower() == lower)
    }

    /// Anchors a cursor on the first word whose lower-cased form is `lower`.
    #[must_use]
    pub fn cursor_at(&self, lower: &str) -> Option<Cursor<'_>> {
        self.position(lower)
            .and_then(|index| Cursor::new(&self.words, index))
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A bounds-checked view into a word sequence, anchored at an origin.
///
/// Offset `0` is the origin word itself; offset `n` is the word `n`
/// positions after it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    words: &'a [Word],
    origin: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at `origin`. Returns `None` if `origin` is out of range.
    #[must_use]
    pub fn new(words: &'a [Word], origin: usize) -> Option<Self> {
        (origin < words.len()).then_some(Self { words, origin })
    }

    /// The word at `offset` past the origin.
    #[must_use]
    pub fn at(&self, offset: usize) -> Option<&'a Word> {
        self.origin
            .checked_add(offset)
            .and_then(|index| self.words.get(index))
    }

    /// Returns true if the word at `offset` exists and is `word`.
    #[must_use]
    pub fn is(&self, offset: usize, word: &str) -> bool {
        self.at(offset).is_some_and(|w| w.is(word))
    }

    /// Returns true if the word at `offset` exists and is one of `words`.
    #[must_use]
    pub fn is_any(&self, offset: usize, words: &[&str]) -> bool {
        self.at(offset).is_some_and(|w| w.is_any(words))
    }
}
