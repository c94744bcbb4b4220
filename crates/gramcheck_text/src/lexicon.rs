//! Word-to-tag lookup table.
//!
//! A [`Lexicon`] is the simplest possible [`Tagger`]: every word has at
//! most one tag, and anything unknown gets the fallback tag. It exists so
//! the engine can run without a statistical tagger, and so tests can pin
//! the tag of every word they use.
//!
//! # Source format
//!
//! ```text
//! # comment
//! MD   can could may might must shall should will would
//! VBZ  is has does
//! ```
//!
//! Each line names a tag followed by the words that carry it. Later lines
//! override earlier ones.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use gramcheck_foundation::{Error, ErrorContext, Result, Tag, Tagger};

use crate::stdlib;

/// A word-to-tag table implementing [`Tagger`].
#[derive(Clone, Debug)]
pub struct Lexicon {
    /// Lower-cased word -> tag
    entries: HashMap<String, Tag>,
    /// Tag for words not in the table
    fallback: Tag,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Creates an empty lexicon whose fallback is [`Tag::Unclassified`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: Tag::Unclassified,
        }
    }

    /// Creates a lexicon preloaded with [`stdlib::CLOSED_CLASS`].
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in source fails to parse.
    pub fn standard() -> Result<Self> {
        Self::parse(stdlib::CLOSED_CLASS)
    }

    /// Parses a lexicon from source text.
    ///
    /// # Errors
    ///
    /// Returns a parse error naming the offending line.
    pub fn parse(source: &str) -> Result<Self> {
        let mut lexicon = Self::new();
        lexicon.extend_from_source(source)?;
        Ok(lexicon)
    }

    /// Loads a lexicon file on top of the built-in closed-class words.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            Error::from(e).with_context(ErrorContext::new().with_source(path.display().to_string()))
        })?;
        let mut lexicon = Self::standard()?;
        lexicon.extend_from_source(&source).map_err(|e| {
            e.with_context(ErrorContext::new().with_source(path.display().to_string()))
        })?;
        Ok(lexicon)
    }

    /// Sets the fallback tag.
    #[must_use]
    pub fn with_fallback(mut self, tag: Tag) -> Self {
        self.fallback = tag;
        self
    }

    /// Adds an entry.
    #[must_use]
    pub fn with_entry(mut self, word: &str, tag: Tag) -> Self {
        self.insert(word, tag);
        self
    }

    /// Adds several words sharing one tag.
    #[must_use]
    pub fn with_words(mut self, tag: Tag, words: &[&str]) -> Self {
        for word in words {
            self.insert(word, tag);
        }
        self
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, word: &str, tag: Tag) {
        self.entries.insert(word.to_lowercase(), tag);
    }

    /// Parses source text into this lexicon. Returns the number of words added.
    ///
    /// # Errors
    ///
    /// Returns a parse error naming the offending line.
    pub fn extend_from_source(&mut self, source: &str) -> Result<usize> {
        let mut added = 0;
        for (index, line) in source.lines().enumerate() {
            let line_no = u32::try_from(index + 1).unwrap_or(u32::MAX);
            let content = line.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            let mut fields = content.split_whitespace();
            let Some(tag_field) = fields.next() else {
                continue;
            };
            let tag: Tag = tag_field.parse().map_err(|_| {
                Error::parse(format!("unknown tag `{tag_field}`"), line_no, 1, line)
            })?;

            let before = added;
            for word in fields {
                self.insert(word, tag);
                added += 1;
            }
            if added == before {
                return Err(Error::parse(
                    format!("tag `{tag_field}` has no words"),
                    line_no,
                    1,
                    line,
                ));
            }
        }
        Ok(added)
    }

    /// Looks up a word, ignoring case.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Tag> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
            .copied()
    }

    /// The fallback tag.
    #[must_use]
    pub fn fallback(&self) -> Tag {
        self.fallback
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lexicon has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Tagger for Lexicon {
    fn tag(&self, word: &str) -> Result<Tag> {
        Ok(self.lookup(word).unwrap_or(self.fallback))
    }
}
