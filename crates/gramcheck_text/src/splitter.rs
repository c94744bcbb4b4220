//! Sentence-boundary splitting.
//!
//! Unicode (UAX #29) sentence bounds do most of the work, but they never
//! break before a lower-case word and they always break after a
//! capitalised abbreviation. Two passes correct for that:
//!
//! 1. pieces that end in an abbreviation ("Mr.", "e.g.", "J.") are joined
//!    with the piece that follows;
//! 2. every piece is split again after a period followed by whitespace,
//!    unless the word carrying the period is an abbreviation.

use gramcheck_foundation::{Result, SentenceSplitter};
use unicode_segmentation::UnicodeSegmentation;

/// Words that end in a period without ending the sentence, lower-cased and
/// without the period.
pub const ABBREVIATIONS: &[&str] = &[
    "al", "approx", "apr", "aug", "ave", "capt", "cf", "col", "corp", "dec", "dept", "dr", "feb",
    "gen", "gov", "hon", "inc", "jan", "jr", "jul", "jun", "lt", "ltd", "mr", "mrs", "ms", "mt",
    "nov", "oct", "pp", "prof", "rep", "rev", "sen", "sep", "sept", "sgt", "sr", "st", "vol",
    "vs",
];

/// Splits text into sentences on Unicode sentence bounds, corrected for
/// abbreviations and lower-case sentence starts.
///
/// Each sentence is trimmed of surrounding whitespace; empty pieces are
/// dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeSentenceSplitter;

impl UnicodeSentenceSplitter {
    /// Creates a new splitter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Splits without going through the [`SentenceSplitter`] port.
    #[must_use]
    pub fn sentences(text: &str) -> Vec<String> {
        let mut joined: Vec<String> = Vec::new();
        let mut pending = String::new();
        for piece in text.split_sentence_bounds() {
            pending.push_str(piece);
            if !ends_with_abbreviation(&pending) {
                joined.push(std::mem::take(&mut pending));
            }
        }
        joined.push(pending);

        joined
            .iter()
            .flat_map(|piece| split_after_periods(piece))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Result<Vec<String>> {
        Ok(Self::sentences(text))
    }
}

/// Returns true if `word` (as written, period included) is an abbreviation
/// or an initial rather than a sentence end.
#[must_use]
pub fn is_abbreviation(word: &str) -> bool {
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    let Some(stem) = word.strip_suffix('.') else {
        return false;
    };
    if !stem.chars().any(char::is_alphabetic) {
        return false;
    }
    // "e.g.", "U.S.", but not "Wait..."
    if stem.contains('.') {
        return stem
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(char::is_alphabetic));
    }
    // Initials, except the pronoun.
    let mut chars = stem.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_uppercase() && c != 'I';
    }
    ABBREVIATIONS.contains(&stem.to_lowercase().as_str())
}

fn ends_with_abbreviation(piece: &str) -> bool {
    piece
        .split_whitespace()
        .next_back()
        .is_some_and(is_abbreviation)
}

/// Splits after every period that is followed by whitespace and does not
/// close an abbreviation.
fn split_after_periods(piece: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = piece.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        if c != '.' || !chars.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
            continue;
        }
        let end = index + c.len_utf8();
        let word = piece[start..end].split_whitespace().next_back().unwrap_or_default();
        if !is_abbreviation(word) {
            out.push(&piece[start..end]);
            start = end;
        }
    }
    out.push(&piece[start..]);
    out
}
