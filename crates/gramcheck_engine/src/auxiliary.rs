//! Checks that do not depend on the sentence's subject.

use std::sync::LazyLock;

use gramcheck_foundation::{Result, Tagger};
use gramcheck_text::Sentence;
use regex::Regex;

use crate::rule::{Findings, Rule, RuleResult, tag_text};

// =============================================================================
// Noun Capitalization
// =============================================================================

/// Flags proper nouns written in lower case.
#[derive(Clone, Copy, Debug, Default)]
pub struct NounCapitalization;

impl NounCapitalization {
    fn evaluate(sentence: &Sentence, tagger: &dyn Tagger, out: &mut Findings) -> Result<()> {
        for word in sentence.words() {
            let stripped: String = word
                .raw()
                .chars()
                .filter(|c| !c.is_ascii_punctuation())
                .collect();
            let Some(first) = stripped.chars().next() else {
                continue;
            };
            if tag_text(tagger, &stripped)?.is_proper_noun() && first.is_lowercase() {
                out.push(format!("The noun '{stripped}' should be capitalised."));
            }
        }
        Ok(())
    }
}

impl Rule for NounCapitalization {
    fn name(&self) -> &'static str {
        "noun-capitalization"
    }

    fn apply(&self, sentence: &Sentence, tagger: &dyn Tagger) -> RuleResult {
        let mut findings = Findings::new();
        let outcome = Self::evaluate(sentence, tagger, &mut findings);
        findings.conclude(outcome)
    }
}

// =============================================================================
// Hyphen Spacing
// =============================================================================

/// Flags a trailing hyphen, or spaces around the first hyphen.
#[derive(Clone, Copy, Debug, Default)]
pub struct HyphenSpacing;

impl HyphenSpacing {
    /// Message for a sentence ending in a hyphen.
    pub const TRAILING: &'static str = "Sentence should not end with \"-\".";
    /// Message for a hyphen with a space next to it.
    pub const SPACED: &'static str = "There shouldn't be any spaces before or after the '-' symbol.";

    /// Returns the message for `text`, if any. Only the first hyphen is inspected.
    #[must_use]
    pub fn inspect(text: &str) -> Option<&'static str> {
        let index = text.find('-')?;
        if text.ends_with('-') {
            return Some(Self::TRAILING);
        }
        let before = text[..index].chars().next_back();
        let after = text[index + 1..].chars().next();
        (before == Some(' ') || after == Some(' ')).then_some(Self::SPACED)
    }
}

impl Rule for HyphenSpacing {
    fn name(&self) -> &'static str {
        "hyphen-spacing"
    }

    fn apply(&self, sentence: &Sentence, _tagger: &dyn Tagger) -> RuleResult {
        Ok(Self::inspect(sentence.text())
            .map(|message| vec![message.to_string()])
            .unwrap_or_default())
    }
}

// =============================================================================
// Terminal Punctuation
// =============================================================================

/// Flags sentences that do not end in `.`, `?` or `!`.
///
/// Not part of the default rule set; enable it through
/// [`CheckerConfig::with_terminal_punctuation`](crate::CheckerConfig::with_terminal_punctuation)
/// or apply it directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalPunctuation;

impl TerminalPunctuation {
    /// The message emitted.
    pub const MESSAGE: &'static str = "Every sentence should end with either of '.', '?' or '!'.";
}

impl Rule for TerminalPunctuation {
    fn name(&self) -> &'static str {
        "terminal-punctuation"
    }

    fn apply(&self, sentence: &Sentence, _tagger: &dyn Tagger) -> RuleResult {
        match sentence.last_char() {
            Some('.' | '?' | '!') | None => Ok(Vec::new()),
            Some(_) => Ok(vec![Self::MESSAGE.to_string()]),
        }
    }
}

// =============================================================================
// Etcetera
// =============================================================================

/// A lower-case word followed by a comma: one item of an inline list.
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s?[a-z]+\s?,[,|\s|.]*").expect("list item pattern"));

/// Flags comma-separated noun lists that neither end in "and" nor "etc".
///
/// Only the first list item's tag is consulted, however many items there
/// are.
#[derive(Clone, Copy, Debug, Default)]
pub struct Etcetera;

impl Etcetera {
    /// Message for a single comma-separated pair.
    pub const AND: &'static str = "Should have used 'and' here.";
    /// Message for longer lists.
    pub const ET_CETERA: &'static str = "Should use \"et cetera\" between multiple nouns.";

    fn evaluate(sentence: &Sentence, tagger: &dyn Tagger, out: &mut Findings) -> Result<()> {
        let text = sentence.text();
        if text.contains("etc") || text.contains("and") {
            return Ok(());
        }

        let mut items = LIST_ITEM.find_iter(text);
        let Some(first) = items.next() else {
            return Ok(());
        };
        let count = 1 + items.count();

        let word = first
            .as_str()
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches('.');
        if !tag_text(tagger, word)?.is_noun() {
            return Ok(());
        }

        out.push(if count == 1 { Self::AND } else { Self::ET_CETERA });
        Ok(())
    }
}

impl Rule for Etcetera {
    fn name(&self) -> &'static str {
        "etcetera"
    }

    fn apply(&self, sentence: &Sentence, tagger: &dyn Tagger) -> RuleResult {
        let mut findings = Findings::new();
        let outcome = Self::evaluate(sentence, tagger, &mut findings);
        findings.conclude(outcome)
    }
}
