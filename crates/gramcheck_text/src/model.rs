//! Tagger and style checker backed by `nlprule`.
//!
//! nlprule ships LanguageTool's English tagger dictionary and grammar rules
//! as two binaries, `en_tokenizer.bin` and `en_rules.bin`, published with
//! every nlprule release. [`Models::load`] reads both from one directory;
//! the tagger and the style checker it hands out share the tokenizer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use gramcheck_foundation::{Error, ErrorContext, Result, StyleChecker, StyleMatch, Tag, Tagger};
use nlprule::{Rules, Tokenizer};
use tracing::info;

/// File name of the tokenizer binary.
pub const TOKENIZER_FILE: &str = "en_tokenizer.bin";

/// File name of the rules binary.
pub const RULES_FILE: &str = "en_rules.bin";

/// Tags LanguageTool puts on sentence boundaries rather than words.
const BOUNDARY_TAGS: [&str; 2] = ["SENT_START", "SENT_END"];

/// A loaded tokenizer and rule set.
pub struct Models {
    tokenizer: Arc<Tokenizer>,
    rules: Arc<Rules>,
}

impl Models {
    /// Loads [`TOKENIZER_FILE`] and [`RULES_FILE`] from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an `OracleUnavailable` error naming the file that could not
    /// be loaded.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let tokenizer = load_binary(dir.join(TOKENIZER_FILE), "tagger", Tokenizer::new)?;
        let rules = load_binary(dir.join(RULES_FILE), "style checker", Rules::new)?;
        info!(dir = %dir.display(), "loaded nlprule models");
        Ok(Self {
            tokenizer: Arc::new(tokenizer),
            rules: Arc::new(rules),
        })
    }

    /// A tagger over the loaded tokenizer.
    #[must_use]
    pub fn tagger(&self) -> ModelTagger {
        ModelTagger {
            tokenizer: Arc::clone(&self.tokenizer),
        }
    }

    /// A style checker running the loaded rules.
    #[must_use]
    pub fn style_checker(&self) -> ModelStyleChecker {
        ModelStyleChecker {
            tokenizer: Arc::clone(&self.tokenizer),
            rules: Arc::clone(&self.rules),
        }
    }
}

impl std::fmt::Debug for Models {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Models").finish_non_exhaustive()
    }
}

fn load_binary<T, E: std::fmt::Display>(
    path: PathBuf,
    oracle: &str,
    load: impl FnOnce(PathBuf) -> std::result::Result<T, E>,
) -> Result<T> {
    let source = path.display().to_string();
    load(path).map_err(|e| {
        Error::oracle_unavailable(oracle, e.to_string())
            .with_context(ErrorContext::new().with_source(source))
    })
}

/// Tags a word with the first part-of-speech reading LanguageTool's
/// dictionary gives it.
///
/// Words the dictionary only knows capitalised ("london") are looked up
/// again capitalised, and keep that reading if it is a proper noun. Words
/// with no reading at all are [`Tag::Unclassified`].
#[derive(Clone)]
pub struct ModelTagger {
    tokenizer: Arc<Tokenizer>,
}

impl ModelTagger {
    fn lookup(&self, word: &str) -> Option<String> {
        let sentence = self.tokenizer.pipe(word).next()?;
        let token = sentence
            .tokens()
            .iter()
            .find(|token| !token.word().text().as_str().trim().is_empty())?;
        token
            .word()
            .tags()
            .iter()
            .map(|data| data.pos().as_str())
            .find(|pos| !pos.is_empty() && !BOUNDARY_TAGS.contains(pos))
            .map(str::to_string)
    }
}

impl Tagger for ModelTagger {
    fn tag(&self, word: &str) -> Result<Tag> {
        if let Some(pos) = self.lookup(word) {
            return parse_pos(&pos);
        }
        let capitalised = capitalise(word);
        if capitalised != word {
            if let Some(pos) = self.lookup(&capitalised) {
                let tag = parse_pos(&pos)?;
                if tag.is_proper_noun() {
                    return Ok(tag);
                }
            }
        }
        Ok(Tag::Unclassified)
    }
}

impl std::fmt::Debug for ModelTagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelTagger").finish_non_exhaustive()
    }
}

/// Runs LanguageTool's grammar rules and reports each suggestion's message.
#[derive(Clone)]
pub struct ModelStyleChecker {
    tokenizer: Arc<Tokenizer>,
    rules: Arc<Rules>,
}

impl StyleChecker for ModelStyleChecker {
    fn check(&self, sentence: &str) -> Result<Vec<StyleMatch>> {
        Ok(self
            .rules
            .suggest(sentence, &self.tokenizer)
            .iter()
            .map(|suggestion| StyleMatch::new(suggestion.message()))
            .collect())
    }
}

impl std::fmt::Debug for ModelStyleChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelStyleChecker").finish_non_exhaustive()
    }
}

/// Parses a LanguageTool part-of-speech string.
///
/// LanguageTool refines some Penn tags with a `:` suffix (`NN:UN` for
/// uncountable nouns); the suffix is dropped.
///
/// # Errors
///
/// Returns an `UnknownTag` error for tags outside the vocabulary.
pub fn parse_pos(pos: &str) -> Result<Tag> {
    pos.split(':').next().unwrap_or(pos).parse()
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
