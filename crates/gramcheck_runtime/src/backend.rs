//! Choosing the tagger and style checker the CLI runs on.

use std::path::PathBuf;

use gramcheck_engine::{CheckerConfig, GrammarChecker};
use gramcheck_foundation::{Result, StyleChecker, Tagger};
use gramcheck_text::{Lexicon, NullStyleChecker, UnicodeSentenceSplitter};

/// A tagger the checker can own and share across threads.
pub type BoxedTagger = Box<dyn Tagger + Send + Sync>;

/// A style checker the checker can own and share across threads.
pub type BoxedStyleChecker = Box<dyn StyleChecker + Send + Sync>;

/// The checker the CLI and REPL run: any tagger and style checker over the
/// Unicode sentence splitter.
pub type StandardChecker = GrammarChecker<BoxedTagger, UnicodeSentenceSplitter, BoxedStyleChecker>;

/// Environment variable naming the nlprule model directory.
pub const MODELS_ENV: &str = "GRAMCHECK_MODELS";

/// Model directory used when [`MODELS_ENV`] is unset.
pub const DEFAULT_MODELS_DIR: &str = "models";

/// The model directory: [`MODELS_ENV`] if set, else [`DEFAULT_MODELS_DIR`].
#[must_use]
pub fn models_dir() -> PathBuf {
    std::env::var_os(MODELS_ENV).map_or_else(|| DEFAULT_MODELS_DIR.into(), PathBuf::from)
}

/// Where tags and style complaints come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    /// The word table: built-in closed-class words, plus an optional
    /// lexicon file. No style checker.
    Lexicon(Option<PathBuf>),
    /// nlprule's LanguageTool tagger and rules, loaded from a directory.
    #[cfg(feature = "nlprule")]
    Models(PathBuf),
}

impl Default for Backend {
    #[cfg(feature = "nlprule")]
    fn default() -> Self {
        Self::Models(models_dir())
    }

    #[cfg(not(feature = "nlprule"))]
    fn default() -> Self {
        Self::Lexicon(None)
    }
}

impl Backend {
    /// Loads the backend and builds a checker over it.
    ///
    /// # Errors
    ///
    /// Returns an error if a lexicon file cannot be read or parsed, or if
    /// the model binaries cannot be loaded.
    pub fn checker(&self, config: CheckerConfig) -> Result<StandardChecker> {
        match self {
            Self::Lexicon(None) => Ok(assemble(Lexicon::standard()?, NullStyleChecker, config)),
            Self::Lexicon(Some(path)) => Ok(assemble(Lexicon::load(path)?, NullStyleChecker, config)),
            #[cfg(feature = "nlprule")]
            Self::Models(dir) => {
                let models = gramcheck_text::Models::load(dir)?;
                Ok(assemble(models.tagger(), models.style_checker(), config))
            }
        }
    }
}

/// Builds a [`StandardChecker`] from concrete oracles.
pub fn assemble<T, C>(tagger: T, style: C, config: CheckerConfig) -> StandardChecker
where
    T: Tagger + Send + Sync + 'static,
    C: StyleChecker + Send + Sync + 'static,
{
    let tagger: BoxedTagger = Box::new(tagger);
    let style: BoxedStyleChecker = Box::new(style);
    GrammarChecker::with_config(tagger, UnicodeSentenceSplitter::new(), style, config)
}
