//! The grammar checker: splits text and runs every rule per sentence.

use gramcheck_foundation::{ErrorContext, Result, SentenceSplitter, StyleChecker, Tagger};
use gramcheck_text::{Sentence, normalize};
use tracing::{error, info};

use crate::auxiliary::{Etcetera, HyphenSpacing, NounCapitalization, TerminalPunctuation};
use crate::config::CheckerConfig;
use crate::pronoun::PronounRules;
use crate::report::ErrorReport;
use crate::rule::Rule;

type BoxedRule = Box<dyn Rule + Send + Sync>;

/// Runs the style checker and the rule set over every sentence of a text.
///
/// The checker holds no per-call state; each call to [`check`](Self::check)
/// builds a fresh report.
///
/// # Example
///
/// ```
/// use gramcheck_engine::GrammarChecker;
/// use gramcheck_text::{Lexicon, NullStyleChecker, UnicodeSentenceSplitter};
///
/// let checker = GrammarChecker::new(
///     Lexicon::standard().unwrap(),
///     UnicodeSentenceSplitter::new(),
///     NullStyleChecker,
/// );
/// let report = checker.check("I has a book.").unwrap();
/// assert_eq!(report.get("I has a book.").map(<[String]>::len), Some(1));
/// ```
pub struct GrammarChecker<T, S, C> {
    tagger: T,
    splitter: S,
    style: C,
    config: CheckerConfig,
    rules: Vec<BoxedRule>,
}

impl<T, S, C> GrammarChecker<T, S, C>
where
    T: Tagger,
    S: SentenceSplitter,
    C: StyleChecker,
{
    /// Creates a checker with the default configuration.
    pub fn new(tagger: T, splitter: S, style: C) -> Self {
        Self::with_config(tagger, splitter, style, CheckerConfig::default())
    }

    /// Creates a checker with an explicit configuration.
    pub fn with_config(tagger: T, splitter: S, style: C, config: CheckerConfig) -> Self {
        let rules = build_rules(&config);
        Self {
            tagger,
            splitter,
            style,
            config,
            rules,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Names of the rules run per sentence, in order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Checks a whole text.
    ///
    /// Every sentence the splitter produces appears in the report, even
    /// when it has no errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the splitter or style checker fails, or if the
    /// tagger reports itself unavailable.
    pub fn check(&self, text: &str) -> Result<ErrorReport> {
        let mut report = ErrorReport::new();
        for sentence in self.splitter.split(text)? {
            let errors = self.check_sentence(&sentence)?;
            report.insert(sentence, errors);
        }
        Ok(report)
    }

    /// Checks one sentence, as split.
    ///
    /// Style-checker messages come first, followed by the messages of each
    /// rule in order. A rule that fails keeps what it found and ends the
    /// checks for this sentence.
    ///
    /// # Errors
    ///
    /// Returns an error if the style checker fails, or if a rule fails with
    /// a fatal error.
    pub fn check_sentence(&self, sentence: &str) -> Result<Vec<String>> {
        let mut errors: Vec<String> = self
            .style
            .check(sentence)?
            .into_iter()
            .map(|found| found.message)
            .filter(|message| !self.config.is_denied(message))
            .collect();

        let normalized = Sentence::new(normalize(sentence));
        for rule in &self.rules {
            match rule.apply(&normalized, &self.tagger) {
                Ok(found) => errors.extend(found),
                Err(failure) => {
                    errors.extend(failure.found);
                    if failure.error.is_fatal() {
                        return Err(failure.error.with_context(
                            ErrorContext::new()
                                .with_sentence(sentence)
                                .with_rule(rule.name()),
                        ));
                    }
                    error!(
                        sentence,
                        rule = rule.name(),
                        error = %failure.error,
                        "rule evaluation failed"
                    );
                    break;
                }
            }
        }

        info!(sentence, ?errors, "checked sentence");
        Ok(errors)
    }
}

impl<T, S, C> std::fmt::Debug for GrammarChecker<T, S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarChecker")
            .field("config", &self.config)
            .field(
                "rules",
                &self.rules.iter().map(|rule| rule.name()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

fn build_rules(config: &CheckerConfig) -> Vec<BoxedRule> {
    let mut rules: Vec<BoxedRule> = vec![
        Box::new(PronounRules::second_person()),
        Box::new(PronounRules::third_person()),
        Box::new(PronounRules::first_person()),
        Box::new(NounCapitalization),
        Box::new(HyphenSpacing),
    ];
    if config.terminal_punctuation {
        rules.push(Box::new(TerminalPunctuation));
    }
    if config.etcetera {
        rules.push(Box::new(Etcetera));
    }
    rules
}
