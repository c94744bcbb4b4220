//! Rule engine and orchestration for gramcheck.
//!
//! This crate provides:
//! - [`Rule`] - The seam every check plugs into
//! - [`PronounRules`] - One rule engine, parametrized by [`SubjectProfile`]
//! - Auxiliary checks ([`NounCapitalization`], [`HyphenSpacing`],
//!   [`TerminalPunctuation`], [`Etcetera`])
//! - [`GrammarChecker`] - Splits text and runs every rule per sentence
//! - [`ErrorReport`] - Ordered sentence -> messages mapping

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod auxiliary;
pub mod checker;
pub mod config;
pub mod profile;
pub mod pronoun;
pub mod report;
pub mod rule;

pub use auxiliary::{Etcetera, HyphenSpacing, NounCapitalization, TerminalPunctuation};
pub use checker::GrammarChecker;
pub use config::CheckerConfig;
pub use profile::{Messages, SubjectProfile};
pub use pronoun::PronounRules;
pub use report::ErrorReport;
pub use rule::{Findings, Rule, RuleFailure, RuleResult};
