//! Sentence handling for the gramcheck rule engine.
//!
//! This crate turns raw text into the shapes the rule engine walks, and
//! provides simple adapters for the oracle ports declared in
//! `gramcheck_foundation`.
//!
//! # Architecture
//!
//! ```text
//! "She have went home. They is late."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SENTENCE        │  → ["She have went home.", "They is late."]
//! │ SPLITTER        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NORMALIZER      │  → "He have went home."
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SENTENCE /      │  → [he, have, went, home.] + cursor at "he"
//! │ CURSOR          │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`sentence`] - Sentences, words, and the bounds-checked [`Cursor`]
//! - [`normalize`] - Subject canonicalization (`i`, `he`, `you`)
//! - [`splitter`] - Unicode sentence-boundary splitter
//! - [`lexicon`] - Word-to-tag lookup table implementing [`Tagger`]
//! - [`style`] - Style-checker adapters
//! - [`stdlib`] - Built-in closed-class English lexicon
//! - `model` - nlprule-backed tagger and style checker (feature `nlprule`)
//!
//! [`Tagger`]: gramcheck_foundation::Tagger

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexicon;
#[cfg(feature = "nlprule")]
pub mod model;
pub mod normalize;
pub mod sentence;
pub mod splitter;
pub mod stdlib;
pub mod style;

// Re-export main types for convenience
pub use lexicon::Lexicon;
#[cfg(feature = "nlprule")]
pub use model::{ModelStyleChecker, ModelTagger, Models};
pub use normalize::normalize;
pub use sentence::{Cursor, Sentence, Word};
pub use splitter::UnicodeSentenceSplitter;
pub use style::{FnStyleChecker, NullStyleChecker};
