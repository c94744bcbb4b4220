//! Core types, part-of-speech tags, and oracle ports for gramcheck.
//!
//! This crate provides:
//! - [`Tag`] - The closed Penn-Treebank tag vocabulary
//! - [`TagSet`] - Compact sets of tags used by rule profiles
//! - [`Error`] - Rich error types with context
//! - Oracle ports ([`Tagger`], [`SentenceSplitter`], [`StyleChecker`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod oracle;
pub mod tag;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use oracle::{SentenceSplitter, StyleChecker, StyleMatch, Tagger};
pub use tag::{Tag, TagSet};
