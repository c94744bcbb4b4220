//! CLI, REPL, logging, and report rendering for gramcheck.
//!
//! This crate provides:
//! - [`Backend`] - Word-table or nlprule tagging and style checking
//! - [`Repl`] - Interactive check-a-line loop
//! - [`render`] - Text and JSON report output
//! - [`logging`] - `tracing` subscriber setup with an optional log file
//! - The `gramcheck` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod backend;
pub mod editor;
pub mod logging;
pub mod render;
pub mod repl;

pub use backend::{Backend, StandardChecker, assemble};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::LogConfig;
pub use render::OutputFormat;
pub use repl::{Outcome, Repl};
