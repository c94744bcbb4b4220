//! gramcheck - Rule-based grammar checker
//!
//! This crate re-exports all layers of the gramcheck system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: gramcheck_runtime    — CLI, REPL, logging, report rendering
//! Layer 2: gramcheck_engine     — Pronoun rules, auxiliary checks, orchestration
//! Layer 1: gramcheck_text       — Sentences, cursor, normalizer, oracle adapters
//! Layer 0: gramcheck_foundation — Core types (Tag, Error, oracle ports)
//! ```

pub use gramcheck_engine as engine;
pub use gramcheck_foundation as foundation;
pub use gramcheck_runtime as runtime;
pub use gramcheck_text as text;
