//! Error types for the gramcheck system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Detected grammar problems are *not* errors: they are plain strings in a
//! report. The types here describe failures to evaluate rules at all.

use std::fmt;

use thiserror::Error;

/// The main error type for gramcheck operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown tag error.
    #[must_use]
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownTag(tag.into()))
    }

    /// Creates an oracle unavailable error.
    #[must_use]
    pub fn oracle_unavailable(oracle: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::OracleUnavailable {
            oracle: oracle.into(),
            reason: reason.into(),
        })
    }

    /// Creates a parse error for line-oriented inputs such as lexicon files.
    #[must_use]
    pub fn parse(
        message: impl Into<String>,
        line: u32,
        column: u32,
        context: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
            column,
            context: context.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error must abort a whole check request.
    ///
    /// Rule failures are contained to the sentence that raised them; an
    /// unreachable oracle or broken I/O is not.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::OracleUnavailable { .. } | ErrorKind::Io(_)
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A tag string outside the known vocabulary.
    #[error("unknown part-of-speech tag: {0}")]
    UnknownTag(String),

    /// An external oracle could not be reached.
    #[error("{oracle} unavailable: {reason}")]
    OracleUnavailable {
        /// Which oracle failed (tagger, splitter, style checker).
        oracle: String,
        /// Why it failed.
        reason: String,
    },

    /// Parse error in a line-oriented input.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Sentence being checked when the error occurred.
    pub sentence: Option<String>,
    /// Name of the rule or check that failed.
    pub rule: Option<String>,
    /// Source file, when input came from disk.
    pub source: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sentence.
    #[must_use]
    pub fn with_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.sentence = Some(sentence.into());
        self
    }

    /// Sets the rule name.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if let Some(rule) = &self.rule {
            write!(f, " in rule {rule}")?;
        }
        if let Some(sentence) = &self.sentence {
            write!(f, " while checking {sentence:?}")?;
        }
        Ok(())
    }
}

/// Result type alias for gramcheck operations.
pub type Result<T> = std::result::Result<T, Error>;
