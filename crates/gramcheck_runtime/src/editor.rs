//! Line editor abstraction for the REPL.
//!
//! The REPL reads through the [`LineEditor`] trait so tests can drive it
//! with scripted input while the binary uses rustyline.

use gramcheck_foundation::{Error, Result};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Editor, Helper, Hinter, Validator};
use std::borrow::Cow;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline: history hints, dimmed, with a coloured prompt.
#[derive(Helper, Completer, Hinter, Validator)]
struct CheckerHelper {
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for CheckerHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<CheckerHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(CheckerHelper {
            hinter: HistoryHinter::new(),
        }));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
