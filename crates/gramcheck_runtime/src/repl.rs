//! The interactive REPL.
//!
//! Each entered line is checked as a text of one or more sentences and the
//! report is printed. Lines starting with `:` are REPL commands.

use crate::StandardChecker;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render::{OutputFormat, render};
use gramcheck_foundation::{Error, Result};
use std::io::{self, Write};

/// What a REPL line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this and keep going.
    Output(String),
    /// Nothing to print.
    Silent,
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The checker every line is run through.
    checker: StandardChecker,

    /// Report format.
    format: OutputFormat,

    /// Whether to show the welcome banner.
    show_banner: bool,
}

const PROMPT: &str = "gc> ";

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(checker: StandardChecker) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, checker))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, checker: StandardChecker) -> Self {
        Self {
            editor,
            checker,
            format: OutputFormat::Text,
            show_banner: true,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the report format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// The current report format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// The checker lines are run through.
    #[must_use]
    pub const fn checker(&self) -> &StandardChecker {
        &self.checker
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(PROMPT)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input)? {
            Outcome::Output(text) => {
                print!("{text}");
                if !text.ends_with('\n') {
                    println!();
                }
            }
            Outcome::Silent => {}
            Outcome::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Evaluates one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command or if checking fails.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        let trimmed = input.trim();
        if let Some(command) = trimmed.strip_prefix(':') {
            return self.command(command);
        }
        let report = self.checker.check(trimmed)?;
        Ok(Outcome::Output(render(&report, self.format)?))
    }

    fn command(&mut self, command: &str) -> Result<Outcome> {
        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q" | "quit"), None) => Ok(Outcome::Quit),
            (Some("help"), None) => Ok(Outcome::Output(HELP.to_string())),
            (Some("format"), None) => Ok(Outcome::Output(format!("{:?}", self.format))),
            (Some("format"), Some(format)) => {
                self.format = format.parse()?;
                Ok(Outcome::Silent)
            }
            (Some("rules"), None) => Ok(Outcome::Output(
                self.checker.rule_names().collect::<Vec<_>>().join("\n"),
            )),
            _ => Err(Error::internal(format!("unknown command: :{command}"))),
        }
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mgramcheck v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!("Type sentences to check them. :help for commands, Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}

const HELP: &str = "\
:format [text|json]  Show or set the report format
:rules               List the rules run per sentence
:quit                Exit (also Ctrl+D)";
