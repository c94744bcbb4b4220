//! Diagnostic logging.
//!
//! Library crates log through `tracing`; this module installs the
//! subscriber. Console output goes to stderr and is filtered by
//! `RUST_LOG` (default `warn`). A log file, [`LogConfig::DEFAULT_FILE`]
//! unless told otherwise, receives every per-sentence report at `info` and
//! above, appended without ANSI colour.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gramcheck_foundation::{Error, ErrorContext, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Logging configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// File the per-sentence reports are appended to.
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Log file the CLI writes to by default.
    pub const DEFAULT_FILE: &'static str = "gramcheck.log";

    /// Console logging plus [`DEFAULT_FILE`](Self::DEFAULT_FILE).
    #[must_use]
    pub fn standard() -> Self {
        Self::default().with_file(Self::DEFAULT_FILE)
    }

    /// Console logging only.
    #[must_use]
    pub fn console_only() -> Self {
        Self { file: None }
    }

    /// Builder method to set the log file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or a global
    /// subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let console = fmt::layer().with_writer(std::io::stderr).with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        );

        let file = match &self.file {
            Some(path) => Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(open_append(path)?))
                    .with_filter(LevelFilter::INFO),
            ),
            None => None,
        };

        tracing_subscriber::registry()
            .with(console)
            .with(file)
            .try_init()
            .map_err(|e| Error::internal(e.to_string()))
    }
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            Error::from(e).with_context(ErrorContext::new().with_source(path.display().to_string()))
        })
}
