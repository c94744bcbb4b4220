//! Report rendering.

use std::fmt::Write as _;
use std::str::FromStr;

use gramcheck_engine::ErrorReport;
use gramcheck_foundation::{Error, Result};
use serde::Serialize;

/// How reports are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One sentence per line, its errors indented below it.
    #[default]
    Text,
    /// `{"response": {sentence: [errors]}}`.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::internal(format!("unknown output format: {other}"))),
        }
    }
}

#[derive(Serialize)]
struct Response<'a> {
    response: &'a ErrorReport,
}

/// Renders a report in the given format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &ErrorReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Renders a report as indented text.
#[must_use]
pub fn render_text(report: &ErrorReport) -> String {
    let mut out = String::new();
    for (sentence, errors) in report.iter() {
        let _ = writeln!(out, "{sentence}");
        if errors.is_empty() {
            let _ = writeln!(out, "  \x1b[32mok\x1b[0m");
        }
        for error in errors {
            let _ = writeln!(out, "  \x1b[31m-\x1b[0m {error}");
        }
    }
    out
}

/// Renders a report as a JSON response body.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &ErrorReport) -> Result<String> {
    serde_json::to_string(&Response { response: report })
        .map_err(|e| Error::internal(format!("failed to serialize report: {e}")))
}
