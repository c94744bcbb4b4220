//! Configuration for the grammar checker.

/// Style-checker messages that are too noisy to report.
pub const DEFAULT_STYLE_DENYLIST: [&str; 3] = [
    "Possible typo: you repeated a whitespace",
    "Add a space between sentences",
    "Possible spelling mistake found",
];

/// Configuration for [`GrammarChecker`](crate::GrammarChecker).
///
/// Controls which optional rules run and which style-checker messages are
/// dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Run the terminal punctuation check after the hyphen check.
    pub terminal_punctuation: bool,

    /// Run the etcetera check last.
    pub etcetera: bool,

    /// Style-checker messages dropped by exact match.
    pub style_denylist: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            terminal_punctuation: false,
            etcetera: false,
            style_denylist: DEFAULT_STYLE_DENYLIST.iter().map(ToString::to_string).collect(),
        }
    }
}

impl CheckerConfig {
    /// Creates a configuration with every optional rule enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            terminal_punctuation: true,
            etcetera: true,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable the terminal punctuation check.
    #[must_use]
    pub fn with_terminal_punctuation(mut self, enabled: bool) -> Self {
        self.terminal_punctuation = enabled;
        self
    }

    /// Builder method to enable/disable the etcetera check.
    #[must_use]
    pub fn with_etcetera(mut self, enabled: bool) -> Self {
        self.etcetera = enabled;
        self
    }

    /// Builder method to replace the style denylist.
    #[must_use]
    pub fn with_style_denylist<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style_denylist = messages.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if a style-checker message should be dropped.
    #[must_use]
    pub fn is_denied(&self, message: &str) -> bool {
        self.style_denylist.iter().any(|denied| denied == message)
    }
}
