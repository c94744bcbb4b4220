//! Style-checker adapters.
//!
//! The engine consults an external style checker before its own rules.
//! These adapters cover running without one and wrapping a closure.

use std::fmt;

use gramcheck_foundation::{Result, StyleChecker, StyleMatch};

/// A style checker that never complains.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStyleChecker;

impl StyleChecker for NullStyleChecker {
    fn check(&self, _sentence: &str) -> Result<Vec<StyleMatch>> {
        Ok(Vec::new())
    }
}

/// Adapts a closure into a [`StyleChecker`].
pub struct FnStyleChecker<F> {
    check: F,
}

impl<F> FnStyleChecker<F>
where
    F: Fn(&str) -> Result<Vec<StyleMatch>>,
{
    /// Wraps `check`.
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<F> StyleChecker for FnStyleChecker<F>
where
    F: Fn(&str) -> Result<Vec<StyleMatch>>,
{
    fn check(&self, sentence: &str) -> Result<Vec<StyleMatch>> {
        (self.check)(sentence)
    }
}

impl<F> fmt::Debug for FnStyleChecker<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStyleChecker").finish_non_exhaustive()
    }
}
