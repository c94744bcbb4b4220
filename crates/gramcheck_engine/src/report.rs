//! Per-sentence error reports.

use std::collections::HashMap;

/// An ordered mapping from sentence to the errors found in it.
///
/// Sentences keep the order in which they were first inserted. Inserting
/// a sentence that is already present replaces its errors in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorReport {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl ErrorReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the errors for a sentence.
    pub fn insert(&mut self, sentence: impl Into<String>, errors: Vec<String>) {
        let sentence = sentence.into();
        if let Some(&slot) = self.index.get(&sentence) {
            self.entries[slot].1 = errors;
        } else {
            self.index.insert(sentence.clone(), self.entries.len());
            self.entries.push((sentence, errors));
        }
    }

    /// The errors recorded for a sentence.
    #[must_use]
    pub fn get(&self, sentence: &str) -> Option<&[String]> {
        self.index
            .get(sentence)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Number of sentences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the report has no sentences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sentences in insertion order.
    pub fn sentences(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(sentence, _)| sentence.as_str())
    }

    /// `(sentence, errors)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(sentence, errors)| (sentence.as_str(), errors.as_slice()))
    }

    /// Total number of errors across all sentences.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries.iter().map(|(_, errors)| errors.len()).sum()
    }

    /// Returns true if no sentence has any error.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|(_, errors)| errors.is_empty())
    }
}

impl IntoIterator for ErrorReport {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (sentence, errors) in &self.entries {
            map.serialize_entry(sentence, errors)?;
        }
        map.end()
    }
}
