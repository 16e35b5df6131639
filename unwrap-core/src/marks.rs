//! Punctuation cues for paragraph endings

use crate::error::{Error, Result};

/// Marks that end a sentence
pub const END_MARKS: &[&str] = &[".", "?", "!"];

/// Marks that may end a sentence
pub const POSSIBLE_END_MARKS: &[&str] = &[
    "...", ":", ".\"", ".'", "?\"", "?'", "!\"", "!'", ")", "]", "}",
];

/// The two ordered lists of line-ending marks consulted by the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkSet {
    /// Marks that end a sentence
    pub end: Vec<String>,
    /// Marks that may end a sentence, checked after `end`
    pub possible: Vec<String>,
}

impl Default for MarkSet {
    fn default() -> Self {
        Self {
            end: END_MARKS.iter().map(|mark| mark.to_string()).collect(),
            possible: POSSIBLE_END_MARKS
                .iter()
                .map(|mark| mark.to_string())
                .collect(),
        }
    }
}

impl MarkSet {
    /// Create a mark set from explicit lists
    pub fn new<E, P>(end: E, possible: P) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            end: end.into_iter().map(Into::into).collect(),
            possible: possible.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `line` ends with one of the end marks
    pub fn ends_with_end_mark(&self, line: &str) -> bool {
        self.end.iter().any(|mark| line.ends_with(mark.as_str()))
    }

    /// Whether `line` ends with one of the possible end marks
    pub fn ends_with_possible_mark(&self, line: &str) -> bool {
        self.possible.iter().any(|mark| line.ends_with(mark.as_str()))
    }

    /// Whether `line` ends with any mark from either list
    pub fn ends_with_any(&self, line: &str) -> bool {
        self.ends_with_end_mark(line) || self.ends_with_possible_mark(line)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.end.iter().any(String::is_empty) {
            return Err(Error::Configuration(
                "end marks must not be empty strings".into(),
            ));
        }

        if self.possible.iter().any(String::is_empty) {
            return Err(Error::Configuration(
                "possible end marks must not be empty strings".into(),
            ));
        }

        Ok(())
    }
}
