//! Paragraph assembly

use std::fmt;

/// What happens to a trailing hyphen when the next line is appended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HyphenMode {
    /// Remove a hyphen that follows a letter: `inter-` + `national` gives
    /// `international`. Any other trailing hyphen (`10-`, `--`) is kept.
    #[default]
    Drop,
    /// Keep the hyphen: `well-` + `known` gives `well-known`
    Keep,
}

/// A single logical paragraph
///
/// Lines are appended with a single space between them, except after a
/// trailing hyphen where they are joined directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paragraph {
    text: String,
    pub(crate) uncertain: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    hyphen_mode: HyphenMode,
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty paragraph with an explicit hyphen mode
    pub fn with_hyphen_mode(hyphen_mode: HyphenMode) -> Self {
        Self {
            hyphen_mode,
            ..Self::default()
        }
    }

    /// Whether the paragraph has no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The paragraph's text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the paragraph's end boundary is uncertain
    pub fn is_uncertain(&self) -> bool {
        self.uncertain
    }

    /// Consume the paragraph, returning its text
    pub fn into_text(self) -> String {
        self.text
    }

    /// Add a piece of text (usually a line) to the paragraph
    ///
    /// After a trailing hyphen the line is glued on without a space. Under
    /// [`HyphenMode::Drop`] the hyphen itself is removed only when a letter
    /// precedes it.
    pub fn add(&mut self, line: &str) -> &mut Self {
        if let Some(stem) = self.text.strip_suffix('-') {
            let after_letter = stem.chars().next_back().is_some_and(char::is_alphabetic);
            if self.hyphen_mode == HyphenMode::Drop && after_letter {
                self.text.pop();
            }
        } else if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(line);
        self
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
