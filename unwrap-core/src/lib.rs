//! Paragraph reconstruction for hard-wrapped plain text
//!
//! Text produced by old word processors, mail clients or terminals is often
//! broken at a fixed column. This crate rejoins those physical lines into
//! logical paragraphs without knowing the original wrap width: the [`Joiner`]
//! learns typical first-line and middle-line lengths from the document itself
//! and refines them over repeated passes.
//!
//! Every paragraph ending is reported together with a confidence flag, so a
//! consumer can surface the decisions the engine was not sure about.
//!
//! # Example
//!
//! ```rust
//! use unwrap_core::Joiner;
//!
//! let lines = [
//!     "The quick brown fox jumps over the",
//!     "lazy dog.",
//!     "",
//!     "Next paragraph starts here and is",
//!     "a single short line.",
//! ];
//!
//! let mut joiner = Joiner::new(&lines);
//! joiner.iterate(1);
//!
//! let texts: Vec<String> = joiner
//!     .paragraphs()
//!     .map(|paragraph| paragraph.into_text())
//!     .collect();
//!
//! assert_eq!(
//!     texts,
//!     vec![
//!         "The quick brown fox jumps over the lazy dog.",
//!         "",
//!         "Next paragraph starts here and is a single short line.",
//!     ]
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod joiner;
pub mod marks;
pub mod metric;
pub mod paragraph;
pub mod stats;

pub use config::{JoinerConfig, JoinerConfigBuilder, MetricPolicy};
pub use error::{Error, Result};
pub use joiner::{Joiner, LineDecision, Paragraphs};
pub use marks::MarkSet;
pub use metric::Metric;
pub use paragraph::{HyphenMode, Paragraph};
pub use stats::Stats;

/// Unwrap a sequence of lines using `passes` total passes
///
/// The first `passes - 1` passes only warm up the line statistics; the
/// paragraphs of the final pass are returned. `passes == 0` behaves as a
/// single pass.
pub fn unwrap_lines<S: AsRef<str>>(lines: &[S], passes: usize) -> Vec<Paragraph> {
    let mut joiner = Joiner::new(lines);
    joiner.iterate(passes.saturating_sub(1));
    joiner.paragraphs().collect()
}

/// Unwrap a block of text, splitting it on `\n` or `\r\n` first
pub fn unwrap_text(text: &str, passes: usize) -> Vec<Paragraph> {
    let lines: Vec<&str> = text.lines().collect();
    unwrap_lines(&lines, passes)
}
