//! Plain text output formatter

use super::{OutputFormatter, NEWLINE};
use anyhow::Result;
use std::io::Write;
use unwrap_core::Paragraph;

/// Plain text formatter - outputs one paragraph per line
///
/// Paragraphs with an uncertain ending are followed by a marker line so a
/// reader can review them.
pub struct TextFormatter<W: Write> {
    writer: W,
    uncertain_marker: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, uncertain_marker: impl Into<String>) -> Self {
        Self {
            writer,
            uncertain_marker: uncertain_marker.into(),
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        write!(self.writer, "{}{NEWLINE}", paragraph.text())?;
        if paragraph.is_uncertain() && !self.uncertain_marker.is_empty() {
            write!(self.writer, "{}{NEWLINE}", self.uncertain_marker)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
