//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use unwrap_core::Paragraph;

/// Markdown formatter - outputs paragraphs separated by blank lines
///
/// Blank-line records are folded into the paragraph separation, since
/// Markdown already needs one blank line between paragraphs.
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    paragraph_count: usize,
    uncertain_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            paragraph_count: 0,
            uncertain_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        if paragraph.is_empty() {
            return Ok(());
        }

        self.paragraph_count += 1;
        writeln!(self.writer, "{}", paragraph.text())?;
        if paragraph.is_uncertain() {
            self.uncertain_count += 1;
            writeln!(self.writer, "<!-- uncertain -->")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total paragraphs: {} ({} uncertain)*",
            self.paragraph_count, self.uncertain_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
