//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use unwrap_core::Paragraph;

/// JSON formatter - outputs paragraphs as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    paragraphs: Vec<ParagraphData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ParagraphData {
    /// Position of the paragraph in the output
    pub index: usize,
    /// The paragraph text (empty for a blank line)
    pub text: String,
    /// Whether the paragraph's ending is uncertain
    pub uncertain: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            paragraphs: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        self.paragraphs.push(ParagraphData {
            index: self.paragraphs.len(),
            text: paragraph.text().to_string(),
            uncertain: paragraph.is_uncertain(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.paragraphs)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
