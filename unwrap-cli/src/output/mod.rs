//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use unwrap_core::Paragraph;

pub mod json;
pub mod markdown;
pub mod summary;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use summary::Summary;
pub use text::TextFormatter;

/// Platform line terminator used when writing paragraphs
#[cfg(windows)]
pub const NEWLINE: &str = "\r\n";
/// Platform line terminator used when writing paragraphs
#[cfg(not(windows))]
pub const NEWLINE: &str = "\n";

/// Marker line written after a paragraph whose end is uncertain
pub const DEFAULT_UNCERTAIN_MARKER: &str = "### UNCERTAIN ###";

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one paragraph per line
    #[default]
    #[value(alias = "text")]
    #[serde(alias = "text")]
    Txt,
    /// JSON array of paragraphs with metadata
    Json,
    /// Markdown formatted output
    #[value(alias = "md")]
    #[serde(alias = "md")]
    Markdown,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single paragraph
    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Render paragraphs into a UTF-8 string in the requested format
pub fn render(
    paragraphs: &[Paragraph],
    format: OutputFormat,
    uncertain_marker: &str,
) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut formatter: Box<dyn OutputFormatter + '_> = match format {
            OutputFormat::Txt => Box::new(TextFormatter::new(&mut buffer, uncertain_marker)),
            OutputFormat::Json => Box::new(JsonFormatter::new(&mut buffer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(&mut buffer)),
        };

        for paragraph in paragraphs {
            formatter.format_paragraph(paragraph)?;
        }
        formatter.finish()?;
    }

    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unwrap_core::unwrap_lines;

    #[test]
    fn test_render_all_formats() {
        let lines = ["Wrapped", "text.", "", "The remaining items are:", "more"];
        let paragraphs = unwrap_lines(&lines, 1);

        let text = render(&paragraphs, OutputFormat::Txt, DEFAULT_UNCERTAIN_MARKER).unwrap();
        assert_eq!(
            text,
            [
                "Wrapped text.",
                "",
                "The remaining items are:",
                DEFAULT_UNCERTAIN_MARKER,
                "more",
                "",
            ]
            .join(NEWLINE)
        );

        let json = render(&paragraphs, OutputFormat::Json, DEFAULT_UNCERTAIN_MARKER).unwrap();
        assert!(json.contains("\"text\": \"Wrapped text.\""));

        let markdown =
            render(&paragraphs, OutputFormat::Markdown, DEFAULT_UNCERTAIN_MARKER).unwrap();
        assert!(markdown.contains("*Total paragraphs: 3 (1 uncertain)*"));
    }

    #[test]
    fn test_output_format_from_toml_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }

        let parsed: Wrapper = toml::from_str("format = \"md\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Markdown);
        let parsed: Wrapper = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Json);
    }
}
