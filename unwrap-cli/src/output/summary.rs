//! Processing summary printed with `--stats`

use std::fmt;
use unwrap_core::{Paragraph, Stats};

/// Counts and line statistics of a finished run
#[derive(Debug, Clone)]
pub struct Summary {
    /// Physical lines read
    pub input_lines: usize,
    /// Paragraphs written
    pub output_lines: usize,
    /// Paragraphs whose ending is uncertain
    pub uncertain: usize,
    /// Line statistics after the final pass
    pub stats: Stats,
}

impl Summary {
    /// Build a summary from the final pass
    pub fn new(input_lines: usize, paragraphs: &[Paragraph], stats: Stats) -> Self {
        Self {
            input_lines,
            output_lines: paragraphs.len(),
            uncertain: paragraphs.iter().filter(|p| p.is_uncertain()).count(),
            stats,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input lines:                  {}", self.input_lines)?;
        writeln!(f, "Output lines:                 {}", self.output_lines)?;
        writeln!(f, "Uncertain paragraphs:         {}", self.uncertain)?;
        writeln!(f, "First line average length:    {}", self.stats.first_avg)?;
        writeln!(f, "First line length deviation:  {}", self.stats.first_dev)?;
        writeln!(f, "Middle line average length:   {}", self.stats.middle_avg)?;
        write!(f, "Middle line length deviation: {}", self.stats.middle_dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unwrap_core::Joiner;

    #[test]
    fn test_summary_counts() {
        let lines = ["a wrapped", "line.", "", "Heading:", "body"];
        let mut joiner = Joiner::new(&lines);
        let paragraphs: Vec<Paragraph> = joiner.paragraphs().collect();
        let summary = Summary::new(lines.len(), &paragraphs, joiner.stats());

        assert_eq!(summary.input_lines, 5);
        assert_eq!(summary.output_lines, 4);
        assert_eq!(summary.uncertain, 0);
        assert_eq!(summary.stats.first_avg, 9.0);
    }

    #[test]
    fn test_summary_display() {
        let summary = Summary {
            input_lines: 10,
            output_lines: 4,
            uncertain: 1,
            stats: Stats {
                first_avg: 30.5,
                first_dev: 2.0,
                middle_avg: 70.0,
                middle_dev: 0.0,
            },
        };

        let rendered = summary.to_string();
        assert!(rendered.contains("Input lines:                  10"));
        assert!(rendered.contains("Output lines:                 4"));
        assert!(rendered.contains("First line average length:    30.5"));
        assert!(rendered.ends_with("Middle line length deviation: 0"));
    }
}
