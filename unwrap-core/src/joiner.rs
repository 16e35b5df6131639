//! Paragraph boundary detection
//!
//! The [`Joiner`] walks the input lines with one line of lookahead and
//! decides, for each line, whether it closes the current paragraph. The
//! decision combines punctuation cues with two length statistics learned
//! from the document: the typical length of a paragraph's first line and of
//! its middle lines. When first lines are clearly shorter than middle lines,
//! a long next line cannot start a new paragraph, and a short line ending in
//! punctuation is very likely a paragraph's last line.
//!
//! Every pass over the joiner feeds the statistics, so running a few warm-up
//! passes with [`Joiner::iterate`] sharpens the final one.

use crate::config::{JoinerConfig, MetricPolicy};
use crate::metric::Metric;
use crate::paragraph::Paragraph;
use crate::stats::Stats;
use std::iter::FusedIterator;

/// Outcome of classifying a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDecision {
    /// The line closes its paragraph
    pub is_last: bool,
    /// The decision is backed by strong evidence
    pub certain: bool,
}

impl LineDecision {
    /// The line certainly closes its paragraph
    pub const CERTAIN_LAST: Self = Self {
        is_last: true,
        certain: true,
    };

    /// The line certainly continues into the next one
    pub const CERTAIN_CONTINUE: Self = Self {
        is_last: false,
        certain: true,
    };

    fn last(certain: bool) -> Self {
        Self {
            is_last: true,
            certain,
        }
    }
}

/// Line length in characters
fn char_len(line: &str) -> f64 {
    line.chars().count() as f64
}

/// Paragraph boundary detection engine
///
/// The joiner borrows the input lines and owns the first-line and
/// middle-line statistics. Iterating over it with [`Joiner::paragraphs`]
/// always restarts from the first line but keeps feeding the same
/// statistics (see [`MetricPolicy`]).
#[derive(Debug)]
pub struct Joiner<'a, S> {
    lines: &'a [S],
    first: Metric,
    middle: Metric,
    config: JoinerConfig,
}

impl<'a, S: AsRef<str>> Joiner<'a, S> {
    /// Create a joiner with the default configuration
    pub fn new(lines: &'a [S]) -> Self {
        Self::with_config(lines, JoinerConfig::default())
    }

    /// Create a joiner with a custom configuration
    pub fn with_config(lines: &'a [S], config: JoinerConfig) -> Self {
        Self {
            lines,
            first: Metric::new(),
            middle: Metric::new(),
            config,
        }
    }

    /// The input lines
    pub fn lines(&self) -> &'a [S] {
        self.lines
    }

    /// The active configuration
    pub fn config(&self) -> &JoinerConfig {
        &self.config
    }

    /// Statistics about paragraph first lines
    pub fn first_metric(&self) -> &Metric {
        &self.first
    }

    /// Statistics about paragraph middle lines
    pub fn middle_metric(&self) -> &Metric {
        &self.middle
    }

    /// Snapshot of the current statistics
    pub fn stats(&self) -> Stats {
        Stats::from_metrics(&self.first, &self.middle)
    }

    /// Run `count` full passes to refine the statistics
    ///
    /// The paragraphs produced by these passes are discarded.
    pub fn iterate(&mut self, count: usize) {
        for _ in 0..count {
            self.paragraphs().for_each(drop);
        }
    }

    /// Start a new pass over the input lines
    pub fn paragraphs(&mut self) -> Paragraphs<'_, 'a, S> {
        Paragraphs::new(self)
    }

    /// Decide whether `line` is the last line of its paragraph
    ///
    /// `line` and `next_line` are expected to be trimmed. A missing or blank
    /// next line is always a certain boundary.
    pub fn is_last(&self, line: &str, next_line: Option<&str>, is_first: bool) -> LineDecision {
        let Some(next_line) = next_line.filter(|next| !next.trim().is_empty()) else {
            return LineDecision::CERTAIN_LAST;
        };

        let marks = &self.config.marks;
        let stats = self.stats();
        let first = stats.first_avg;
        let middle = stats.middle_avg;
        let last_threshold = first - (middle - first);
        let length = char_len(line);

        if stats.first_line_informative() {
            let middle_threshold = (middle + first) / 2.0;
            if char_len(next_line) > middle_threshold {
                // Too long to open a new paragraph
                return LineDecision::CERTAIN_CONTINUE;
            }

            if marks.ends_with_end_mark(line) {
                let threshold = if is_first {
                    last_threshold
                } else {
                    middle_threshold
                };
                return LineDecision::last(length < threshold);
            }

            if marks.ends_with_possible_mark(line) {
                return LineDecision::last(length < last_threshold);
            }
        } else if marks.ends_with_any(line) {
            return LineDecision::last(length < last_threshold);
        }

        LineDecision::CERTAIN_CONTINUE
    }
}

impl<'j, 'a, S: AsRef<str>> IntoIterator for &'j mut Joiner<'a, S> {
    type Item = Paragraph;
    type IntoIter = Paragraphs<'j, 'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.paragraphs()
    }
}

/// One pass over a [`Joiner`]'s lines, yielding paragraphs on demand
///
/// Under [`MetricPolicy::PerPass`] the statistics recorded by this pass are
/// published to the joiner only once the pass is exhausted; a pass dropped
/// early leaves the joiner's statistics untouched.
#[derive(Debug)]
pub struct Paragraphs<'j, 'a, S> {
    joiner: &'j mut Joiner<'a, S>,
    position: usize,
    current: Paragraph,
    pass_metrics: Option<(Metric, Metric)>,
    emitted: usize,
    uncertain: usize,
    finished: bool,
}

impl<'j, 'a, S: AsRef<str>> Paragraphs<'j, 'a, S> {
    fn new(joiner: &'j mut Joiner<'a, S>) -> Self {
        let pass_metrics = match joiner.config.metric_policy {
            MetricPolicy::Accumulate => None,
            MetricPolicy::PerPass => Some((Metric::new(), Metric::new())),
        };

        let current = Paragraph::with_hyphen_mode(joiner.config.hyphen_mode);

        Self {
            joiner,
            position: 0,
            current,
            pass_metrics,
            emitted: 0,
            uncertain: 0,
            finished: false,
        }
    }

    fn fresh_paragraph(&self) -> Paragraph {
        Paragraph::with_hyphen_mode(self.joiner.config.hyphen_mode)
    }

    fn record(&mut self, length: f64, is_first: bool) {
        let (first, middle) = match &mut self.pass_metrics {
            Some((first, middle)) => (first, middle),
            None => (&mut self.joiner.first, &mut self.joiner.middle),
        };

        if is_first {
            first.add(length);
        } else {
            middle.add(length);
        }
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        if let Some((first, middle)) = self.pass_metrics.take() {
            self.joiner.first = first;
            self.joiner.middle = middle;
        }

        log::debug!(
            "pass complete: {} lines, {} paragraphs ({} uncertain), first avg {:.2} ({} samples), middle avg {:.2} ({} samples)",
            self.joiner.lines.len(),
            self.emitted,
            self.uncertain,
            self.joiner.first.avg(),
            self.joiner.first.count(),
            self.joiner.middle.avg(),
            self.joiner.middle.count(),
        );
    }
}

impl<'j, 'a, S: AsRef<str>> Iterator for Paragraphs<'j, 'a, S> {
    type Item = Paragraph;

    fn next(&mut self) -> Option<Paragraph> {
        let lines = self.joiner.lines;

        loop {
            let Some(raw) = lines.get(self.position) else {
                self.finish();
                return None;
            };
            let line = raw.as_ref().trim();
            self.position += 1;
            let next_line = lines.get(self.position).map(|next| next.as_ref().trim());

            if line.is_empty() {
                // A blank next line always closes the preceding paragraph
                debug_assert!(self.current.is_empty());
                self.emitted += 1;
                return Some(self.fresh_paragraph());
            }

            let is_first = self.current.is_empty();
            self.current.add(line);

            let decision = self.joiner.is_last(line, next_line, is_first);
            if decision.is_last {
                let fresh = self.fresh_paragraph();
                let mut paragraph = std::mem::replace(&mut self.current, fresh);
                paragraph.uncertain = !decision.certain;
                if paragraph.uncertain {
                    self.uncertain += 1;
                    log::trace!("uncertain boundary after line {}: {line:?}", self.position);
                }
                self.emitted += 1;
                return Some(paragraph);
            }

            self.record(char_len(line), is_first);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.joiner.lines.len().saturating_sub(self.position);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl<'j, 'a, S: AsRef<str>> FusedIterator for Paragraphs<'j, 'a, S> {}
