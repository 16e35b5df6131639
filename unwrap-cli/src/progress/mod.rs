//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for passes over the input
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for `total_passes` passes
    pub fn init_passes(&mut self, total_passes: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_passes);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} passes {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed pass
    pub fn pass_completed(&self, pass: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Finished pass {pass}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_passes(3);
        assert!(reporter.progress_bar.is_none());
        reporter.pass_completed(1);
        reporter.finish();
    }

    #[test]
    fn test_reporter_counts_passes() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_passes(2);
        assert!(reporter.progress_bar.is_some());
        reporter.pass_completed(1);
        reporter.pass_completed(2);
        if let Some(pb) = &reporter.progress_bar {
            assert_eq!(pb.position(), 2);
        }
        reporter.finish();
    }
}
