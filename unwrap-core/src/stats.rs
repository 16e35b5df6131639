//! Snapshot of the joiner's line statistics

use crate::metric::Metric;

/// First-line and middle-line statistics at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Average length of paragraph first lines
    pub first_avg: f64,
    /// Deviation of paragraph first line lengths
    pub first_dev: f64,
    /// Average length of paragraph middle lines
    pub middle_avg: f64,
    /// Deviation of paragraph middle line lengths
    pub middle_dev: f64,
}

impl Stats {
    pub(crate) fn from_metrics(first: &Metric, middle: &Metric) -> Self {
        Self {
            first_avg: first.avg(),
            first_dev: first.dev(),
            middle_avg: middle.avg(),
            middle_dev: middle.dev(),
        }
    }

    /// Whether first-line lengths are distinguishable from middle-line lengths
    ///
    /// This holds when middle lines are longer than first lines on average by
    /// more than twice the larger deviation.
    pub fn first_line_informative(&self) -> bool {
        self.middle_avg - self.first_avg > 2.0 * self.first_dev.max(self.middle_dev)
    }
}
