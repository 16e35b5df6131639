//! Line length statistics
//!
//! A [`Metric`] keeps every observed value so that the deviation can be
//! computed from the full sample. The deviation is the square root of the
//! sum of squared differences from the mean; it is intentionally not divided
//! by the sample size, so it grows with the number of observations.

use std::cell::Cell;

/// Statistics about a collection of values
#[derive(Debug, Clone, Default)]
pub struct Metric {
    count: usize,
    sum: f64,
    values: Vec<f64>,
    // Invalidated by every `add`
    dev_cache: Cell<Option<f64>>,
}

impl Metric {
    /// Create an empty metric
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new value to the collection
    pub fn add(&mut self, value: f64) -> &mut Self {
        self.sum += value;
        self.count += 1;
        self.values.push(value);
        self.dev_cache.set(None);
        self
    }

    /// Number of values observed
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sum of all values
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Every observed value, in insertion order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Average of all values, or 0 when nothing was observed
    pub fn avg(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Square root of the summed squared differences from [`Metric::avg`]
    pub fn dev(&self) -> f64 {
        if let Some(dev) = self.dev_cache.get() {
            return dev;
        }

        let mean = self.avg();
        let dev = self
            .values
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            .sqrt();
        self.dev_cache.set(Some(dev));
        dev
    }
}
