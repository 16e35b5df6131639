//! Joiner configuration

use crate::error::Result;
use crate::marks::MarkSet;
use crate::paragraph::HyphenMode;

/// How line statistics evolve across passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MetricPolicy {
    /// Every pass adds to the same accumulators, including the final one
    #[default]
    Accumulate,
    /// Every pass classifies with the statistics of the previous completed
    /// pass and records into fresh accumulators
    PerPass,
}

/// Configuration for a [`Joiner`](crate::Joiner)
#[derive(Debug, Clone, Default)]
pub struct JoinerConfig {
    pub(crate) metric_policy: MetricPolicy,
    pub(crate) marks: MarkSet,
    pub(crate) hyphen_mode: HyphenMode,
}

impl JoinerConfig {
    /// Create a configuration builder
    pub fn builder() -> JoinerConfigBuilder {
        JoinerConfigBuilder::default()
    }

    /// The metric policy
    pub fn metric_policy(&self) -> MetricPolicy {
        self.metric_policy
    }

    /// The punctuation marks consulted by the classifier
    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    /// How trailing hyphens are joined
    pub fn hyphen_mode(&self) -> HyphenMode {
        self.hyphen_mode
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        self.marks.validate()
    }
}

/// Fluent builder for [`JoinerConfig`]
#[derive(Debug, Default)]
pub struct JoinerConfigBuilder {
    metric_policy: Option<MetricPolicy>,
    end_marks: Option<Vec<String>>,
    possible_end_marks: Option<Vec<String>>,
    hyphen_mode: Option<HyphenMode>,
}

impl JoinerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metric policy
    pub fn metric_policy(mut self, policy: MetricPolicy) -> Self {
        self.metric_policy = Some(policy);
        self
    }

    /// Replace the end marks
    pub fn end_marks<I>(mut self, marks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.end_marks = Some(marks.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the possible end marks
    pub fn possible_end_marks<I>(mut self, marks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.possible_end_marks = Some(marks.into_iter().map(Into::into).collect());
        self
    }

    /// Replace both mark lists
    pub fn marks(mut self, marks: MarkSet) -> Self {
        self.end_marks = Some(marks.end);
        self.possible_end_marks = Some(marks.possible);
        self
    }

    /// Set how trailing hyphens are joined
    pub fn hyphen_mode(mut self, mode: HyphenMode) -> Self {
        self.hyphen_mode = Some(mode);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<JoinerConfig> {
        let mut config = JoinerConfig::default();

        if let Some(policy) = self.metric_policy {
            config.metric_policy = policy;
        }

        if let Some(end) = self.end_marks {
            config.marks.end = end;
        }

        if let Some(possible) = self.possible_end_marks {
            config.marks.possible = possible;
        }

        if let Some(mode) = self.hyphen_mode {
            config.hyphen_mode = mode;
        }

        config.validate()?;
        Ok(config)
    }
}
