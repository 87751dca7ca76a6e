//! Metric specifications

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value_objects::ValueBounds;

/// Kind of metric, selects the synthetic history generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Processor utilization
    Cpu,
    /// Memory utilization
    Memory,
    /// Disk fill level
    Disk,
    /// Network throughput
    Network,
    /// Anything else
    #[default]
    Other,
}

impl MetricKind {
    /// Name used in configuration and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Memory => "memory",
            Self::Disk => "disk",
            Self::Network => "network",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_unit_conversion() -> f64 {
    1.0
}

/// Static configuration of one forecast metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    /// Gauge name used when publishing
    pub name: String,
    /// Gauge help text
    pub help: String,
    /// Human readable label for logs
    pub label: String,
    /// PromQL expression returning the metric history
    pub query: String,
    /// Synthetic generator selector
    #[serde(default)]
    pub kind: MetricKind,
    /// Factor applied to every queried value
    #[serde(default = "default_unit_conversion")]
    pub unit_conversion: f64,
    /// Valid value domain
    #[serde(default)]
    pub bounds: ValueBounds,
}

impl MetricSpec {
    /// Create a percentage metric with no unit conversion
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        query: impl Into<String>,
        kind: MetricKind,
    ) -> Self {
        let label = label.into();
        Self {
            name: name.into(),
            help: format!("Predicted {label}"),
            label,
            query: query.into(),
            kind,
            unit_conversion: default_unit_conversion(),
            bounds: ValueBounds::percentage(),
        }
    }

    /// Set the help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Set the unit conversion factor
    pub fn with_unit_conversion(mut self, factor: f64) -> Self {
        self.unit_conversion = factor;
        self
    }

    /// Set the value bounds
    pub fn with_bounds(mut self, bounds: ValueBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Reject settings no cycle could work with
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_argument("metric name cannot be empty"));
        }
        if !is_valid_metric_name(&self.name) {
            return Err(Error::invalid_argument(format!(
                "metric name '{}' is not a valid Prometheus metric name",
                self.name
            )));
        }
        if !self.unit_conversion.is_finite() || self.unit_conversion <= 0.0 {
            return Err(Error::invalid_argument(format!(
                "unit conversion for '{}' must be finite and positive, got {}",
                self.name, self.unit_conversion
            )));
        }
        self.bounds.validate()
    }
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}
