//! Gauge set
//!
//! Latest forecast per gauge. Declared once at start-up, written at most once
//! per metric per cycle, read by the publisher after every cycle.

use std::collections::BTreeMap;

use crate::entities::MetricSpec;
use crate::error::{Error, Result};

/// One gauge and its latest value
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeEntry {
    /// Help text published with the gauge
    pub help: String,
    /// Latest value, `None` until the first successful forecast
    pub value: Option<f64>,
}

/// Named gauges, ordered by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GaugeSet {
    gauges: BTreeMap<String, GaugeEntry>,
}

impl GaugeSet {
    /// Create an empty gauge set
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare one gauge per metric specification
    pub fn from_specs(specs: &[MetricSpec]) -> Self {
        let mut set = Self::new();
        for spec in specs {
            set.declare(&spec.name, &spec.help);
        }
        set
    }

    /// Declare a gauge; re-declaring keeps the current value
    pub fn declare(&mut self, name: &str, help: &str) {
        self.gauges
            .entry(name.to_string())
            .and_modify(|entry| entry.help = help.to_string())
            .or_insert_with(|| GaugeEntry {
                help: help.to_string(),
                value: None,
            });
    }

    /// Replace the value of a declared gauge
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        let entry = self
            .gauges
            .get_mut(name)
            .ok_or_else(|| Error::invalid_argument(format!("gauge '{name}' is not declared")))?;
        entry.value = Some(value);
        Ok(())
    }

    /// Latest value of a gauge
    pub fn get(&self, name: &str) -> Option<f64> {
        self.gauges.get(name).and_then(|entry| entry.value)
    }

    /// Whether a gauge is declared
    pub fn contains(&self, name: &str) -> bool {
        self.gauges.contains_key(name)
    }

    /// Iterate over gauges in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GaugeEntry)> {
        self.gauges.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of declared gauges
    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    /// Whether no gauge is declared
    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }
}
