//! Synthetic history generators
//!
//! Produce plausible histories when no real data is available, so the
//! forecasting pipeline keeps running (and dashboards keep showing something)
//! against an empty or unreachable time-series database.

use std::f64::consts::TAU;
use std::sync::Mutex;

use chrono::{DateTime, TimeDelta, Utc};
use foresight_domain::entities::{MetricKind, MetricSeries};
use foresight_domain::error::{Error, Result};
use foresight_domain::value_objects::{QueryWindow, ValueBounds};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Shape family of the generated histories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SyntheticPattern {
    /// Random levels and straight trends
    ///
    /// cpu: uniform(10, 60); memory: 30 -> 80 plus N(0, 2);
    /// disk: 40 -> 85; network: exponential(10).
    #[default]
    Baseline,
    /// Phase-shifted oscillations
    ///
    /// cpu: `50 + 30 sin(x/50 + p) + N(0, 5)`; memory: `60 + 20 sin(x/100 + p)`;
    /// network: `40 + 30 sin(x/20 + p) + Exp(5)`; disk: `40 + 50 x / n`.
    Smart,
}

/// Generates evenly spaced synthetic series ending at a given instant
pub struct SyntheticHistoryGenerator {
    pattern: SyntheticPattern,
    lookback: TimeDelta,
    step: TimeDelta,
    rng: Mutex<StdRng>,
}

impl SyntheticHistoryGenerator {
    /// Create a generator seeded from the operating system
    pub fn new(pattern: SyntheticPattern, lookback: TimeDelta, step: TimeDelta) -> Self {
        Self {
            pattern,
            lookback,
            step,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Reseed the generator for reproducible output
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Pattern in use
    pub fn pattern(&self) -> SyntheticPattern {
        self.pattern
    }

    /// Generate a history for `kind` whose window ends at `end`
    ///
    /// The series has `lookback / step + 1` samples, one step apart. Metrics
    /// of unknown kind are drawn uniformly from `bounds`.
    pub fn generate(
        &self,
        kind: MetricKind,
        bounds: &ValueBounds,
        end: DateTime<Utc>,
    ) -> Result<MetricSeries> {
        let window = QueryWindow::ending_at(end, self.lookback, self.step)?;
        let n = window.expected_samples();
        // Shifts the oscillations so consecutive cycles do not see identical curves
        let phase = end.timestamp() as f64 / 1000.0;

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| Error::internal("synthetic generator lock poisoned"))?;
        let values = match self.pattern {
            SyntheticPattern::Baseline => baseline_values(kind, bounds, n, &mut rng),
            SyntheticPattern::Smart => smart_values(kind, bounds, n, phase, &mut rng),
        };
        MetricSeries::regular(window.start, self.step, values)
    }
}

fn baseline_values(kind: MetricKind, bounds: &ValueBounds, n: usize, rng: &mut StdRng) -> Vec<f64> {
    match kind {
        MetricKind::Cpu => (0..n).map(|_| rng.random_range(10.0..60.0)).collect(),
        MetricKind::Memory => linspace(30.0, 80.0, n)
            .map(|v| v + normal(rng, 0.0, 2.0))
            .collect(),
        MetricKind::Disk => linspace(40.0, 85.0, n).collect(),
        MetricKind::Network => (0..n).map(|_| exponential(rng, 10.0)).collect(),
        MetricKind::Other => (0..n).map(|_| uniform_in(bounds, rng)).collect(),
    }
}

fn smart_values(
    kind: MetricKind,
    bounds: &ValueBounds,
    n: usize,
    phase: f64,
    rng: &mut StdRng,
) -> Vec<f64> {
    let total = n as f64;
    (0..n)
        .map(|i| {
            let x = i as f64;
            match kind {
                MetricKind::Cpu => 50.0 + 30.0 * (x / 50.0 + phase).sin() + normal(rng, 0.0, 5.0),
                MetricKind::Memory => 60.0 + 20.0 * (x / 100.0 + phase).sin(),
                MetricKind::Network => {
                    40.0 + 30.0 * (x / 20.0 + phase).sin() + exponential(rng, 5.0)
                }
                MetricKind::Disk => 40.0 + (x / total) * 50.0,
                MetricKind::Other => uniform_in(bounds, rng),
            }
        })
        .collect()
}

/// Width of the range drawn from when the domain has no upper bound
const UNBOUNDED_SPAN: f64 = 100.0;

/// Uniform draw across the valid range
fn uniform_in(bounds: &ValueBounds, rng: &mut StdRng) -> f64 {
    let upper = bounds.upper.unwrap_or(bounds.lower + UNBOUNDED_SPAN);
    if upper > bounds.lower {
        rng.random_range(bounds.lower..upper)
    } else {
        bounds.lower
    }
}

/// `n` evenly spaced values from `start` to `end`, both included
fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let delta = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| start + delta * i as f64)
}

/// Box-Muller transform
fn normal(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    // 1 - [0, 1) keeps ln away from zero
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    mean + std_dev * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Inverse-CDF sampling
fn exponential(rng: &mut StdRng, scale: f64) -> f64 {
    let u: f64 = 1.0 - rng.random::<f64>();
    -scale * u.ln()
}
