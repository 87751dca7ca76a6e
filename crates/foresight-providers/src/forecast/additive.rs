//! Additive Forecast Model
//!
//! Decomposes a series into a piecewise-linear trend and an optional daily
//! Fourier seasonality:
//!
//! ```text
//! y(t) = k + m*t + sum_j delta_j * max(t - s_j, 0)
//!            + sum_n (a_n sin(2 pi n d) + b_n cos(2 pi n d))
//! ```
//!
//! `t` is time rescaled to `[0, 1]` over the history and `d` is the absolute
//! time in days. Changepoints `s_j` are spread evenly over the first part of
//! the history. Coefficients are the MAP estimate under Gaussian priors whose
//! scales come from [`AdditiveModelSettings`], which reduces to a ridge
//! regression solved through its normal equations.

use std::f64::consts::TAU;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use foresight_domain::entities::MetricSeries;
use foresight_domain::error::{Error, Result};
use foresight_domain::ports::ForecastModel;
use foresight_domain::value_objects::ForecastPoint;

use super::linalg::{SquareMatrix, solve_spd};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Prior scale of the base intercept and slope
const TREND_PRIOR_SCALE: f64 = 5.0;

/// Lower bound of the estimated noise variance (scaled units)
const MIN_NOISE_VARIANCE: f64 = 1e-6;

/// Tuning of [`AdditiveModel`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditiveModelSettings {
    /// Fit a 24-hour seasonal component
    pub daily_seasonality: bool,
    /// Number of sine/cosine pairs of the daily component
    pub daily_fourier_order: usize,
    /// Prior scale of trend changes; larger values follow the data more closely
    pub changepoint_prior_scale: f64,
    /// Prior scale of the seasonal coefficients
    pub seasonality_prior_scale: f64,
    /// Maximum number of potential changepoints
    pub n_changepoints: usize,
    /// Share of the history in which changepoints may be placed
    pub changepoint_range: f64,
}

impl Default for AdditiveModelSettings {
    fn default() -> Self {
        Self {
            daily_seasonality: true,
            daily_fourier_order: 4,
            changepoint_prior_scale: 0.05,
            seasonality_prior_scale: 10.0,
            n_changepoints: 25,
            changepoint_range: 0.8,
        }
    }
}

impl AdditiveModelSettings {
    /// Check that every scale is usable
    pub fn validate(&self) -> Result<()> {
        if !(self.changepoint_prior_scale.is_finite() && self.changepoint_prior_scale > 0.0) {
            return Err(Error::invalid_argument(
                "changepoint_prior_scale must be finite and positive",
            ));
        }
        if !(self.seasonality_prior_scale.is_finite() && self.seasonality_prior_scale > 0.0) {
            return Err(Error::invalid_argument(
                "seasonality_prior_scale must be finite and positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.changepoint_range) {
            return Err(Error::invalid_argument(
                "changepoint_range must lie in [0, 1]",
            ));
        }
        if self.daily_seasonality && self.daily_fourier_order == 0 {
            return Err(Error::invalid_argument(
                "daily_fourier_order must be at least 1 when daily seasonality is enabled",
            ));
        }
        Ok(())
    }
}

/// Additive trend + seasonality forecaster
#[derive(Debug, Clone, Default)]
pub struct AdditiveModel {
    settings: AdditiveModelSettings,
}

/// Design of a fit: where the changepoints sit and how time is scaled
struct Design {
    start: f64,
    span: f64,
    changepoints: Vec<f64>,
    fourier_order: usize,
}

impl Design {
    fn columns(&self) -> usize {
        2 + self.changepoints.len() + 2 * self.fourier_order
    }

    fn scaled_time(&self, epoch_secs: f64) -> f64 {
        (epoch_secs - self.start) / self.span
    }

    /// Feature row for one instant
    fn row(&self, epoch_secs: f64) -> Vec<f64> {
        let t = self.scaled_time(epoch_secs);
        let mut row = Vec::with_capacity(self.columns());
        row.push(1.0);
        row.push(t);
        row.extend(self.changepoints.iter().map(|s| (t - s).max(0.0)));

        let days = epoch_secs / SECONDS_PER_DAY;
        for order in 1..=self.fourier_order {
            let angle = TAU * order as f64 * days;
            row.push(angle.sin());
            row.push(angle.cos());
        }
        row
    }
}

impl AdditiveModel {
    /// Create a model with the given settings
    pub fn new(settings: AdditiveModelSettings) -> Self {
        Self { settings }
    }

    fn design(&self, times: &[f64]) -> Result<Design> {
        let n = times.len();
        let start = times[0];
        let span = times[n - 1] - start;
        if !(span.is_finite() && span > 0.0) {
            return Err(Error::fit_failed("history spans no time"));
        }

        // Changepoints sit on sample instants inside the leading part of the history
        let history = ((n as f64) * self.settings.changepoint_range).floor() as usize;
        let count = self
            .settings
            .n_changepoints
            .min(history.saturating_sub(1));
        let changepoints = if count == 0 {
            Vec::new()
        } else {
            let last = (history - 1) as f64;
            (1..=count)
                .map(|i| {
                    let index = (last * i as f64 / count as f64).round() as usize;
                    (times[index] - start) / span
                })
                .collect()
        };

        let fourier_order = if self.settings.daily_seasonality {
            self.settings.daily_fourier_order
        } else {
            0
        };

        Ok(Design {
            start,
            span,
            changepoints,
            fourier_order,
        })
    }

    /// Prior scale of every column, matching `Design::row`
    fn prior_scales(&self, design: &Design) -> Vec<f64> {
        let mut scales = vec![TREND_PRIOR_SCALE, TREND_PRIOR_SCALE];
        scales.extend(std::iter::repeat_n(
            self.settings.changepoint_prior_scale,
            design.changepoints.len(),
        ));
        scales.extend(std::iter::repeat_n(
            self.settings.seasonality_prior_scale,
            2 * design.fourier_order,
        ));
        scales
    }

    /// Residual variance of a plain linear fit, used as the noise level
    fn noise_variance(times: &[f64], values: &[f64], design: &Design) -> f64 {
        let n = times.len() as f64;
        let ts: Vec<f64> = times.iter().map(|t| design.scaled_time(*t)).collect();
        let mean_t = ts.iter().sum::<f64>() / n;
        let mean_y = values.iter().sum::<f64>() / n;
        let sxx: f64 = ts.iter().map(|t| (t - mean_t).powi(2)).sum();
        let sxy: f64 = ts
            .iter()
            .zip(values)
            .map(|(t, y)| (t - mean_t) * (y - mean_y))
            .sum();
        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        let intercept = mean_y - slope * mean_t;
        let sse: f64 = ts
            .iter()
            .zip(values)
            .map(|(t, y)| (y - intercept - slope * t).powi(2))
            .sum();
        (sse / n).max(MIN_NOISE_VARIANCE)
    }

    fn fit(&self, times: &[f64], values: &[f64]) -> Result<(Design, Vec<f64>)> {
        let design = self.design(times)?;
        let columns = design.columns();
        let noise = Self::noise_variance(times, values, &design);

        let mut gram = SquareMatrix::zeros(columns);
        let mut rhs = vec![0.0; columns];
        for (t, y) in times.iter().zip(values) {
            let row = design.row(*t);
            for i in 0..columns {
                rhs[i] += row[i] * y;
                for j in 0..columns {
                    gram.add(i, j, row[i] * row[j]);
                }
            }
        }
        for (i, scale) in self.prior_scales(&design).iter().enumerate() {
            gram.add(i, i, noise / (scale * scale));
        }

        let coefficients = solve_spd(&gram, &rhs)
            .ok_or_else(|| Error::fit_failed("normal equations are not positive definite"))?;
        Ok((design, coefficients))
    }

    fn predict_at(&self, series: &MetricSeries, target: DateTime<Utc>) -> Result<f64> {
        if series.len() < 2 {
            return Err(Error::fit_failed(format!(
                "at least 2 samples are required, got {}",
                series.len()
            )));
        }

        let times: Vec<f64> = series
            .samples()
            .iter()
            .map(|s| epoch_seconds(s.timestamp))
            .collect();
        let raw: Vec<f64> = series.values().collect();
        if raw.iter().any(|v| !v.is_finite()) {
            return Err(Error::fit_failed("history contains non-finite values"));
        }

        let scale = raw.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let scale = if scale > 0.0 { scale } else { 1.0 };
        let values: Vec<f64> = raw.iter().map(|v| v / scale).collect();

        let (design, coefficients) = self.fit(&times, &values)?;
        let row = design.row(epoch_seconds(target));
        let predicted = row
            .iter()
            .zip(&coefficients)
            .map(|(x, beta)| x * beta)
            .sum::<f64>()
            * scale;

        trace!(
            samples = series.len(),
            changepoints = design.changepoints.len(),
            fourier_order = design.fourier_order,
            predicted = predicted,
            "Additive model fitted"
        );

        if predicted.is_finite() {
            Ok(predicted)
        } else {
            Err(Error::fit_failed("prediction is not finite"))
        }
    }
}

fn epoch_seconds(instant: DateTime<Utc>) -> f64 {
    instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_millis()) / 1000.0
}

impl ForecastModel for AdditiveModel {
    fn forecast(&self, series: &MetricSeries, steps_ahead: usize) -> Result<ForecastPoint> {
        let target = series
            .horizon(steps_ahead)
            .ok_or_else(|| Error::fit_failed("cannot forecast from an empty series"))?;
        let value = self.predict_at(series, target)?;
        Ok(ForecastPoint {
            timestamp: target,
            value,
        })
    }

    fn model_name(&self) -> &str {
        "additive"
    }
}
