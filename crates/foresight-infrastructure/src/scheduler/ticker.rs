//! Interval ticker
//!
//! Fires immediately, then once per period. A tick that is missed because a
//! cycle overran is delayed, never replayed in a burst.

use std::time::Duration;

use async_trait::async_trait;
use foresight_application::Ticker;
use tokio::time::{Interval, MissedTickBehavior, interval};

/// [`Ticker`] backed by [`tokio::time::Interval`]
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    interval: Interval,
}

impl IntervalTicker {
    /// Create a ticker with the given period
    ///
    /// Must be called inside a tokio runtime. A zero period is raised to one
    /// millisecond since `Interval` rejects it.
    pub fn new(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { period, interval }
    }

    /// Period between ticks
    pub fn period(&self) -> Duration {
        self.period
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}
