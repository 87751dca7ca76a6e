//! Scheduling Ports
//!
//! Decouple "when" from "what": a [`Ticker`] decides when a cycle fires, a
//! [`ScheduledTask`] is the work that runs on every tick.

use async_trait::async_trait;

/// Source of ticks
///
/// The first tick should complete immediately so work runs on start-up.
#[async_trait]
pub trait Ticker: Send {
    /// Wait for the next tick
    ///
    /// Returns `false` once the ticker will never fire again.
    async fn tick(&mut self) -> bool;
}

/// Work executed on every tick
///
/// `run_once` must not fail: every error is handled inside the task.
#[async_trait]
pub trait ScheduledTask: Send {
    /// Run one complete unit of work
    async fn run_once(&mut self);

    /// Name used in logs
    fn task_name(&self) -> &str;
}
