//! Tests for the scheduling loop, driven without wall-clock waits

use std::collections::VecDeque;

use async_trait::async_trait;
use foresight_application::{ScheduledTask, Ticker, run_schedule};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Ticker firing a fixed number of times
struct CountedTicker {
    remaining: usize,
}

#[async_trait]
impl Ticker for CountedTicker {
    async fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Ticker fed from a channel, closed when the sender drops
struct ChannelTicker {
    ticks: mpsc::UnboundedReceiver<()>,
}

#[async_trait]
impl Ticker for ChannelTicker {
    async fn tick(&mut self) -> bool {
        self.ticks.recv().await.is_some()
    }
}

#[derive(Default)]
struct CountingTask {
    runs: usize,
}

#[async_trait]
impl ScheduledTask for CountingTask {
    async fn run_once(&mut self) {
        self.runs += 1;
    }

    fn task_name(&self) -> &str {
        "counting"
    }
}

/// Task that cancels the schedule from inside its third run
struct CancellingTask {
    token: CancellationToken,
    log: VecDeque<usize>,
}

#[async_trait]
impl ScheduledTask for CancellingTask {
    async fn run_once(&mut self) {
        let run = self.log.len() + 1;
        self.log.push_back(run);
        if run == 3 {
            self.token.cancel();
        }
    }

    fn task_name(&self) -> &str {
        "cancelling"
    }
}

#[tokio::test]
async fn test_runs_once_per_tick_until_ticker_stops() {
    let mut ticker = CountedTicker { remaining: 4 };
    let mut task = CountingTask::default();

    let cycles = run_schedule(&mut ticker, &mut task, &CancellationToken::new()).await;

    assert_eq!(cycles, 4);
    assert_eq!(task.runs, 4);
}

#[tokio::test]
async fn test_cancelled_before_start_runs_nothing() {
    let token = CancellationToken::new();
    token.cancel();
    let mut ticker = CountedTicker { remaining: 10 };
    let mut task = CountingTask::default();

    let cycles = run_schedule(&mut ticker, &mut task, &token).await;

    assert_eq!(cycles, 0);
    assert_eq!(task.runs, 0);
}

#[tokio::test]
async fn test_cancellation_observed_between_cycles() {
    let token = CancellationToken::new();
    let mut ticker = CountedTicker { remaining: 10 };
    let mut task = CancellingTask {
        token: token.clone(),
        log: VecDeque::new(),
    };

    let cycles = run_schedule(&mut ticker, &mut task, &token).await;

    assert_eq!(cycles, 3);
    assert_eq!(task.log, VecDeque::from(vec![1, 2, 3]));
}

#[tokio::test]
async fn test_channel_ticker_drives_cycles() {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut ticker = ChannelTicker { ticks: rx };
    let mut task = CountingTask::default();

    for _ in 0..3 {
        tx.send(()).unwrap();
    }
    drop(tx);

    let cycles = run_schedule(&mut ticker, &mut task, &CancellationToken::new()).await;
    assert_eq!(cycles, 3);
    assert_eq!(task.runs, 3);
}
