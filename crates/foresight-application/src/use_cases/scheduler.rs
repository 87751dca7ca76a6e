//! Scheduling loop
//!
//! Work runs inline on the loop, so a slow cycle delays the next tick instead
//! of overlapping it.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::ports::scheduling::{ScheduledTask, Ticker};

/// Run `task` on every tick until the ticker stops or `shutdown` fires
///
/// Cancellation is observed between cycles; a running cycle always completes.
/// Returns the number of completed cycles.
pub async fn run_schedule<T, S>(ticker: &mut T, task: &mut S, shutdown: &CancellationToken) -> u64
where
    T: Ticker + ?Sized,
    S: ScheduledTask + ?Sized,
{
    let mut cycles = 0u64;
    loop {
        tokio::select! {
            biased;
            () = shutdown.cancelled() => {
                info!(task = task.task_name(), cycles, "Shutdown requested, stopping schedule");
                break;
            }
            ticked = ticker.tick() => {
                if !ticked {
                    debug!(task = task.task_name(), cycles, "Ticker exhausted");
                    break;
                }
                task.run_once().await;
                cycles += 1;
            }
        }
    }
    cycles
}
