//! Background progress runner.
//!
//! One detached Tokio task per job, spawned at job creation and not
//! bound to the lifetime of the request that created it. Each tick
//! performs exactly one registry update; the tick that lands on 100
//! also flips the status to completed and stamps `finished_at`.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::job::JobStatus;
use crate::registry::JobRegistry;

/// First progress value reported after one tick interval.
pub const PROGRESS_START: u8 = 10;

/// Progress added per tick. The sequence runs 10, 25, 40, 55, 70, 85,
/// and lands exactly on 100 at the terminal tick.
pub const PROGRESS_STEP: u8 = 15;

/// Default interval between progress ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Simulate progress for one job until it completes or the
/// cancellation token fires.
///
/// On cancellation the runner stops issuing updates and exits; the job
/// keeps its last observed state (no cancelled status exists in the
/// engine).
pub async fn run(registry: Arc<JobRegistry>, id: String, tick: Duration, cancel: CancellationToken) {
    let mut ticker = tokio::time::interval(tick);
    // The first interval tick completes immediately; consume it so the
    // first progress step lands a full interval after job creation.
    ticker.tick().await;

    let mut progress = PROGRESS_START;
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(job_id = %id, progress, "Job runner cancelled");
                return;
            }
            _ = ticker.tick() => {}
        }

        let terminal = progress >= 100;
        let result = registry
            .update(&id, |job| {
                job.progress = progress;
                if terminal {
                    job.status = JobStatus::Completed;
                    job.finished_at = Some(chrono::Utc::now());
                }
            })
            .await;

        if let Err(e) = result {
            // The registry never evicts, so a missing record means a
            // programming error upstream. Stop rather than spin.
            tracing::error!(job_id = %id, error = %e, "Job runner lost its record");
            return;
        }

        if terminal {
            tracing::info!(job_id = %id, "Job completed");
            return;
        }

        progress = (progress + PROGRESS_STEP).min(100);
    }
}
