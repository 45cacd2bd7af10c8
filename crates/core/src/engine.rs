//! The orchestration facade composing catalog, ids, registry, and
//! runner.
//!
//! Constructed once at startup and shared as `Arc<SyncEngine>`; there
//! is no ambient global state, so tests build their own engine around
//! whatever catalog fixture they need.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::ids::JobIdGenerator;
use crate::job::{Job, JobStatus};
use crate::registry::JobRegistry;
use crate::resolve;
use crate::runner;

/// Entry point for the transport layer: start, fetch, and list sync
/// jobs.
///
/// Each started job gets a detached runner task supervised by a child
/// of the engine's root cancellation token, so [`SyncEngine::shutdown`]
/// stops every runner from issuing further updates.
pub struct SyncEngine {
    catalog: Arc<Catalog>,
    registry: Arc<JobRegistry>,
    ids: JobIdGenerator,
    tick: Duration,
    cancel: CancellationToken,
}

impl SyncEngine {
    /// Create an engine over the given catalog with the default
    /// one-second progress tick.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            registry: Arc::new(JobRegistry::new()),
            ids: JobIdGenerator::new(),
            tick: runner::DEFAULT_TICK_INTERVAL,
            cancel: CancellationToken::new(),
        }
    }

    /// Override the progress tick interval.
    pub fn with_tick_interval(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// The catalog this engine resolves jobs against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Start a new sync job.
    ///
    /// Missing source or destinations are defaulted from the catalog;
    /// fails with `NoDestinationsAvailable` if resolution yields an
    /// empty destination set. Returns the inserted snapshot (status
    /// running, progress 0) while the runner advances the job in the
    /// background.
    pub async fn start_job(
        &self,
        source_id: Option<String>,
        destination_ids: Option<Vec<String>>,
    ) -> CoreResult<Job> {
        let (source_id, destination_ids) =
            resolve::resolve(&self.catalog, source_id, destination_ids)?;

        let id = self.ids.next();
        let job = Job {
            id: id.clone(),
            status: JobStatus::Running,
            progress: 0,
            started_at: chrono::Utc::now(),
            finished_at: None,
            error: None,
            source_id,
            destination_ids,
        };

        self.registry.insert(job.clone()).await;

        tokio::spawn(runner::run(
            Arc::clone(&self.registry),
            id.clone(),
            self.tick,
            self.cancel.child_token(),
        ));

        tracing::info!(
            job_id = %id,
            source_id = %job.source_id,
            destinations = job.destination_ids.len(),
            "Sync job started",
        );

        Ok(job)
    }

    /// Snapshot of a single job by id.
    pub async fn get_job(&self, id: &str) -> CoreResult<Job> {
        self.registry.get(id).await
    }

    /// Snapshot of all jobs. Order is unspecified.
    pub async fn list_jobs(&self) -> Vec<Job> {
        self.registry.list().await
    }

    /// Stop every runner from issuing further updates.
    ///
    /// Jobs keep their last observed state; used during graceful
    /// shutdown.
    pub fn shutdown(&self) {
        self.cancel.cancel();
        tracing::info!("Sync engine shut down, job runners cancelled");
    }
}
