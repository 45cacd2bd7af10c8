//! In-memory job registry.
//!
//! The only mutable shared state in the engine. Thread-safe via an
//! interior `RwLock` (any number of readers, one writer); designed to
//! be wrapped in `Arc` and shared between the facade and the runner
//! tasks. All returned values are snapshot clones, so callers can
//! never alias or mutate stored records.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::job::Job;

/// Authoritative store of all job records for the process lifetime.
///
/// Jobs are never evicted; the engine is an in-memory simulation and
/// loses all state on restart.
pub struct JobRegistry {
    jobs: RwLock<HashMap<String, Job>>,
}

impl JobRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }

    /// Store a new job record keyed by its identifier.
    ///
    /// The caller guarantees the id is unique (it comes from
    /// [`crate::ids::JobIdGenerator`]).
    pub async fn insert(&self, job: Job) {
        self.jobs.write().await.insert(job.id.clone(), job);
    }

    /// Snapshot of a single job by id.
    pub async fn get(&self, id: &str) -> CoreResult<Job> {
        self.jobs
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "Job",
                id: id.to_string(),
            })
    }

    /// Snapshot of all job records. Order is unspecified.
    pub async fn list(&self) -> Vec<Job> {
        self.jobs.read().await.values().cloned().collect()
    }

    /// Atomically apply `mutate` to the stored record for `id`.
    ///
    /// Used exclusively by the job runner; the write lock makes the
    /// read-modify-write a single step, so readers only ever observe
    /// fully-formed records.
    pub async fn update<F>(&self, id: &str, mutate: F) -> CoreResult<()>
    where
        F: FnOnce(&mut Job),
    {
        let mut jobs = self.jobs.write().await;
        let job = jobs.get_mut(id).ok_or(CoreError::NotFound {
            entity: "Job",
            id: id.to_string(),
        })?;
        mutate(job);
        Ok(())
    }

    /// Current number of stored jobs.
    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}
