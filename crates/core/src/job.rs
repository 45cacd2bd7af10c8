//! The sync job record and its status lifecycle.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Lifecycle status of a sync job.
///
/// Every job that starts runs to completion; there is no failed state
/// in the current engine (nothing it does can fail).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Running,
    Completed,
}

/// One simulated sync from a resolved source to a resolved set of
/// destinations.
///
/// Owned by the registry after insertion; mutated only by the runner
/// task bound to its id. `progress` is monotonically non-decreasing
/// and `finished_at` is set exactly once, when the status flips to
/// [`JobStatus::Completed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub status: JobStatus,
    pub progress: u8,
    pub started_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<Timestamp>,
    /// Reserved for a future failure path; never populated today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub source_id: String,
    pub destination_ids: Vec<String>,
}
