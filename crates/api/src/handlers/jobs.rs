//! Handlers for the `/jobs` resource.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for starting a job. Both fields are optional; missing
/// values are defaulted from the catalog by the engine's resolution
/// policy.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartJobRequest {
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub destination_ids: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Start
// ---------------------------------------------------------------------------

/// POST /api/v1/jobs
///
/// Start a new sync job. The body may be omitted entirely, in which
/// case both source and destinations are resolved from the catalog.
/// Returns 202 with the job snapshot (the job keeps running in the
/// background), or 400 if no destinations could be resolved.
///
/// The body is parsed leniently: an absent or unparseable body counts
/// as an empty request and falls through to catalog resolution.
pub async fn start_job(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let req: StartJobRequest = serde_json::from_slice(&body).unwrap_or_default();

    let job = state
        .engine
        .start_job(req.source_id, req.destination_ids)
        .await?;

    Ok((StatusCode::ACCEPTED, Json(DataResponse { data: job })))
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// GET /api/v1/jobs
///
/// List all jobs. Order is unspecified.
pub async fn list_jobs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let jobs = state.engine.list_jobs().await;

    Ok(Json(DataResponse { data: jobs }))
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// GET /api/v1/jobs/{id}
///
/// Get a single job by id. Returns 404 for unknown ids.
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let job = state.engine.get_job(&job_id).await?;

    Ok(Json(DataResponse { data: job }))
}
