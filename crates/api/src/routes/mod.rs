pub mod catalog;
pub mod health;
pub mod jobs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sources            catalog lookup
/// /destinations       catalog lookup
/// /connections        catalog lookup
/// /fanouts            catalog lookup
///
/// /jobs               list, start
/// /jobs/{id}          get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .nest("/jobs", jobs::router())
}
