//! Route definitions for the catalog collections.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// GET /sources        -> list_sources
/// GET /destinations   -> list_destinations
/// GET /connections    -> list_connections
/// GET /fanouts        -> list_fanouts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sources", get(catalog::list_sources))
        .route("/destinations", get(catalog::list_destinations))
        .route("/connections", get(catalog::list_connections))
        .route("/fanouts", get(catalog::list_fanouts))
}
