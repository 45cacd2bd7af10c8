//! Handlers for the read-only catalog collections.
//!
//! The catalog is immutable reference data; every endpoint is a plain
//! snapshot of what the engine was constructed with.

use axum::extract::State;
use axum::Json;

use syncline_core::catalog::{Connection, Destination, Fanout, Source};

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/sources
pub async fn list_sources(State(state): State<AppState>) -> Json<DataResponse<Vec<Source>>> {
    Json(DataResponse {
        data: state.catalog.sources().to_vec(),
    })
}

/// GET /api/v1/destinations
pub async fn list_destinations(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<Destination>>> {
    Json(DataResponse {
        data: state.catalog.destinations().to_vec(),
    })
}

/// GET /api/v1/connections
pub async fn list_connections(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<Connection>>> {
    Json(DataResponse {
        data: state.catalog.connections().to_vec(),
    })
}

/// GET /api/v1/fanouts
pub async fn list_fanouts(State(state): State<AppState>) -> Json<DataResponse<Vec<Fanout>>> {
    Json(DataResponse {
        data: state.catalog.fanouts().to_vec(),
    })
}
