use std::sync::Arc;

use syncline_core::catalog::Catalog;
use syncline_core::engine::SyncEngine;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The orchestration engine owning all job state.
    pub engine: Arc<SyncEngine>,
    /// Static catalog served by the lookup endpoints.
    pub catalog: Arc<Catalog>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
