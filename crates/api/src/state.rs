use std::sync::Arc;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed explicitly at startup and injected everywhere; there is no
/// module-level store handle. Cheaply cloneable (inner data is behind `Arc`
/// or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: entryline_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (dashboard clients).
    pub ws_manager: Arc<WsManager>,
    /// Event bus the check-in service publishes to.
    pub event_bus: Arc<entryline_events::EventBus>,
}
