//! Route definitions.

pub mod checkin;
pub mod health;
pub mod registration;
pub mod roster;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                    WebSocket (live check-in updates)
///
/// /register              POST  register a participant
/// /scan                  POST  mark attendance by registration code
///
/// /participants          GET   roster listing (newest first)
/// /participants/{id}     DELETE administrative removal
/// /export                GET   attendance report (.xlsx)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .merge(registration::router())
        .merge(checkin::router())
        .merge(roster::router())
}
