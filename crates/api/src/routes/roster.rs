//! Route definitions for the roster and report surface.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{export, roster};
use crate::state::AppState;

/// ```text
/// GET    /participants       -> list_participants
/// DELETE /participants/{id}  -> delete_participant
/// GET    /export             -> export_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/participants", get(roster::list_participants))
        .route("/participants/{id}", delete(roster::delete_participant))
        .route("/export", get(export::export_report))
}
