//! Route definitions for the scan endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::checkin;
use crate::state::AppState;

/// ```text
/// POST /scan -> scan
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/scan", post(checkin::scan))
}
