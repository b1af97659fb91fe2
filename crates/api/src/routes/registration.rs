//! Route definitions for registration.

use axum::routing::post;
use axum::Router;

use crate::handlers::registration;
use crate::state::AppState;

/// ```text
/// POST /register -> register
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/register", post(registration::register))
}
