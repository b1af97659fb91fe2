//! Roster listing and administrative removal.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use entryline_core::{CoreError, DbId};
use entryline_db::repositories::{ParticipantRepo, RosterOrder};

use crate::error::{AppError, AppResult};
use crate::response::ParticipantListResponse;
use crate::state::AppState;

/// GET /api/participants
///
/// Full roster, newest registrations first, attendance embedded or null.
pub async fn list_participants(
    State(state): State<AppState>,
) -> AppResult<Json<ParticipantListResponse>> {
    let participants =
        ParticipantRepo::list_with_attendance(&state.pool, RosterOrder::NewestFirst).await?;

    Ok(Json(ParticipantListResponse {
        success: true,
        participants,
    }))
}

/// DELETE /api/participants/{id}
///
/// Administrative removal. The attendance row goes with it via cascade.
pub async fn delete_participant(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ParticipantRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Participant",
        }));
    }

    tracing::info!(participant_id = id, "Participant deleted");

    Ok(StatusCode::NO_CONTENT)
}
