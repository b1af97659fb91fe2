//! Registration handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use entryline_core::regcode;
use entryline_db::models::participant::{CreateParticipant, ParticipantWithAttendance};
use entryline_db::repositories::ParticipantRepo;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::response::ParticipantResponse;
use crate::state::AppState;

/// POST /api/register
///
/// Create a participant with a freshly generated registration code and
/// return it for QR rendering. Missing fields and duplicate emails both
/// answer 400; a generated-code collision takes the same conflict path.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CreateParticipant>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() || input.email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Name and email are required.".to_string(),
        ));
    }

    let reg_code = regcode::generate();

    let participant = match ParticipantRepo::create(&state.pool, &input, &reg_code).await {
        Ok(participant) => participant,
        Err(err) if is_unique_violation(&err) => {
            return Err(AppError::BadRequest(
                "Email may already be registered.".to_string(),
            ));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(
        participant_id = participant.id,
        reg_code = %participant.reg_code,
        "Participant registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(ParticipantResponse {
            participant: ParticipantWithAttendance {
                participant,
                attendance: None,
            },
        }),
    ))
}
