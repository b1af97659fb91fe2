//! Check-in handlers.
//!
//! The scan endpoint is the one piece with a real contract: a one-way
//! `unchecked -> checked-in` transition per participant, idempotent from the
//! caller's perspective, with exactly one attendance row created no matter
//! how many scanners race on the same code.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use entryline_core::qr::QrPayload;
use entryline_core::CoreError;
use entryline_db::repositories::{AttendanceRepo, ParticipantRepo};
use entryline_events::CheckinEvent;

use crate::error::{AppError, AppResult};
use crate::response::ScanResponse;
use crate::state::AppState;

/// Message returned on a true first check-in.
pub const MSG_MARKED: &str = "Attendance marked successfully!";

/// Message returned on any scan after the first.
pub const MSG_ALREADY_MARKED: &str = "Attendance already marked.";

/// POST /api/scan
///
/// The request body is the QR payload verbatim (`{"regId":"<code>"}`), so a
/// scanner posts whatever it decoded without reshaping it. Malformed input,
/// non-UTF-8 bytes included, is the generic invalid-QR failure.
///
/// Outcomes:
/// - unknown code -> 404, no side effect
/// - already marked -> 200 [`MSG_ALREADY_MARKED`], no side effect
/// - first scan -> insert attendance, publish the live update, 200
///   [`MSG_MARKED`]
pub async fn scan(State(state): State<AppState>, body: Bytes) -> AppResult<Json<ScanResponse>> {
    let payload = std::str::from_utf8(&body)
        .ok()
        .and_then(|text| QrPayload::parse(text).ok())
        .ok_or_else(|| AppError::BadRequest("Invalid QR code.".to_string()))?;

    let existing = ParticipantRepo::find_by_reg_code(&state.pool, &payload.reg_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Participant",
        }))?;

    if existing.attendance.is_some() {
        return Ok(Json(ScanResponse {
            message: MSG_ALREADY_MARKED,
            participant: existing,
        }));
    }

    // The unique constraint on attendance.participant_id serializes
    // concurrent scans; losing the race reads back as created == false.
    let created =
        AttendanceRepo::mark_present(&state.pool, existing.participant.id, chrono::Utc::now())
            .await?;

    // Re-read so the response carries the stored attendance row, whichever
    // scan won the race.
    let updated = ParticipantRepo::find_with_attendance(&state.pool, existing.participant.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Participant",
        }))?;

    if !created {
        return Ok(Json(ScanResponse {
            message: MSG_ALREADY_MARKED,
            participant: updated,
        }));
    }

    tracing::info!(
        participant_id = updated.participant.id,
        reg_code = %updated.participant.reg_code,
        "Attendance marked"
    );

    // Fire-and-forget: a publish with no subscribers is not a failure.
    state.event_bus.publish(CheckinEvent::new(updated.clone()));

    Ok(Json(ScanResponse {
        message: MSG_MARKED,
        participant: updated,
    }))
}
