//! Participant and attendance models and DTOs.

use entryline_core::roster::RosterEntry;
use entryline_core::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `participants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// Public registration code, serialized as `regId` (the QR contract name).
    #[serde(rename = "regId")]
    pub reg_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `attendance` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: DbId,
    pub participant_id: DbId,
    pub checked_in_at: Timestamp,
    pub status: String,
}

/// A participant joined with its optional attendance record.
///
/// This is the shape every read path returns: the roster listing, the scan
/// response, and the live-update event all embed `attendance` or `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantWithAttendance {
    #[serde(flatten)]
    pub participant: Participant,
    pub attendance: Option<Attendance>,
}

impl ParticipantWithAttendance {
    pub fn is_present(&self) -> bool {
        self.attendance.is_some()
    }
}

impl From<&ParticipantWithAttendance> for RosterEntry {
    fn from(p: &ParticipantWithAttendance) -> Self {
        RosterEntry {
            id: p.participant.id,
            name: p.participant.name.clone(),
            email: p.participant.email.clone(),
            reg_id: p.participant.reg_code.clone(),
            checked_in_at: p.attendance.as_ref().map(|a| a.checked_in_at),
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for registering a new participant.
///
/// Fields default to empty strings so a missing field surfaces as the
/// validation error, not a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateParticipant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}
