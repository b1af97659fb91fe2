//! Typed response envelopes for API handlers.
//!
//! The response shapes here are part of the external contract with the
//! dashboard and scanner clients, so they are bespoke per endpoint rather
//! than a single generic wrapper. Typed structs keep them honest.

use entryline_db::models::participant::ParticipantWithAttendance;
use serde::Serialize;

/// `{ "participant": ... }` returned by registration.
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub participant: ParticipantWithAttendance,
}

/// `{ "message": ..., "participant": ... }` returned by the scan endpoint.
///
/// The message distinguishes a true first check-in from a repeat scan.
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub message: &'static str,
    pub participant: ParticipantWithAttendance,
}

/// `{ "success": true, "participants": [...] }` returned by the roster listing.
#[derive(Debug, Serialize)]
pub struct ParticipantListResponse {
    pub success: bool,
    pub participants: Vec<ParticipantWithAttendance>,
}
