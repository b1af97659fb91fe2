//! Repository for the `attendance` table.

use entryline_core::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::participant::Attendance;

/// Provides the check-in write path and attendance lookups.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Mark a participant present, exactly once.
    ///
    /// The `uq_attendance_participant` constraint serializes concurrent
    /// scans: `ON CONFLICT DO NOTHING` makes a lost race indistinguishable
    /// from a repeat scan. Returns `true` if this call created the row,
    /// `false` if the participant was already marked.
    pub async fn mark_present(
        pool: &PgPool,
        participant_id: DbId,
        checked_in_at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO attendance (participant_id, checked_in_at) \
             VALUES ($1, $2) \
             ON CONFLICT (participant_id) DO NOTHING",
        )
        .bind(participant_id)
        .bind(checked_in_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Find the attendance row for a participant, if any.
    pub async fn find_by_participant(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<Option<Attendance>, sqlx::Error> {
        sqlx::query_as::<_, Attendance>(
            "SELECT id, participant_id, checked_in_at, status \
             FROM attendance WHERE participant_id = $1",
        )
        .bind(participant_id)
        .fetch_optional(pool)
        .await
    }

    /// Number of attendance rows for a participant. The check-in invariant
    /// keeps this at zero or one.
    pub async fn count_for_participant(
        pool: &PgPool,
        participant_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE participant_id = $1")
            .bind(participant_id)
            .fetch_one(pool)
            .await
    }
}
