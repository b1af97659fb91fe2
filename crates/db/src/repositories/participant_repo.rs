//! Repository for the `participants` table.
//!
//! All read paths join the optional attendance row so callers get the
//! participant-with-attendance shape in one query.

use entryline_core::DbId;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::participant::{
    Attendance, CreateParticipant, Participant, ParticipantWithAttendance,
};

/// Column list for `participants` queries.
const PARTICIPANT_COLUMNS: &str = "id, name, email, reg_code, created_at, updated_at";

/// Joined select used by every read that embeds attendance.
const JOINED_SELECT: &str = "\
    SELECT p.id, p.name, p.email, p.reg_code, p.created_at, p.updated_at, \
           a.id AS attendance_id, a.checked_in_at, a.status AS attendance_status \
    FROM participants p \
    LEFT JOIN attendance a ON a.participant_id = p.id";

/// Sort order for roster listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterOrder {
    /// Newest registrations first (live roster view).
    NewestFirst,
    /// Alphabetical by name (report export).
    NameAsc,
}

impl RosterOrder {
    fn sql(self) -> &'static str {
        match self {
            RosterOrder::NewestFirst => "p.created_at DESC, p.id DESC",
            RosterOrder::NameAsc => "p.name ASC, p.id ASC",
        }
    }
}

/// Provides CRUD operations for participants.
pub struct ParticipantRepo;

impl ParticipantRepo {
    /// Insert a new participant with a pre-generated registration code.
    ///
    /// A duplicate email or code surfaces as the `uq_` unique violation,
    /// which the registration handler maps to the conflict response.
    pub async fn create(
        pool: &PgPool,
        input: &CreateParticipant,
        reg_code: &str,
    ) -> Result<Participant, sqlx::Error> {
        let query = format!(
            "INSERT INTO participants (name, email, reg_code) \
             VALUES ($1, $2, $3) \
             RETURNING {PARTICIPANT_COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(reg_code)
            .fetch_one(pool)
            .await
    }

    /// Find a participant by id, without the attendance join.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!("SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE id = $1");
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a participant by registration code, attendance included.
    pub async fn find_by_reg_code(
        pool: &PgPool,
        reg_code: &str,
    ) -> Result<Option<ParticipantWithAttendance>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE p.reg_code = $1");
        sqlx::query(&query)
            .bind(reg_code)
            .fetch_optional(pool)
            .await?
            .map(from_joined_row)
            .transpose()
    }

    /// Re-read a participant by id with its attendance embedded.
    pub async fn find_with_attendance(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ParticipantWithAttendance>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE p.id = $1");
        sqlx::query(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(from_joined_row)
            .transpose()
    }

    /// List every participant with attendance embedded, in the given order.
    pub async fn list_with_attendance(
        pool: &PgPool,
        order: RosterOrder,
    ) -> Result<Vec<ParticipantWithAttendance>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} ORDER BY {}", order.sql());
        sqlx::query(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(from_joined_row)
            .collect()
    }

    /// Administrative removal. Cascades to the attendance row.
    ///
    /// Returns `false` if no participant with the given id exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM participants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Number of participants registered with the given email.
    pub async fn count_by_email(pool: &PgPool, email: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM participants WHERE email = $1")
            .bind(email)
            .fetch_one(pool)
            .await
    }
}

/// Fold the nullable attendance columns of a joined row into
/// `Option<Attendance>`.
fn from_joined_row(row: PgRow) -> Result<ParticipantWithAttendance, sqlx::Error> {
    let participant = Participant {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        reg_code: row.try_get("reg_code")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    };
    let attendance = match row.try_get::<Option<DbId>, _>("attendance_id")? {
        Some(id) => Some(Attendance {
            id,
            participant_id: participant.id,
            checked_in_at: row.try_get("checked_in_at")?,
            status: row.try_get("attendance_status")?,
        }),
        None => None,
    };
    Ok(ParticipantWithAttendance {
        participant,
        attendance,
    })
}
