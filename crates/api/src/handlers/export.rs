//! Attendance report export.

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::IntoResponse;
use entryline_db::models::participant::ParticipantWithAttendance;
use entryline_db::repositories::{ParticipantRepo, RosterOrder};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const CONTENT_DISPOSITION: &str = "attachment; filename=AttendanceReport.xlsx";

/// Placeholder for participants who never checked in.
const NO_CHECKIN: &str = "N/A";

/// Report columns with their widths.
const COLUMNS: [(&str, f64); 5] = [
    ("Name", 30.0),
    ("Email", 30.0),
    ("Registration ID", 25.0),
    ("Status", 15.0),
    ("Check-in Time", 25.0),
];

/// GET /api/export
///
/// Render the roster (name ascending) as a downloadable .xlsx workbook:
/// one row per participant with derived status and check-in time.
pub async fn export_report(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let participants =
        ParticipantRepo::list_with_attendance(&state.pool, RosterOrder::NameAsc).await?;

    let bytes = render_workbook(&participants)
        .map_err(|e| AppError::InternalError(format!("Failed to render report: {e}")))?;

    tracing::info!(rows = participants.len(), "Attendance report exported");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(XLSX_CONTENT_TYPE),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static(CONTENT_DISPOSITION),
    );

    Ok((headers, bytes))
}

/// Flatten the roster into report cells, one row per participant in the
/// given order: name, email, registration code, derived status, check-in
/// time (or the [`NO_CHECKIN`] placeholder).
fn report_rows(participants: &[ParticipantWithAttendance]) -> Vec<[String; 5]> {
    participants
        .iter()
        .map(|entry| {
            let (status, checked_in_at) = match &entry.attendance {
                Some(attendance) => (
                    "Present".to_string(),
                    attendance
                        .checked_in_at
                        .format("%Y-%m-%d %H:%M:%S")
                        .to_string(),
                ),
                None => ("Absent".to_string(), NO_CHECKIN.to_string()),
            };
            [
                entry.participant.name.clone(),
                entry.participant.email.clone(),
                entry.participant.reg_code.clone(),
                status,
                checked_in_at,
            ]
        })
        .collect()
}

/// Build the workbook in memory: a bold header row, then the report rows.
fn render_workbook(participants: &[ParticipantWithAttendance]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Attendance Report")?;

    let bold = Format::new().set_bold();
    for (col, (title, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, *width)?;
        sheet.write_with_format(0, col, *title, &bold)?;
    }

    for (i, cells) in report_rows(participants).iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in cells.iter().enumerate() {
            sheet.write(row, col as u16, value.as_str())?;
        }
    }

    workbook.save_to_buffer()
}
