//! Integration tests for the scan endpoint: the check-in state machine,
//! its idempotence, the concurrent-scan race, and event publication.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{body_json, post_json, post_raw, register_participant};
use entryline_core::qr::QrPayload;
use entryline_db::repositories::AttendanceRepo;
use serde_json::json;
use sqlx::PgPool;
use tokio::sync::broadcast::error::TryRecvError;

const MSG_MARKED: &str = "Attendance marked successfully!";
const MSG_ALREADY_MARKED: &str = "Attendance already marked.";

#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_unknown_code_returns_not_found(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/scan", json!({ "regId": "EVT-FFFFFFFF" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Participant not found.");

    // No attendance row was created for anyone.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_malformed_payload_is_invalid_qr(pool: PgPool) {
    let app = common::build_test_app(pool);

    for body in ["not json", "{}", r#"{"regId":""}"#, r#"{"code":"EVT-00000001"}"#] {
        let response = post_raw(app.clone(), "/api/scan", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid QR code.");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_non_utf8_body_is_invalid_qr(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::post_bytes(app, "/api/scan", vec![0xff, 0xfe, 0x7b]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid QR code.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_scan_marks_then_repeats_are_noops(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let participant = register_participant(app.clone(), "Ana", "ana@example.com").await;
    let reg_id = participant["regId"].as_str().unwrap();
    let participant_id = participant["id"].as_i64().unwrap();

    // First scan: marked successfully, attendance embedded.
    let response = post_json(app.clone(), "/api/scan", json!({ "regId": reg_id })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], MSG_MARKED);
    assert_eq!(body["participant"]["attendance"]["status"], "present");

    // Every subsequent scan: already marked, still exactly one row.
    for _ in 0..3 {
        let response = post_json(app.clone(), "/api/scan", json!({ "regId": reg_id })).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], MSG_ALREADY_MARKED);
        assert_eq!(body["participant"]["attendance"]["status"], "present");
    }

    let count = AttendanceRepo::count_for_participant(&pool, participant_id)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_accepts_raw_qr_payload_text(pool: PgPool) {
    let app = common::build_test_app(pool);

    let participant = register_participant(app.clone(), "Ana", "ana@example.com").await;
    let payload = QrPayload::new(participant["regId"].as_str().unwrap());

    // The scanner posts the decoded QR text verbatim.
    let response = post_raw(app, "/api/scan", &payload.encode()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], MSG_MARKED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_scans_create_exactly_one_attendance(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let participant = register_participant(app.clone(), "Ana", "ana@example.com").await;
    let reg_id = participant["regId"].as_str().unwrap();
    let participant_id = participant["id"].as_i64().unwrap();

    let body = json!({ "regId": reg_id });
    let (r1, r2) = tokio::join!(
        post_json(app.clone(), "/api/scan", body.clone()),
        post_json(app.clone(), "/api/scan", body.clone()),
    );
    assert_eq!(r1.status(), StatusCode::OK);
    assert_eq!(r2.status(), StatusCode::OK);

    let m1 = body_json(r1).await["message"].as_str().unwrap().to_string();
    let m2 = body_json(r2).await["message"].as_str().unwrap().to_string();

    let marked = [m1.as_str(), m2.as_str()]
        .iter()
        .filter(|m| **m == MSG_MARKED)
        .count();
    assert_eq!(marked, 1, "exactly one scan may win: {m1:?} / {m2:?}");

    let count = AttendanceRepo::count_for_participant(&pool, participant_id)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_scan_publishes_event_and_repeat_does_not(pool: PgPool) {
    let (app, bus) = common::build_test_app_with_bus(pool);
    let mut rx = bus.subscribe();

    let participant = register_participant(app.clone(), "Ana", "ana@example.com").await;
    let reg_id = participant["regId"].as_str().unwrap();
    let participant_id = participant["id"].as_i64().unwrap();

    let response = post_json(app.clone(), "/api/scan", json!({ "regId": reg_id })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let event = rx.recv().await.expect("first scan must publish an event");
    assert_eq!(event.event_type, "attendanceUpdate");
    assert_eq!(event.participant.participant.id, participant_id);
    assert!(event.participant.is_present());

    // Repeat scan: no second event.
    let response = post_json(app, "/api/scan", json!({ "regId": reg_id })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_matches!(rx.try_recv(), Err(TryRecvError::Empty));
}
