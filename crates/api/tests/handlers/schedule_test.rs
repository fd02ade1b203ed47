use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use trainbook_core::models::appointment::{Appointment, Slot};

use crate::test_utils::{TestContext, dt};

#[tokio::test]
async fn test_scheduled_appointments_for_trainer() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/schedule?trainer_id=1").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let appointments: Vec<Appointment> = response.json();
    assert_eq!(
        appointments.iter().map(|app| app.id).collect::<Vec<_>>(),
        vec![1, 3]
    );
    for app in &appointments {
        assert_eq!(app.trainer_id, 1);
    }
}

#[tokio::test]
async fn test_scheduled_appointments_unknown_trainer() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/schedule?trainer_id=42").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "trainer 42 does not exist");
}

#[test_log::test(tokio::test)]
async fn test_create_appointment_then_query_round_trip() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/schedule")
        .json(&json!({
            "starts_at": "2019-01-24T10:00:00",
            "ends_at": "2019-01-24T10:30:00",
            "trainer_id": 1,
            "user_id": 7
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let created: Appointment = response.json();
    assert_eq!(created.id, 4);
    assert_eq!(created.user_id, Some(7));
    assert_eq!(created.start_time, dt("2019-01-24T10:00:00"));

    // The new booking shows up in the trainer's schedule...
    let scheduled: Vec<Appointment> = ctx.server.get("/schedule?trainer_id=1").await.json();
    assert!(scheduled.contains(&created));

    // ...and its slot is no longer offered as available.
    let available: Vec<Slot> = ctx
        .server
        .get("/schedule/available?trainer_id=1&starts_at=2019-01-24T09:00:00&ends_at=2019-01-24T11:00:00")
        .await
        .json();
    let starts: Vec<_> = available.iter().map(|slot| slot.start_time).collect();
    assert_eq!(starts, vec![dt("2019-01-24T09:30:00"), dt("2019-01-24T10:30:00")]);
}

#[tokio::test]
async fn test_create_appointment_without_user_id() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/schedule")
        .json(&json!({
            "starts_at": "2019-01-25T10:00:00",
            "ends_at": "2019-01-25T10:30:00",
            "trainer_id": 2
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Appointment>().user_id, None);
}

#[tokio::test]
async fn test_create_appointment_same_slot_twice_conflicts() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/schedule")
        .json(&json!({
            "starts_at": "2019-01-24T09:00:00",
            "ends_at": "2019-01-24T09:30:00",
            "trainer_id": 1,
            "user_id": 7
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let body: Value = response.json();
    assert_eq!(body["error"], "an appointment already exists at this time");
}

#[tokio::test]
async fn test_create_appointment_wrong_duration() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/schedule")
        .json(&json!({
            "starts_at": "2019-01-24T11:00:00",
            "ends_at": "2019-01-24T12:00:00",
            "trainer_id": 1
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "appointment duration must be exactly 30 minutes");
}

#[tokio::test]
async fn test_create_appointment_misaligned_times() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/schedule")
        .json(&json!({
            "starts_at": "2019-01-24T09:00:00",
            "ends_at": "2019-01-24T09:45:00",
            "trainer_id": 1
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "appointment times must start and end on the hour or half-hour"
    );
}

#[tokio::test]
async fn test_create_appointment_missing_field_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/schedule")
        .json(&json!({
            "starts_at": "2019-01-24T11:00:00",
            "trainer_id": 1
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_racing_bookings_for_one_slot_serialize() {
    let ctx = TestContext::new();
    let body = json!({
        "starts_at": "2019-01-24T13:00:00",
        "ends_at": "2019-01-24T13:30:00",
        "trainer_id": 1
    });

    let (first, second) = tokio::join!(
        ctx.server.post("/schedule").json(&body),
        ctx.server.post("/schedule").json(&body),
    );

    let mut statuses = vec![first.status_code(), second.status_code()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
}
