//! # Schedule Handlers
//!
//! Listing a trainer's booked appointments and booking new ones. Reads take
//! the calendar's read guard; booking takes the write guard around the whole
//! validate-then-append sequence so racing bookings serialize and the loser
//! sees the slot as taken.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::info;
use trainbook_core::models::{
    appointment::Appointment,
    request::{AppointmentRequest, CreateAppointmentRequest, ScheduledQuery},
};

use crate::{ApiState, middleware::error_handling::AppError};

/// Lists every booked appointment for one trainer, in booking order
///
/// # Endpoint
///
/// ```text
/// GET /schedule?trainer_id=1
/// ```
///
/// A known trainer with no bookings gets a `200` with an empty array; an
/// unknown trainer gets a `404`. The two cases are deliberately distinct.
#[axum::debug_handler]
pub async fn get_scheduled_appointments(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ScheduledQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let calendar = state.calendar.read().await;
    let appointments = calendar.scheduled_appointments(query.trainer_id)?;

    Ok(Json(appointments))
}

/// Books a 30-minute appointment for a trainer
///
/// # Endpoint
///
/// ```text
/// POST /schedule
/// {"starts_at": "2019-01-24T09:00:00", "ends_at": "2019-01-24T09:30:00", "trainer_id": 1, "user_id": 7}
/// ```
///
/// # Returns
///
/// * `201` with the created appointment, including its calendar-assigned id.
///
/// # Errors
///
/// The same window checks as the availability lookup, plus
/// `ScheduleError::InvalidDuration` for windows that are not exactly one
/// slot (400) and `ScheduleError::SlotTaken` when the trainer already has a
/// booking starting at that instant (409).
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let request = AppointmentRequest::from(payload);

    let mut calendar = state.calendar.write().await;
    let created = calendar.create_appointment(request)?;

    info!(
        id = created.id,
        trainer_id = created.trainer_id,
        start = %created.start_time,
        "appointment booked"
    );

    Ok((StatusCode::CREATED, Json(created)))
}
