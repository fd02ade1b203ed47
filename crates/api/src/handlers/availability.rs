//! # Availability Handlers
//!
//! Open-slot lookup for one trainer over a caller-chosen window.
//!
//! ## Slot Enumeration
//!
//! The calendar decomposes the requested window into 30-minute grid cells
//! aligned to :00/:30 and reports every cell with no booking starting on it.
//! The window may span any number of cells but both endpoints must sit on
//! the grid and inside the 8am-5pm business day; violations are reported in
//! the fixed order the engine validates them (unknown trainer, alignment,
//! ordering, business hours).

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use trainbook_core::models::{
    appointment::Slot,
    request::{AppointmentRequest, AvailableTimesQuery},
};

use crate::{ApiState, middleware::error_handling::AppError};

/// Lists a trainer's open 30-minute slots inside the requested window
///
/// # Endpoint
///
/// ```text
/// GET /schedule/available?trainer_id=1&starts_at=2019-01-24T09:00:00&ends_at=2019-01-24T11:00:00
/// ```
///
/// # Returns
///
/// * `Result<Json<Vec<Slot>>, AppError>` - The ordered free slots, each
///   carrying the trainer id and its own 30-minute bounds. A fully booked
///   window is a `200` with an empty array, not an error.
///
/// # Errors
///
/// * `ScheduleError::UnknownTrainer` - trainer id not in the seed data (404)
/// * `ScheduleError::InvalidAlignment` - an endpoint off the :00/:30 grid (400)
/// * `ScheduleError::InvalidOrder` - start not strictly before end (400)
/// * `ScheduleError::OutOfHours` - an endpoint outside 8am-5pm (400)
#[axum::debug_handler]
pub async fn get_available_times(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailableTimesQuery>,
) -> Result<Json<Vec<Slot>>, AppError> {
    let request = AppointmentRequest::from(query);

    let calendar = state.calendar.read().await;
    let slots = calendar.available_appointments(&request)?;

    Ok(Json(slots))
}
