//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the trainbook
//! API. It maps the scheduling engine's errors to appropriate HTTP status
//! codes and JSON error responses, ensuring a consistent error shape across
//! the entire API.
//!
//! Every scheduling failure is a synchronous business-rule violation, so the
//! mapping is total: an unknown trainer is a missing resource, a taken slot
//! is a conflict with current calendar state, and every other validation
//! failure is a plain bad request.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use trainbook_core::errors::ScheduleError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps [`ScheduleError`] values and implements `IntoResponse`
/// to convert them into HTTP responses with appropriate status codes and
/// JSON payloads of the form `{"error": "<message>"}`.
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error kind to the appropriate HTTP status
/// code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error kinds to HTTP status codes
        let status = match &self.0 {
            ScheduleError::UnknownTrainer(_) => StatusCode::NOT_FOUND,
            ScheduleError::SlotTaken => StatusCode::CONFLICT,
            ScheduleError::InvalidAlignment
            | ScheduleError::InvalidOrder
            | ScheduleError::OutOfHours
            | ScheduleError::InvalidDuration => StatusCode::BAD_REQUEST,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from ScheduleError to AppError
///
/// This implementation allows using the `?` operator with functions that
/// return `Result<T, ScheduleError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// Maps a ScheduleError to an HTTP response
///
/// Convenience for call sites that are not themselves handlers returning
/// `Result<_, AppError>`.
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}
