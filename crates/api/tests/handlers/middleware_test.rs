use axum::http::StatusCode;
use trainbook_api::middleware::error_handling::{AppError, map_error};
use trainbook_core::errors::ScheduleError;

#[tokio::test]
async fn test_error_handling_unknown_trainer() {
    let response = map_error(ScheduleError::UnknownTrainer(3));

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_slot_taken() {
    let response = map_error(ScheduleError::SlotTaken);

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_window_validation() {
    for error in [
        ScheduleError::InvalidAlignment,
        ScheduleError::InvalidOrder,
        ScheduleError::OutOfHours,
        ScheduleError::InvalidDuration,
    ] {
        let response = map_error(error);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_app_error_from_schedule_error() {
    let error: AppError = ScheduleError::SlotTaken.into();

    assert!(matches!(error.0, ScheduleError::SlotTaken));
}
