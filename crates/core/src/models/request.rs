use chrono::NaiveDateTime;
use serde::Deserialize;

/// Canonical request value consumed by the calendar. Each transport shape
/// below converts into this before reaching the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub trainer_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailableTimesQuery {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub trainer_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledQuery {
    pub trainer_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointmentRequest {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub trainer_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl From<AvailableTimesQuery> for AppointmentRequest {
    fn from(query: AvailableTimesQuery) -> Self {
        Self {
            trainer_id: query.trainer_id,
            start_time: query.starts_at,
            end_time: query.ends_at,
            user_id: None,
        }
    }
}

impl From<CreateAppointmentRequest> for AppointmentRequest {
    fn from(request: CreateAppointmentRequest) -> Self {
        Self {
            trainer_id: request.trainer_id,
            start_time: request.starts_at,
            end_time: request.ends_at,
            user_id: request.user_id,
        }
    }
}
