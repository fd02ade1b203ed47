use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    #[serde(rename = "started_at")]
    pub start_time: NaiveDateTime,
    #[serde(rename = "ended_at")]
    pub end_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub trainer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(rename = "started_at")]
    pub start_time: NaiveDateTime,
    #[serde(rename = "ended_at")]
    pub end_time: NaiveDateTime,
    pub trainer_id: i64,
}
