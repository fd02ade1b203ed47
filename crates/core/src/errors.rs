use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("trainer {0} does not exist")]
    UnknownTrainer(i64),

    #[error("appointment times must start and end on the hour or half-hour")]
    InvalidAlignment,

    #[error("start time must be before end time")]
    InvalidOrder,

    #[error("appointment time must be between 8am and 5pm")]
    OutOfHours,

    #[error("appointment duration must be exactly 30 minutes")]
    InvalidDuration,

    #[error("an appointment already exists at this time")]
    SlotTaken,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
