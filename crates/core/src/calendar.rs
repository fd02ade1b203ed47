//! # Slot Calendar
//!
//! The scheduling engine behind the trainbook API. A [`SlotCalendar`] owns
//! the full appointment list plus the set of known trainers, and is the only
//! place that reads or mutates either.
//!
//! All bookable time is a grid of 30-minute slots aligned to :00/:30
//! boundaries inside the 8am–5pm business window. Every stored appointment
//! occupies exactly one grid cell, which is why the availability walk only
//! has to compare slot start instants rather than run a full interval
//! intersection per candidate.
//!
//! Timestamps are timezone-naive local wall-clock values. The business-hours
//! rule is a wall-clock rule, so the calendar never converts to or from UTC.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::appointment::{Appointment, Slot};
use crate::models::request::AppointmentRequest;

/// Length of a bookable slot.
pub const SLOT_MINUTES: i64 = 30;

/// First hour of the business day a slot may start or end in.
pub const OPENING_HOUR: u32 = 8;

/// Last hour of the business day a slot may start or end in.
pub const CLOSING_HOUR: u32 = 17;

/// In-memory aggregate of every scheduled appointment.
///
/// The trainer set is derived once from the seed list and never changes;
/// booking cannot introduce a new trainer. Appointment ids are assigned
/// here, monotonically, continuing from the highest id seen at load time.
#[derive(Debug, Default)]
pub struct SlotCalendar {
    appointments: Vec<Appointment>,
    trainer_ids: HashSet<i64>,
    next_id: i64,
}

impl SlotCalendar {
    /// Builds a calendar from previously stored appointments.
    pub fn new(appointments: Vec<Appointment>) -> Self {
        let trainer_ids = appointments.iter().map(|app| app.trainer_id).collect();
        let next_id = appointments.iter().map(|app| app.id).max().unwrap_or(0);

        Self {
            appointments,
            trainer_ids,
            next_id,
        }
    }

    /// Returns the open 30-minute slots for a trainer inside the requested
    /// window.
    ///
    /// The window itself may span any number of slots. Validation order is
    /// fixed: unknown trainer, then minute alignment, then ordering, then
    /// business hours; the first violated rule is returned. A window with no
    /// free slots yields an empty vec, not an error.
    pub fn available_appointments(&self, request: &AppointmentRequest) -> ScheduleResult<Vec<Slot>> {
        if !self.is_known_trainer(request.trainer_id) {
            return Err(ScheduleError::UnknownTrainer(request.trainer_id));
        }
        validate_window(request.start_time, request.end_time)?;

        let booked = self.relevant_appointments(request.trainer_id, request.start_time, request.end_time);

        let mut available = Vec::new();
        let mut slot_start = request.start_time;
        while slot_start < request.end_time {
            if !booked.iter().any(|app| app.start_time == slot_start) {
                available.push(Slot {
                    start_time: slot_start,
                    end_time: slot_start + Duration::minutes(SLOT_MINUTES),
                    trainer_id: request.trainer_id,
                });
            }
            slot_start += Duration::minutes(SLOT_MINUTES);
        }

        Ok(available)
    }

    /// Returns every stored appointment for a trainer, in booking order.
    ///
    /// A known trainer with zero bookings gets an empty vec; an unknown
    /// trainer gets [`ScheduleError::UnknownTrainer`]. The two outcomes are
    /// deliberately distinct.
    pub fn scheduled_appointments(&self, trainer_id: i64) -> ScheduleResult<Vec<Appointment>> {
        if !self.is_known_trainer(trainer_id) {
            return Err(ScheduleError::UnknownTrainer(trainer_id));
        }

        Ok(self
            .appointments
            .iter()
            .filter(|app| app.trainer_id == trainer_id)
            .cloned()
            .collect())
    }

    /// Books a new appointment and returns it with its assigned id.
    ///
    /// Runs the same checks as [`Self::available_appointments`], then
    /// requires the window to be exactly one slot long and the slot to be
    /// free for that trainer. Validation fully precedes the append, so a
    /// failed booking leaves the calendar untouched.
    pub fn create_appointment(&mut self, request: AppointmentRequest) -> ScheduleResult<Appointment> {
        if !self.is_known_trainer(request.trainer_id) {
            return Err(ScheduleError::UnknownTrainer(request.trainer_id));
        }
        validate_window(request.start_time, request.end_time)?;

        if request.end_time - request.start_time != Duration::minutes(SLOT_MINUTES) {
            return Err(ScheduleError::InvalidDuration);
        }

        let taken = self
            .relevant_appointments(request.trainer_id, request.start_time, request.end_time)
            .iter()
            .any(|app| app.start_time == request.start_time);
        if taken {
            return Err(ScheduleError::SlotTaken);
        }

        self.next_id += 1;
        let appointment = Appointment {
            id: self.next_id,
            start_time: request.start_time,
            end_time: request.end_time,
            user_id: request.user_id,
            trainer_id: request.trainer_id,
        };
        self.appointments.push(appointment.clone());

        Ok(appointment)
    }

    /// Membership check against the fixed trainer set.
    pub fn is_known_trainer(&self, trainer_id: i64) -> bool {
        self.trainer_ids.contains(&trainer_id)
    }

    /// All stored appointments, in booking order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Number of distinct trainers known to the calendar.
    pub fn trainer_count(&self) -> usize {
        self.trainer_ids.len()
    }

    // Appointments for one trainer intersecting [start, end).
    fn relevant_appointments(
        &self,
        trainer_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|app| app.trainer_id == trainer_id && app.start_time < end && app.end_time > start)
            .collect()
    }
}

/// Validates a requested time window against the slot grid.
///
/// Checks run in a fixed order and short-circuit: minute alignment
/// (:00/:30), then strict ordering of start before end, then the business
/// hours of both endpoints.
pub fn validate_window(start: NaiveDateTime, end: NaiveDateTime) -> ScheduleResult<()> {
    if start.minute() % 30 != 0 || end.minute() % 30 != 0 {
        return Err(ScheduleError::InvalidAlignment);
    }

    if start >= end {
        return Err(ScheduleError::InvalidOrder);
    }

    if !business_hours(start.hour()) || !business_hours(end.hour()) {
        return Err(ScheduleError::OutOfHours);
    }

    Ok(())
}

fn business_hours(hour: u32) -> bool {
    (OPENING_HOUR..=CLOSING_HOUR).contains(&hour)
}
