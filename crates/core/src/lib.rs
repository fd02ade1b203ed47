pub mod calendar;
pub mod errors;
pub mod models;

pub use calendar::SlotCalendar;
