pub mod loader;

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use trainbook_core::SlotCalendar;

pub use loader::{LoadError, load_appointments};

/// Shared handle to the one in-memory calendar.
///
/// Queries take the read guard; booking takes the write guard around the
/// whole validate-then-append sequence, which is what keeps two racing
/// bookings for the same slot from both succeeding.
pub type SharedCalendar = Arc<RwLock<SlotCalendar>>;

/// Loads the seed file and wraps the resulting calendar for sharing.
pub fn open_calendar(path: impl AsRef<Path>) -> Result<SharedCalendar, LoadError> {
    let appointments = load_appointments(path)?;
    let calendar = SlotCalendar::new(appointments);
    info!(trainers = calendar.trainer_count(), "calendar initialized");

    Ok(Arc::new(RwLock::new(calendar)))
}
