use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;
use trainbook_core::models::appointment::Appointment;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open appointments file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error decoding appointments json: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Reads the seed file and returns the stored appointments in file order.
///
/// The file holds a single JSON array of appointment records
/// (`id`, `started_at`, `ended_at`, optional `user_id`, `trainer_id`).
/// Any structural problem is fatal; there is no partial load.
pub fn load_appointments(path: impl AsRef<Path>) -> Result<Vec<Appointment>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let appointments: Vec<Appointment> = serde_json::from_reader(BufReader::new(file))?;

    info!(
        path = %path.display(),
        count = appointments.len(),
        "loaded appointment seed file"
    );

    Ok(appointments)
}
