// --- File: crates/solarops_calendar/src/store.rs ---
//! Persistence for appointments.
//!
//! The whole collection lives in one JSON array. Every write replaces the
//! file; there is no append log and no atomic rename.

use crate::error::CalendarError;
use crate::models::Appointment;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use solarops_config::CorruptStorePolicy;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Durable collection of appointments.
#[cfg_attr(test, mockall::automock)]
pub trait AppointmentStore: Send + Sync {
    /// Returns every stored appointment in file order.
    fn load(&self) -> Result<Vec<Appointment>, CalendarError>;

    /// Replaces the stored collection with `appointments`.
    fn save(&self, appointments: &[Appointment]) -> Result<(), CalendarError>;
}

/// [`AppointmentStore`] backed by a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    on_corrupt: CorruptStorePolicy,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, on_corrupt: CorruptStorePolicy) -> Self {
        Self {
            path: path.into(),
            on_corrupt,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn recover(&self, reason: String) -> Result<Vec<Appointment>, CalendarError> {
        match self.on_corrupt {
            CorruptStorePolicy::TreatAsEmpty => {
                warn!(
                    "Appointment store {} is unreadable ({}); treating it as empty",
                    self.path.display(),
                    reason
                );
                Ok(Vec::new())
            }
            CorruptStorePolicy::Fail => Err(CalendarError::StorageCorrupt {
                path: self.path.clone(),
                reason,
            }),
        }
    }

    fn write_error(&self, source: std::io::Error) -> CalendarError {
        CalendarError::StorageWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl AppointmentStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Appointment>, CalendarError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No appointment store at {} yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return self.recover(e.to_string()),
        };

        match serde_json::from_str::<Vec<Appointment>>(&contents) {
            Ok(appointments) => Ok(appointments),
            Err(e) => self.recover(e.to_string()),
        }
    }

    fn save(&self, appointments: &[Appointment]) -> Result<(), CalendarError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }

        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        appointments.serialize(&mut serializer)?;

        fs::write(&self.path, buffer).map_err(|e| self.write_error(e))?;
        debug!(
            "Saved {} appointments to {}",
            appointments.len(),
            self.path.display()
        );
        Ok(())
    }
}
