// --- File: crates/solarops_calendar/src/error.rs ---
use solarops_common::SolarOpsError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that escape the calendar core.
///
/// Booking rule violations are not errors; they come back as
/// [`BookingRejection`] inside a successful result.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Appointment store {path} is unreadable: {reason}")]
    StorageCorrupt { path: PathBuf, reason: String },
    #[error("Failed to write appointment store {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize appointments: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid calendar configuration: {0}")]
    Config(String),
    #[error("Calendar worker failed: {0}")]
    Worker(String),
}

/// Why a booking request was refused. Each kind carries its own client-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRejection {
    #[error("Invalid ISO date format provided.")]
    InvalidFormat,
    #[error("Appointments can only be booked on the hour.")]
    MisalignedSlot,
    #[error("The requested time is outside of business hours.")]
    OutsideBusinessHours,
    #[error("Cannot book appointments in the past.")]
    PastTime,
    #[error("The requested time slot is not available.")]
    SlotTaken,
}

impl BookingRejection {
    /// HTTP status for this rejection: 409 for a taken slot, 400 for everything else.
    pub fn status_code(&self) -> u16 {
        match self {
            BookingRejection::SlotTaken => 409,
            _ => 400,
        }
    }
}

impl From<CalendarError> for SolarOpsError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::StorageCorrupt { .. } | CalendarError::StorageWrite { .. } => {
                SolarOpsError::StorageError(err.to_string())
            }
            CalendarError::Serialization(_) => SolarOpsError::StorageError(err.to_string()),
            CalendarError::Config(msg) => SolarOpsError::ConfigError(msg),
            CalendarError::Worker(msg) => SolarOpsError::InternalError(msg),
        }
    }
}
