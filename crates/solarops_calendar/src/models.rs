// --- File: crates/solarops_calendar/src/models.rs ---
use crate::error::BookingRejection;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A booked appointment as persisted in the store file.
///
/// All timestamps carry the business-local offset that was in effect when
/// the appointment was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Appointment {
    #[cfg_attr(feature = "openapi", schema(example = "ghl-contact-8f2a"))]
    pub contact_id: String,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2024-06-10T14:00:00-07:00")
    )]
    pub start_time: DateTime<FixedOffset>,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2024-06-10T15:00:00-07:00")
    )]
    pub end_time: DateTime<FixedOffset>,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2024-06-10T12:00:00.123456-07:00")
    )]
    pub booked_at: DateTime<FixedOffset>,
}

/// Result of a booking attempt that did not hit a storage failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked {
        appointment: Appointment,
        message: String,
    },
    Rejected(BookingRejection),
}

impl BookingOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BookingOutcome::Booked { .. })
    }

    pub fn message(&self) -> String {
        match self {
            BookingOutcome::Booked { message, .. } => message.clone(),
            BookingOutcome::Rejected(rejection) => rejection.to_string(),
        }
    }

    pub fn rejection(&self) -> Option<BookingRejection> {
        match self {
            BookingOutcome::Booked { .. } => None,
            BookingOutcome::Rejected(rejection) => Some(*rejection),
        }
    }

    /// The `(success, message)` pair callers of the booking API expect.
    pub fn into_parts(self) -> (bool, String) {
        let message = self.message();
        (self.is_success(), message)
    }
}

// --- HTTP payloads ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookAppointmentRequest {
    #[cfg_attr(feature = "openapi", schema(example = "ghl-contact-8f2a"))]
    pub contact_id: String,
    /// ISO 8601; without an offset the time is read as business-local
    #[cfg_attr(feature = "openapi", schema(example = "2024-06-10T14:00:00-07:00"))]
    pub start_time_iso: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Appointment>,
}

impl From<BookingOutcome> for BookingResponse {
    fn from(outcome: BookingOutcome) -> Self {
        match outcome {
            BookingOutcome::Booked {
                appointment,
                message,
            } => BookingResponse {
                success: true,
                message,
                appointment: Some(appointment),
            },
            BookingOutcome::Rejected(rejection) => BookingResponse {
                success: false,
                message: rejection.to_string(),
                appointment: None,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DayAppointmentsResponse {
    #[cfg_attr(feature = "openapi", schema(format = Date, example = "2024-06-10"))]
    pub date: String,
    pub appointments: Vec<Appointment>,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailableSlotsResponse {
    #[cfg_attr(feature = "openapi", schema(format = Date, example = "2024-06-10"))]
    pub date: String,
    /// Slot start times, ISO 8601 with the business-local offset
    pub available_slots: Vec<String>,
}
