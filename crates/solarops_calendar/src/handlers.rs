// --- File: crates/solarops_calendar/src/handlers.rs ---
use crate::error::CalendarError;
use crate::logic::CalendarService;
use crate::models::{
    AvailableSlotsResponse, BookAppointmentRequest, BookingOutcome, BookingResponse,
    DayAppointmentsResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::NaiveDate;
use solarops_common::{is_calendar_enabled, map_json_error, validation_error, SolarOpsError};
use solarops_config::AppConfig;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::error;

// Shared state for the calendar handlers
#[derive(Clone)]
pub struct CalendarState {
    pub config: Arc<AppConfig>,
    pub calendar: Arc<CalendarService>,
}

fn ensure_enabled(state: &CalendarState) -> Result<(), Response> {
    if is_calendar_enabled(&state.config) {
        Ok(())
    } else {
        Err(SolarOpsError::UnavailableError("Calendar service is disabled.".to_string())
            .into_response())
    }
}

fn parse_day(day: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| {
        validation_error("Invalid date format. Please use YYYY-MM-DD.").into_response()
    })
}

/// Runs a calendar operation off the async executor; store access is blocking file I/O.
async fn run_blocking<T, F>(calendar: Arc<CalendarService>, f: F) -> Result<T, CalendarError>
where
    T: Send + 'static,
    F: FnOnce(&CalendarService) -> Result<T, CalendarError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&calendar))
        .await
        .map_err(|e| CalendarError::Worker(e.to_string()))?
}

/// Handler listing the appointments booked on one day.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/appointments/{day}",
    params(("day" = String, Path, description = "Date in YYYY-MM-DD format", example = "2024-06-10")),
    responses(
        (status = 200, description = "Appointments on that day, earliest first", body = DayAppointmentsResponse),
        (status = 400, description = "Invalid date format"),
        (status = 503, description = "Calendar disabled")
    ),
    tag = "Calendar"
))]
pub async fn get_day_appointments_handler(
    State(state): State<Arc<CalendarState>>,
    Path(day): Path<String>,
) -> Result<Json<DayAppointmentsResponse>, Response> {
    ensure_enabled(&state)?;
    let date = parse_day(&day)?;

    let result = run_blocking(state.calendar.clone(), move |calendar| {
        calendar.appointments_for_day(date)
    })
    .await
    .map(|appointments| DayAppointmentsResponse {
        date: date.to_string(),
        appointments,
    });
    map_json_error(result, SolarOpsError::from)
}

/// Handler returning the open 1-hour slots of one day.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/appointments/available/{day}",
    params(("day" = String, Path, description = "Date in YYYY-MM-DD format", example = "2024-06-10")),
    responses(
        (status = 200, description = "Open slots on that day", body = AvailableSlotsResponse),
        (status = 400, description = "Invalid date format"),
        (status = 503, description = "Calendar disabled")
    ),
    tag = "Calendar"
))]
pub async fn get_available_slots_handler(
    State(state): State<Arc<CalendarState>>,
    Path(day): Path<String>,
) -> Result<Json<AvailableSlotsResponse>, Response> {
    ensure_enabled(&state)?;
    let date = parse_day(&day)?;

    let result = run_blocking(state.calendar.clone(), move |calendar| {
        calendar.available_slots(date)
    })
    .await
    .map(|available_slots| AvailableSlotsResponse {
        date: date.to_string(),
        available_slots,
    });
    map_json_error(result, SolarOpsError::from)
}

/// Handler returning open slots for the next `days_in_advance` days.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/appointments/available/bulk/{days_in_advance}",
    params(("days_in_advance" = i64, Path, description = "Number of days starting today", example = 7)),
    responses(
        (status = 200, description = "Map of YYYY-MM-DD to open slots", body = BTreeMap<String, Vec<String>>),
        (status = 400, description = "Days in advance out of range"),
        (status = 503, description = "Calendar disabled")
    ),
    tag = "Calendar"
))]
pub async fn get_bulk_available_slots_handler(
    State(state): State<Arc<CalendarState>>,
    Path(days_in_advance): Path<i64>,
) -> Result<Json<BTreeMap<String, Vec<String>>>, Response> {
    ensure_enabled(&state)?;

    let max_days = state.calendar.settings().max_days_in_advance;
    let days = match u32::try_from(days_in_advance) {
        Ok(days) if (1..=max_days).contains(&days) => days,
        _ => {
            return Err(validation_error(format!(
                "Days in advance must be between 1 and {}.",
                max_days
            ))
            .into_response())
        }
    };

    let result = run_blocking(state.calendar.clone(), move |calendar| {
        calendar.bulk_available_slots(days)
    })
    .await;
    map_json_error(result, SolarOpsError::from)
}

/// Handler to book a slot for a contact.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/appointments/book",
    request_body = BookAppointmentRequest,
    responses(
        (status = 200, description = "Appointment booked", body = BookingResponse),
        (status = 400, description = "Malformed, misaligned, out-of-hours or past start time", body = BookingResponse),
        (status = 409, description = "Slot already booked", body = BookingResponse),
        (status = 500, description = "Appointment store could not be written"),
        (status = 503, description = "Calendar disabled")
    ),
    tag = "Calendar"
))]
pub async fn book_appointment_handler(
    State(state): State<Arc<CalendarState>>,
    Json(payload): Json<BookAppointmentRequest>,
) -> Result<Json<BookingResponse>, Response> {
    ensure_enabled(&state)?;

    let contact_id = payload.contact_id.clone();
    let outcome = run_blocking(state.calendar.clone(), move |calendar| {
        calendar.book_appointment(&payload.contact_id, &payload.start_time_iso)
    })
    .await
    .map_err(|e| {
        error!("Booking for {} failed: {}", contact_id, e);
        SolarOpsError::from(e).into_response()
    })?;

    match outcome {
        BookingOutcome::Booked { .. } => Ok(Json(BookingResponse::from(outcome))),
        BookingOutcome::Rejected(rejection) => {
            let status = StatusCode::from_u16(rejection.status_code())
                .unwrap_or(StatusCode::BAD_REQUEST);
            Err((status, Json(BookingResponse::from(outcome))).into_response())
        }
    }
}
