// --- File: crates/solarops_calendar/src/routes.rs ---

use crate::error::CalendarError;
use crate::handlers::{
    book_appointment_handler, get_available_slots_handler, get_bulk_available_slots_handler,
    get_day_appointments_handler, CalendarState,
};
use crate::logic::CalendarService;
use crate::settings::CalendarSettings;
use axum::{
    routing::{get, post},
    Router,
};
use solarops_config::AppConfig;
use std::sync::Arc;

/// Creates the router for the calendar endpoints around an existing service.
pub fn routes(config: Arc<AppConfig>, calendar: Arc<CalendarService>) -> Router {
    let calendar_state = Arc::new(CalendarState { config, calendar });

    Router::new()
        .route("/appointments/book", post(book_appointment_handler))
        .route("/appointments/{day}", get(get_day_appointments_handler))
        .route(
            "/appointments/available/{day}",
            get(get_available_slots_handler),
        )
        .route(
            "/appointments/available/bulk/{days_in_advance}",
            get(get_bulk_available_slots_handler),
        )
        .with_state(calendar_state)
}

/// Builds the calendar service described by `config.calendar` (defaults when
/// absent) and returns its router.
pub fn routes_from_config(config: Arc<AppConfig>) -> Result<Router, CalendarError> {
    let settings = CalendarSettings::from_config(&config.calendar.clone().unwrap_or_default())?;
    let calendar = Arc::new(CalendarService::with_json_store(settings));
    Ok(routes(config, calendar))
}
