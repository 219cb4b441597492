// --- File: crates/solarops_calendar/src/doc.rs ---
#![cfg(feature = "openapi")]

use crate::models::{
    Appointment, AvailableSlotsResponse, BookAppointmentRequest, BookingResponse,
    DayAppointmentsResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_day_appointments_handler,
        crate::handlers::get_available_slots_handler,
        crate::handlers::get_bulk_available_slots_handler,
        crate::handlers::book_appointment_handler
    ),
    components(
        schemas(
            Appointment,
            AvailableSlotsResponse,
            BookAppointmentRequest,
            BookingResponse,
            DayAppointmentsResponse
        )
    ),
    tags(
        (name = "Calendar", description = "Solar panel cleaning appointments")
    ),
    servers(
        (url = "/api", description = "Solar Detailing customer API")
    )
)]
pub struct CalendarApiDoc;
