// --- File: crates/solarops_calendar/src/lib.rs ---
pub mod clock;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod routes;
pub mod settings;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{BookingRejection, CalendarError};
pub use logic::CalendarService;
pub use models::{Appointment, BookingOutcome};
pub use settings::CalendarSettings;
pub use store::{AppointmentStore, JsonFileStore};
