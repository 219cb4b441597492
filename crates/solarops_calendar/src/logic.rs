// --- File: crates/solarops_calendar/src/logic.rs ---
use crate::clock::{Clock, SystemClock};
use crate::error::{BookingRejection, CalendarError};
use crate::models::{Appointment, BookingOutcome};
use crate::settings::CalendarSettings;
use crate::store::{AppointmentStore, JsonFileStore};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Date-time layouts with an explicit offset that RFC 3339 parsing does not cover.
const OFFSET_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Local date-time layouts, read in the business timezone.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// --- Slot Calculation ---

/// Hour-aligned start times from `start_hour` (inclusive) to `end_hour`
/// (exclusive) on `date`, in `time_zone`.
///
/// Local hours that do not exist on that day (spring-forward gap) are skipped;
/// repeated hours (fall-back) resolve to their first occurrence.
pub fn business_day_slots(
    date: NaiveDate,
    time_zone: Tz,
    start_hour: u32,
    end_hour: u32,
) -> Vec<DateTime<Tz>> {
    (start_hour..end_hour)
        .filter_map(|hour| date.and_hms_opt(hour, 0, 0))
        .filter_map(|naive| time_zone.from_local_datetime(&naive).earliest())
        .collect()
}

/// Calculates the bookable slots on `date`.
///
/// A candidate survives when no appointment in `booked` starts at the same
/// instant and its own start is strictly after `now`. The result is ascending.
pub fn calculate_available_slots(
    date: NaiveDate,
    settings: &CalendarSettings,
    booked: &[Appointment],
    now: DateTime<Utc>,
) -> Vec<DateTime<Tz>> {
    let booked_starts: BTreeSet<DateTime<Utc>> = booked
        .iter()
        .map(|appointment| appointment.start_time.with_timezone(&Utc))
        .collect();

    business_day_slots(
        date,
        settings.time_zone,
        settings.business_start_hour,
        settings.business_end_hour,
    )
    .into_iter()
    .filter(|slot| {
        let instant = slot.with_timezone(&Utc);
        instant > now && !booked_starts.contains(&instant)
    })
    .collect()
}

/// Parses a requested start time and normalizes it to `time_zone`.
///
/// Accepts RFC 3339 (`2024-06-10T14:00:00-07:00`, `2024-06-10T21:00:00Z`),
/// a few ISO 8601 variants with an offset, and local date-times or plain
/// dates, which are read as wall-clock time in `time_zone`.
pub fn parse_requested_start(input: &str, time_zone: Tz) -> Option<DateTime<Tz>> {
    let input = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&time_zone));
    }
    // A trailing `Z` is UTC; the offset layouts only understand numeric offsets
    let with_offset = match input.strip_suffix(['Z', 'z']) {
        Some(stripped) => format!("{}+00:00", stripped),
        None => input.to_string(),
    };
    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&with_offset, format).ok())
    {
        return Some(parsed.with_timezone(&time_zone));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    time_zone.from_local_datetime(&naive).earliest()
}

// --- Calendar Service ---

/// Availability and booking on top of an [`AppointmentStore`].
///
/// One instance is built per process and shared behind an `Arc`. Bookings
/// are serialized through an internal lock so the load, collision check and
/// save of one request cannot interleave with another's.
pub struct CalendarService {
    settings: CalendarSettings,
    store: Arc<dyn AppointmentStore>,
    clock: Arc<dyn Clock>,
    booking_lock: Mutex<()>,
}

impl CalendarService {
    pub fn new(
        settings: CalendarSettings,
        store: Arc<dyn AppointmentStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings,
            store,
            clock,
            booking_lock: Mutex::new(()),
        }
    }

    /// Service backed by the JSON file named in `settings` and the system clock.
    pub fn with_json_store(settings: CalendarSettings) -> Self {
        let store = JsonFileStore::new(settings.store_path.clone(), settings.on_corrupt);
        Self::new(settings, Arc::new(store), Arc::new(SystemClock))
    }

    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    /// Current time in the business timezone.
    pub fn now_local(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.settings.time_zone)
    }

    /// Current calendar date in the business timezone.
    pub fn today(&self) -> NaiveDate {
        self.now_local().date_naive()
    }

    /// Appointments whose start falls on `date` in business-local time, earliest first.
    pub fn appointments_for_day(&self, date: NaiveDate) -> Result<Vec<Appointment>, CalendarError> {
        let appointments = self.store.load()?;
        Ok(self.appointments_on(&appointments, date))
    }

    /// Bookable slot start times on `date` as ISO 8601 strings, ascending.
    pub fn available_slots(&self, date: NaiveDate) -> Result<Vec<String>, CalendarError> {
        let appointments = self.store.load()?;
        Ok(self.slots_on(&appointments, date, self.clock.now()))
    }

    /// Available slots for each of the next `days_in_advance` days, starting today.
    ///
    /// Keys are `YYYY-MM-DD`. The store is read once and every day is judged
    /// against the same "now".
    pub fn bulk_available_slots(
        &self,
        days_in_advance: u32,
    ) -> Result<BTreeMap<String, Vec<String>>, CalendarError> {
        let mut all_available_slots = BTreeMap::new();
        if days_in_advance == 0 {
            return Ok(all_available_slots);
        }

        let appointments = self.store.load()?;
        let now = self.clock.now();
        let today = now.with_timezone(&self.settings.time_zone).date_naive();

        for offset in 0..days_in_advance {
            let Some(date) = today.checked_add_days(Days::new(u64::from(offset))) else {
                break;
            };
            all_available_slots.insert(
                date.format("%Y-%m-%d").to_string(),
                self.slots_on(&appointments, date, now),
            );
        }

        debug!(
            "Computed availability for {} days starting {}",
            all_available_slots.len(),
            today
        );
        Ok(all_available_slots)
    }

    /// Validates and books `start_time_iso` for `contact_id`.
    ///
    /// Rule violations come back as [`BookingOutcome::Rejected`]; only storage
    /// failures are returned as `Err`.
    pub fn book_appointment(
        &self,
        contact_id: &str,
        start_time_iso: &str,
    ) -> Result<BookingOutcome, CalendarError> {
        let Some(start_time) = parse_requested_start(start_time_iso, self.settings.time_zone)
        else {
            return Ok(self.reject(contact_id, start_time_iso, BookingRejection::InvalidFormat));
        };

        if let Some(rejection) = self.check_slot_rules(&start_time) {
            return Ok(self.reject(contact_id, start_time_iso, rejection));
        }

        let _guard = self
            .booking_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut appointments = self.store.load()?;
        if appointments
            .iter()
            .any(|appointment| appointment.start_time == start_time)
        {
            return Ok(self.reject(contact_id, start_time_iso, BookingRejection::SlotTaken));
        }

        let appointment = Appointment {
            contact_id: contact_id.to_string(),
            start_time: start_time.fixed_offset(),
            end_time: (start_time + self.settings.appointment_duration).fixed_offset(),
            booked_at: self.now_local().fixed_offset(),
        };
        appointments.push(appointment.clone());
        self.store.save(&appointments)?;

        let message = format!(
            "Appointment successfully booked for {} at {}.",
            contact_id,
            start_time.format("%Y-%m-%d %I:%M %p %Z")
        );
        info!("{}", message);

        Ok(BookingOutcome::Booked {
            appointment,
            message,
        })
    }

    fn check_slot_rules(&self, start_time: &DateTime<Tz>) -> Option<BookingRejection> {
        if start_time.minute() != 0 || start_time.second() != 0 || start_time.nanosecond() != 0 {
            return Some(BookingRejection::MisalignedSlot);
        }
        if !self.settings.is_business_hour(start_time.hour()) {
            return Some(BookingRejection::OutsideBusinessHours);
        }
        if start_time.with_timezone(&Utc) <= self.clock.now() {
            return Some(BookingRejection::PastTime);
        }
        None
    }

    fn reject(
        &self,
        contact_id: &str,
        start_time_iso: &str,
        rejection: BookingRejection,
    ) -> BookingOutcome {
        info!(
            "Rejected booking for {} at '{}': {:?}",
            contact_id, start_time_iso, rejection
        );
        BookingOutcome::Rejected(rejection)
    }

    fn appointments_on(&self, appointments: &[Appointment], date: NaiveDate) -> Vec<Appointment> {
        let time_zone = self.settings.time_zone;
        let mut daily: Vec<Appointment> = appointments
            .iter()
            .filter(|appointment| {
                appointment.start_time.with_timezone(&time_zone).date_naive() == date
            })
            .cloned()
            .collect();
        daily.sort_by_key(|appointment| appointment.start_time);
        daily
    }

    fn slots_on(
        &self,
        appointments: &[Appointment],
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Vec<String> {
        let daily = self.appointments_on(appointments, date);
        calculate_available_slots(date, &self.settings, &daily, now)
            .iter()
            .map(|slot| slot.to_rfc3339())
            .collect()
    }
}
