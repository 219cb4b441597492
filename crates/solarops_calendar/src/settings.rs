// --- File: crates/solarops_calendar/src/settings.rs ---
use crate::error::CalendarError;
use chrono::Duration;
use chrono_tz::Tz;
use solarops_config::{CalendarConfig, CorruptStorePolicy};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_TIME_ZONE: Tz = Tz::America__Los_Angeles;
pub const DEFAULT_BUSINESS_START_HOUR: u32 = 7;
/// Exclusive: the last slot starts at 20:00.
pub const DEFAULT_BUSINESS_END_HOUR: u32 = 21;
pub const DEFAULT_APPOINTMENT_DURATION_HOURS: i64 = 1;
pub const DEFAULT_STORE_PATH: &str = "calendar.json";
pub const DEFAULT_MAX_DAYS_IN_ADVANCE: u32 = 60;

/// Resolved calendar parameters. Build with [`CalendarSettings::from_config`]
/// to get validation; `Default` gives the stock business setup.
#[derive(Debug, Clone)]
pub struct CalendarSettings {
    pub time_zone: Tz,
    pub business_start_hour: u32,
    pub business_end_hour: u32,
    pub appointment_duration: Duration,
    pub store_path: PathBuf,
    pub on_corrupt: CorruptStorePolicy,
    pub max_days_in_advance: u32,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE,
            business_start_hour: DEFAULT_BUSINESS_START_HOUR,
            business_end_hour: DEFAULT_BUSINESS_END_HOUR,
            appointment_duration: Duration::hours(DEFAULT_APPOINTMENT_DURATION_HOURS),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            on_corrupt: CorruptStorePolicy::default(),
            max_days_in_advance: DEFAULT_MAX_DAYS_IN_ADVANCE,
        }
    }
}

impl CalendarSettings {
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        let time_zone = match config.time_zone.as_deref() {
            Some(name) => Tz::from_str(name)
                .map_err(|_| CalendarError::Config(format!("unknown time zone '{}'", name)))?,
            None => DEFAULT_TIME_ZONE,
        };

        let business_start_hour = config
            .business_start_hour
            .unwrap_or(DEFAULT_BUSINESS_START_HOUR);
        let business_end_hour = config.business_end_hour.unwrap_or(DEFAULT_BUSINESS_END_HOUR);
        if business_end_hour > 24 || business_start_hour >= business_end_hour {
            return Err(CalendarError::Config(format!(
                "business hours {}..{} are not a valid daily window",
                business_start_hour, business_end_hour
            )));
        }

        let duration_hours = config
            .appointment_duration_hours
            .unwrap_or(DEFAULT_APPOINTMENT_DURATION_HOURS);
        if duration_hours < 1 {
            return Err(CalendarError::Config(format!(
                "appointment_duration_hours must be at least 1, got {}",
                duration_hours
            )));
        }

        let max_days_in_advance = config
            .max_days_in_advance
            .unwrap_or(DEFAULT_MAX_DAYS_IN_ADVANCE);
        if max_days_in_advance == 0 {
            return Err(CalendarError::Config(
                "max_days_in_advance must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            time_zone,
            business_start_hour,
            business_end_hour,
            appointment_duration: Duration::hours(duration_hours),
            store_path: config
                .store_path
                .as_deref()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
            on_corrupt: config.on_corrupt,
            max_days_in_advance,
        })
    }

    /// Whether a business-local hour may start an appointment.
    pub fn is_business_hour(&self, hour: u32) -> bool {
        (self.business_start_hour..self.business_end_hour).contains(&hour)
    }
}
