// --- File: crates/solarops_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed to call the API with credentials
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// What the appointment store does when its file exists but cannot be read or parsed.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CorruptStorePolicy {
    /// Log a warning and behave as if no appointments were stored.
    #[default]
    TreatAsEmpty,
    /// Surface the problem to the caller as a storage error.
    Fail,
}

// --- Calendar Config ---
// Every field is optional; the calendar crate falls back to its defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CalendarConfig {
    /// IANA timezone name, e.g. "America/Los_Angeles"
    pub time_zone: Option<String>,
    /// First bookable hour (inclusive), business-local
    pub business_start_hour: Option<u32>,
    /// Closing hour (exclusive), business-local
    pub business_end_hour: Option<u32>,
    pub appointment_duration_hours: Option<i64>,
    /// Path of the JSON file holding all appointments
    pub store_path: Option<String>,
    #[serde(default)]
    pub on_corrupt: CorruptStorePolicy,
    /// Upper bound accepted by the bulk availability endpoint
    pub max_days_in_advance: Option<u32>,
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoggingConfig {
    /// "trace", "debug", "info", "warn" or "error"
    pub level: Option<String>,
    /// When set, logs are additionally written to a daily rolling file here.
    pub directory: Option<String>,
    pub file_prefix: Option<String>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_calendar: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub calendar: Option<CalendarConfig>,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}
