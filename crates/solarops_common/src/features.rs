//! Runtime feature flag handling.
//!
//! Feature crates are compiled in through cargo features and switched on or
//! off at runtime through `use_*` flags in the configuration. A feature is
//! live only when its flag is set *and* its configuration section is present.

use solarops_config::AppConfig;

/// Check if a feature is enabled at runtime based on configuration.
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the calendar feature is enabled at runtime.
pub fn is_calendar_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_calendar, config.calendar.as_ref())
}
