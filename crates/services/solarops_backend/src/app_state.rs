// --- File: crates/services/solarops_backend/src/app_state.rs ---
use solarops_common::SolarOpsError;
use solarops_config::AppConfig;
use std::sync::Arc;

#[cfg(feature = "calendar")]
use solarops_calendar::{CalendarService, CalendarSettings};

/// Everything the router needs, built once at start-up.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Present whenever the feature is compiled in; the runtime flag only
    /// decides whether its endpoints answer or return 503.
    #[cfg(feature = "calendar")]
    pub calendar: Arc<CalendarService>,
}

impl AppState {
    /// Builds the state from configuration. Invalid calendar settings fail here
    /// rather than on the first request.
    pub fn new(config: Arc<AppConfig>) -> Result<Self, SolarOpsError> {
        #[cfg(feature = "calendar")]
        let calendar = {
            let calendar_config = config.calendar.clone().unwrap_or_default();
            let settings = CalendarSettings::from_config(&calendar_config)?;
            tracing::info!(
                "Calendar store at {} ({})",
                settings.store_path.display(),
                settings.time_zone
            );
            Arc::new(CalendarService::with_json_store(settings))
        };

        Ok(Self {
            config,
            #[cfg(feature = "calendar")]
            calendar,
        })
    }

    /// State around an already built calendar service.
    #[cfg(feature = "calendar")]
    pub fn with_calendar(config: Arc<AppConfig>, calendar: Arc<CalendarService>) -> Self {
        Self { config, calendar }
    }
}
