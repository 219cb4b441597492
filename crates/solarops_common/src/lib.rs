// --- File: crates/solarops_common/src/lib.rs ---

pub mod error; // Error handling
pub mod features; // Runtime feature flags
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities

pub use error::{
    conflict, storage_error, validation_error, Context,
    HttpStatusCode, SolarOpsError,
};

pub use http::{map_json_error, IntoHttpResponse};

pub use logging::{init_from_config, log_error, log_result};

pub use features::{is_calendar_enabled, is_feature_enabled};
