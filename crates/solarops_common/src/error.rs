// --- File: crates/solarops_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all Solar Detailing crates.
///
/// Feature crates keep their own error enums and convert into this one at the
/// HTTP boundary by implementing `From<TheirError> for SolarOpsError`.
#[derive(Error, Debug)]
pub enum SolarOpsError {
    /// Error occurred while parsing client input or stored data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A business rule rejected the request
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred reading or writing persisted data
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Error occurred due to a conflict (e.g., slot already booked)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// The feature is compiled in but switched off in the configuration
    #[error("Service unavailable: {0}")]
    UnavailableError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for SolarOpsError {
    fn status_code(&self) -> u16 {
        match self {
            SolarOpsError::ParseError(_) => 400,
            SolarOpsError::ConfigError(_) => 500,
            SolarOpsError::ValidationError(_) => 400,
            SolarOpsError::StorageError(_) => 500,
            SolarOpsError::ConflictError(_) => 409,
            SolarOpsError::UnavailableError(_) => 503,
            SolarOpsError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, SolarOpsError>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, SolarOpsError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| SolarOpsError::InternalError(format!("{}: {}", context, error)))
    }
}

impl From<serde_json::Error> for SolarOpsError {
    fn from(err: serde_json::Error) -> Self {
        SolarOpsError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for SolarOpsError {
    fn from(err: std::io::Error) -> Self {
        SolarOpsError::StorageError(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> SolarOpsError {
    SolarOpsError::ValidationError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> SolarOpsError {
    SolarOpsError::ConflictError(message.to_string())
}

pub fn storage_error<T: fmt::Display>(message: T) -> SolarOpsError {
    SolarOpsError::StorageError(message.to_string())
}
