//! Unified application error type.
//! Catalog, resolver, routing and CLI code all return AppError so the
//! calculator can degrade to a "contact us" outcome instead of crashing.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Audit log database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    // ---------------------------
    // Drive-time estimation
    // ---------------------------
    #[error("Unable to locate postcode: {0}")]
    Geocoding(String),

    #[error("Unable to find a route: {0}")]
    Routing(String),

    // ---------------------------
    // Catalog / config errors
    // ---------------------------
    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// True for failures of the drive-time estimate itself.
    /// These are retryable and shown to users as "please contact us",
    /// never as a zone.
    pub fn is_contact_us(&self) -> bool {
        matches!(self, AppError::Geocoding(_) | AppError::Routing(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
