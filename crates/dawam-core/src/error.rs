//! Core error types for dawam-core.
//!
//! This module defines the error hierarchy using thiserror. Note what is
//! deliberately *not* an error: an absent configuration file resolves to
//! defaults, a denied notification permission is a returned value, and a
//! failed geolocation lookup maps to the fallback country.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dawam-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Geolocation-related errors
    #[error("Geolocation error: {0}")]
    Geo(#[from] GeoError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Stored row could not be decoded into a note
    #[error("Corrupt note record: {0}")]
    CorruptRecord(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Geolocation-specific errors.
///
/// These never escape [`crate::geo::detect_or_default`]; they exist so the
/// fallback path can log what actually went wrong.
#[derive(Error, Debug)]
pub enum GeoError {
    /// HTTP request failed
    #[error("Geolocation request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response carried no country code
    #[error("Geolocation response carried no country code")]
    MissingCountryCode,

    /// Country code is not in the compiled country table
    #[error("Unsupported country code: {0}")]
    UnsupportedCountry(String),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
