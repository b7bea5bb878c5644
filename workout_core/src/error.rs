//! Error types for the workout_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for workout_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Type code not present in the factory table
    #[error("Invalid workout type: {0}")]
    InvalidWorkoutType(String),

    /// Reading list does not match the variant's arity
    #[error("Invalid reading count for {code}: expected {expected}, got {actual}")]
    InvalidReadingCount {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// A reading violates a variant invariant (e.g. zero duration)
    #[error("Invalid reading: {0}")]
    InvalidReading(String),

    /// Malformed package input file
    #[error("Input error: {0}")]
    Input(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
