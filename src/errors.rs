/*!
 * Error types for the subgrep application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing subtitle files
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Error when a timing line cannot be parsed
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    /// Error when an entry's end time does not follow its start time
    #[error("Invalid time range: end time {end_ms}ms <= start time {start_ms}ms")]
    InvalidTimeRange {
        /// Start of the entry in milliseconds
        start_ms: u64,
        /// End of the entry in milliseconds
        end_ms: u64,
    },

    /// Error when an entry has no text
    #[error("Empty subtitle text for entry {0}")]
    EmptyText(usize),

    /// Error when a file yields no usable entries at all
    #[error("No valid subtitle entries were found in the SRT content")]
    NoEntries,
}

/// Errors that can occur while emitting the CSV report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error when the video URL template lacks the id placeholder
    #[error("Video URL template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),

    /// Error when the resolved video URL cannot be parsed
    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),

    /// Error when a subtitle timestamp cannot be expressed as a time of day
    #[error("Timestamp {0}ms is beyond 24 hours and cannot be written as a time of day")]
    TimeOutOfRange(u64),
}

/// Errors that can occur while validating the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when no search words are configured
    #[error("No search words configured - add at least one entry to search_words")]
    NoSearchWords,

    /// Error when the fuzzy threshold is outside the 0-100 range
    #[error("Fuzzy threshold {0} is out of range (expected 0-100)")]
    ThresholdOutOfRange(u8),

    /// Error when no scan languages are configured
    #[error("No languages configured - add at least one ISO 639-1 code to languages")]
    NoLanguages,

    /// Error when the configured subtitle directory does not exist
    #[error("Subtitle directory does not exist: {0}")]
    DirectoryNotFound(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle parsing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from report emission
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Error from configuration validation
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
