//! Error types for ffcal.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur in ffcal operations.
#[derive(Error, Debug)]
pub enum FfcalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ffcal operations.
pub type FfcalResult<T> = Result<T, FfcalError>;

/// The calendar document for a day could not be obtained.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Calendar request timed out after {}", display_duration(.after))]
    Timeout { after: Duration },

    #[error("Calendar page loaded without any calendar rows")]
    NotReady,

    #[error("Invalid calendar URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector: {0}")]
    Selector(String),
}

fn display_duration(duration: &Duration) -> humantime::FormattedDuration {
    humantime::format_duration(*duration)
}

/// A single calendar row could not be read. Never shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowParseError {
    #[error("row has no {0} cell")]
    MissingField(&'static str),
}

/// An impact icon could not be loaded. Rendering continues with the default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconLoadError {
    #[error("icon for {0} impact is empty")]
    Empty(&'static str),

    #[error("icon for {0} impact must fit on one line")]
    Multiline(&'static str),
}
