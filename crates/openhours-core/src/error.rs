//! Error types for schedule loading and validation.

use thiserror::Error;

/// Errors raised while loading or validating a schedule document.
///
/// These cover data-shape problems only. A closed day or an entirely closed
/// week is a normal resolver outcome, not an error.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The schedule file could not be read.
    #[error("failed to read schedule file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document was not valid JSON, or a time was not in HH:mm form.
    #[error("schedule parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An interval ends before it starts.
    #[error("{weekday}: interval {start}-{end} ends before it starts")]
    EndBeforeStart {
        weekday: &'static str,
        start: String,
        end: String,
    },

    /// Intervals within a day are out of order or overlap.
    #[error("{weekday}: intervals are out of order or overlapping near {at}")]
    Unordered { weekday: &'static str, at: String },
}

/// Convenience alias used throughout openhours-core.
pub type Result<T> = std::result::Result<T, ScheduleError>;
