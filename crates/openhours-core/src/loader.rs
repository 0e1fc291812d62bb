//! Load and validate schedule documents.
//!
//! All data-shape rejection happens here, before a schedule ever reaches
//! the resolver: unreadable files, malformed JSON, bad time formats, and
//! interval-ordering violations all surface as [`ScheduleError`].

use std::fs;
use std::path::Path;

use crate::error::{Result, ScheduleError};
use crate::schedule::{ScheduleDocument, WeeklySchedule};

/// Parse and validate a schedule document from a JSON string.
pub fn parse_schedule(json: &str) -> Result<WeeklySchedule> {
    let document: ScheduleDocument = serde_json::from_str(json)?;
    document.availability_timings.validate()?;
    Ok(document.availability_timings)
}

/// Read, parse, and validate a schedule document from a file.
pub fn load_schedule(path: impl AsRef<Path>) -> Result<WeeklySchedule> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ScheduleError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_schedule(&raw)
}
