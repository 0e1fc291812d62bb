//! Application state for the HTTP server.

use std::sync::Arc;

use openhours_core::WeeklySchedule;

/// Shared application state passed to all handlers.
///
/// The schedule is immutable for the process lifetime. If hot-reloading is
/// ever added, the whole `Arc` must be swapped atomically so concurrent
/// requests never observe a partially updated schedule.
#[derive(Clone)]
pub struct AppState {
    pub schedule: Arc<WeeklySchedule>,
}

impl AppState {
    /// Create a new application state around a loaded schedule.
    pub fn new(schedule: Arc<WeeklySchedule>) -> Self {
        Self { schedule }
    }
}
