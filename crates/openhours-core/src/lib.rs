//! # openhours-core
//!
//! Weekly availability resolution for service providers.
//!
//! A provider's availability is a recurring weekly schedule: for each
//! weekday, an ordered list of open intervals. Given a requested date and
//! time, the resolver answers either "available now" or the nearest
//! subsequent open slot, rolling forward across closed days when needed.
//!
//! ## Modules
//!
//! - [`schedule`] -- weekly schedule model and validation
//! - [`loader`] -- schedule document loading (JSON)
//! - [`resolver`] -- availability resolution and next-slot search
//! - [`error`] -- error types

pub mod error;
pub mod loader;
pub mod resolver;
pub mod schedule;

pub use error::ScheduleError;
pub use loader::{load_schedule, parse_schedule};
pub use resolver::{resolve, Availability, Slot};
pub use schedule::{Interval, WeeklySchedule};
