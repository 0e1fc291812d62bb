//! `openhours` CLI -- query and validate weekly availability schedules.
//!
//! ## Usage
//!
//! ```sh
//! # Is the provider available at a given date and time?
//! openhours check --schedule Availability.json --date 2024-01-01 --time 10:00
//!
//! # Same answer, as the JSON payload the HTTP API serves
//! openhours check --schedule Availability.json --date 2024-01-01 --time 12:30 --json
//!
//! # Load and validate a schedule document
//! openhours validate --schedule Availability.json
//! ```

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use serde_json::json;

use openhours_core::{load_schedule, resolve, Availability, WeeklySchedule};

#[derive(Parser)]
#[command(
    name = "openhours",
    version,
    about = "Weekly availability schedule tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check availability at a given date and time
    Check {
        /// Path to the schedule JSON document
        #[arg(short, long)]
        schedule: String,
        /// Requested date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Requested time (HH:mm)
        #[arg(short, long)]
        time: String,
        /// Print the wire-format JSON payload instead of a summary line
        #[arg(long)]
        json: bool,
    },
    /// Load and validate a schedule document
    Validate {
        /// Path to the schedule JSON document
        #[arg(short, long)]
        schedule: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            schedule,
            date,
            time,
            json,
        } => {
            let weekly = load_schedule(&schedule)
                .with_context(|| format!("failed to load schedule: {schedule}"))?;
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("invalid date '{date}': expected YYYY-MM-DD"))?;
            let time = NaiveTime::parse_from_str(&time, "%H:%M")
                .with_context(|| format!("invalid time '{time}': expected HH:mm"))?;

            let availability = resolve(date, time, &weekly);
            if json {
                println!("{}", serde_json::to_string_pretty(&payload(&availability))?);
            } else {
                print_summary(&availability);
            }
        }
        Commands::Validate { schedule } => {
            let weekly = load_schedule(&schedule)
                .with_context(|| format!("failed to load schedule: {schedule}"))?;
            print_week(&weekly);
            println!("Schedule is valid.");
        }
    }

    Ok(())
}

/// The same payload shape the HTTP API serves.
fn payload(availability: &Availability) -> serde_json::Value {
    match availability {
        Availability::Available => json!({ "isAvailable": true }),
        Availability::Unavailable { next_slot } => json!({
            "isAvailable": false,
            "nextAvailableSlot": {
                "date": next_slot.date.to_string(),
                "time": next_slot.time.format("%H:%M").to_string(),
            }
        }),
        Availability::NoUpcomingSlot => json!({ "isAvailable": false }),
    }
}

fn print_summary(availability: &Availability) {
    match availability {
        Availability::Available => println!("Available at the requested time."),
        Availability::Unavailable { next_slot } => println!(
            "Unavailable. Next slot: {} {}",
            next_slot.date,
            next_slot.time.format("%H:%M")
        ),
        Availability::NoUpcomingSlot => {
            println!("Unavailable. The schedule has no open intervals.")
        }
    }
}

fn print_week(schedule: &WeeklySchedule) {
    for (weekday, intervals) in schedule.days() {
        if intervals.is_empty() {
            println!("{weekday:<10} closed");
        } else {
            let spans: Vec<String> = intervals
                .iter()
                .map(|interval| {
                    format!(
                        "{}-{}",
                        interval.start.format("%H:%M"),
                        interval.end.format("%H:%M")
                    )
                })
                .collect();
            println!("{weekday:<10} {}", spans.join(", "));
        }
    }
}
