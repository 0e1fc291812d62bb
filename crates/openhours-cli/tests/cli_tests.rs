//! Integration tests for the `openhours` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the check and
//! validate subcommands through the actual binary, against fixture schedule
//! documents. 2024-01-01 is a Monday.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the availability.json fixture.
fn availability_path() -> &'static str {
    concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/availability.json"
    )
}

/// Helper: path to the closed.json fixture (no open intervals at all).
fn closed_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/closed.json")
}

/// Helper: path to the overlapping.json fixture (invalid document).
fn overlapping_path() -> &'static str {
    concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/overlapping.json"
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_available_inside_an_interval() {
    Command::cargo_bin("openhours")
        .unwrap()
        .args([
            "check",
            "--schedule",
            availability_path(),
            "--date",
            "2024-01-01",
            "--time",
            "10:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available"));
}

#[test]
fn check_in_the_lunch_gap_reports_the_next_slot() {
    Command::cargo_bin("openhours")
        .unwrap()
        .args([
            "check",
            "--schedule",
            availability_path(),
            "--date",
            "2024-01-01",
            "--time",
            "12:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next slot: 2024-01-01 13:00"));
}

#[test]
fn check_on_a_closed_day_rolls_forward() {
    // Tuesday is closed; Wednesday opens at 09:00.
    Command::cargo_bin("openhours")
        .unwrap()
        .args([
            "check",
            "--schedule",
            availability_path(),
            "--date",
            "2024-01-02",
            "--time",
            "10:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next slot: 2024-01-03 09:00"));
}

#[test]
fn check_json_emits_the_wire_payload() {
    Command::cargo_bin("openhours")
        .unwrap()
        .args([
            "check",
            "--schedule",
            availability_path(),
            "--date",
            "2024-01-01",
            "--time",
            "12:30",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"isAvailable\": false"))
        .stdout(predicate::str::contains("\"nextAvailableSlot\""))
        .stdout(predicate::str::contains("\"13:00\""));
}

#[test]
fn check_against_a_fully_closed_schedule() {
    Command::cargo_bin("openhours")
        .unwrap()
        .args([
            "check",
            "--schedule",
            closed_path(),
            "--date",
            "2024-01-01",
            "--time",
            "10:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no open intervals"));
}

#[test]
fn check_rejects_a_malformed_date() {
    Command::cargo_bin("openhours")
        .unwrap()
        .args([
            "check",
            "--schedule",
            availability_path(),
            "--date",
            "Jan 1st",
            "--time",
            "10:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn check_rejects_a_missing_schedule_file() {
    Command::cargo_bin("openhours")
        .unwrap()
        .args([
            "check",
            "--schedule",
            "/no/such/file.json",
            "--date",
            "2024-01-01",
            "--time",
            "10:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load schedule"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Validate subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validate_lists_the_week_for_a_valid_document() {
    Command::cargo_bin("openhours")
        .unwrap()
        .args(["validate", "--schedule", availability_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("monday"))
        .stdout(predicate::str::contains("09:00-12:00, 13:00-17:00"))
        .stdout(predicate::str::contains("tuesday"))
        .stdout(predicate::str::contains("closed"))
        .stdout(predicate::str::contains("Schedule is valid."));
}

#[test]
fn validate_rejects_overlapping_intervals() {
    Command::cargo_bin("openhours")
        .unwrap()
        .args(["validate", "--schedule", overlapping_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of order or overlapping"));
}
