// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! End-to-end specs driving the rally binary

use assert_cmd::Command;
use predicates::str::contains;
use std::path::Path;

fn rally(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rally").unwrap();
    cmd.arg("--data").arg(data);
    cmd
}

#[test]
fn book_then_list_shows_the_reservation() {
    let dir = tempfile::tempdir().unwrap();

    rally(dir.path())
        .args([
            "book", "--user", "alice", "--day", "monday", "--court", "a", "--start", "10:00 am",
            "--duration", "1",
        ])
        .assert()
        .success()
        .stdout(contains(
            "created booking 1: court A on Monday from 10:00 AM to 11:00 AM (alice)",
        ));

    rally(dir.path())
        .args(["list", "--user", "alice"])
        .assert()
        .success()
        .stdout(contains("court A on Monday from 10:00 AM to 11:00 AM"));

    rally(dir.path())
        .args(["list", "--user", "bob"])
        .assert()
        .success()
        .stdout(contains("no active bookings"));
}

#[test]
fn overlapping_booking_is_rejected_with_alternatives() {
    let dir = tempfile::tempdir().unwrap();

    rally(dir.path())
        .args([
            "book", "--user", "alice", "--day", "monday", "--court", "A", "--start", "10:00 AM",
            "--duration", "1",
        ])
        .assert()
        .success();

    // Half an hour into the existing booking
    rally(dir.path())
        .args([
            "book", "--user", "bob", "--day", "monday", "--court", "A", "--start", "10:30 AM",
            "--duration", "0.5",
        ])
        .assert()
        .failure()
        .stdout(contains("closest alternatives:"))
        .stderr(contains("overlaps active booking 1"));

    // Right after it is fine
    rally(dir.path())
        .args([
            "book", "--user", "bob", "--day", "monday", "--court", "A", "--start", "11:00 AM",
            "--duration", "0.5",
        ])
        .assert()
        .success()
        .stdout(contains("created booking 2"));
}

#[test]
fn only_the_owner_may_cancel() {
    let dir = tempfile::tempdir().unwrap();

    rally(dir.path())
        .args([
            "book", "--user", "alice", "--day", "friday", "--court", "C", "--start", "06:00 PM",
            "--duration", "1.5",
        ])
        .assert()
        .success();

    rally(dir.path())
        .args(["cancel", "1", "--user", "mallory"])
        .assert()
        .failure()
        .stderr(contains("belongs to another user"));

    rally(dir.path())
        .args(["cancel", "1", "--user", "alice"])
        .assert()
        .success()
        .stdout(contains("canceled booking 1"));

    rally(dir.path())
        .args(["cancel", "1", "--user", "alice"])
        .assert()
        .failure()
        .stderr(contains("not active"));

    rally(dir.path())
        .args(["list", "--user", "alice"])
        .assert()
        .success()
        .stdout(contains("no active bookings"));
}

#[test]
fn the_ledger_survives_across_invocations() {
    let dir = tempfile::tempdir().unwrap();

    rally(dir.path())
        .args([
            "book", "--user", "alice", "--day", "tuesday", "--court", "B", "--start", "09:00 AM",
            "--duration", "2",
        ])
        .assert()
        .success();

    let check = rally(dir.path())
        .args(["check", "--day", "tuesday", "--start", "09:00 AM"])
        .assert()
        .success();
    let stdout = String::from_utf8(check.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("free on Tuesday at 09:00 AM: A, C, D, E, F, G, H"));

    // A canceled booking frees the slot for later runs
    rally(dir.path())
        .args(["cancel", "1", "--user", "alice"])
        .assert()
        .success();
    rally(dir.path())
        .args(["check", "--day", "tuesday", "--start", "09:00 AM"])
        .assert()
        .success()
        .stdout(contains("A, B, C, D, E, F, G, H"));
}

#[test]
fn suggest_offers_the_other_court_at_the_requested_time() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("schedule.toml");
    std::fs::write(&config, "courts = [\"A\", \"B\"]\n").unwrap();

    // Court A is taken all day; B only has the 2 to 3 gap
    rally(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .args([
            "book", "--user", "alice", "--day", "monday", "--court", "A", "--start", "08:00 AM",
            "--duration", "14",
        ])
        .assert()
        .success();
    rally(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .args([
            "book", "--user", "bob", "--day", "monday", "--court", "B", "--start", "08:00 AM",
            "--duration", "6",
        ])
        .assert()
        .success();
    rally(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .args([
            "book", "--user", "bob", "--day", "monday", "--court", "B", "--start", "03:00 PM",
            "--duration", "7",
        ])
        .assert()
        .success();

    let suggest = rally(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .args([
            "suggest", "--day", "monday", "--court", "A", "--start", "02:00 PM", "--duration",
            "1",
        ])
        .assert()
        .success();
    let stdout = String::from_utf8(suggest.get_output().stdout.clone()).unwrap();
    let first = stdout.lines().next().unwrap();
    assert_eq!(first, "court B at 02:00 PM (alternative)");
}

#[test]
fn days_reports_a_fully_booked_day() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("schedule.toml");
    std::fs::write(
        &config,
        "open = \"09:00 AM\"\nclose = \"10:00 AM\"\ncourts = [\"A\"]\n",
    )
    .unwrap();

    rally(dir.path())
        .args(["--config", config.to_str().unwrap(), "days"])
        .assert()
        .success()
        .stdout(contains("no fully booked days"));

    rally(dir.path())
        .args(["--config", config.to_str().unwrap()])
        .args([
            "book", "--user", "alice", "--day", "sunday", "--court", "A", "--start", "09:00 AM",
            "--duration", "1",
        ])
        .assert()
        .success();

    rally(dir.path())
        .args(["--config", config.to_str().unwrap(), "days"])
        .assert()
        .success()
        .stdout(contains("fully booked: Sunday"));
}

#[test]
fn invalid_input_is_reported_not_booked() {
    let dir = tempfile::tempdir().unwrap();

    rally(dir.path())
        .args([
            "book", "--user", "alice", "--day", "someday", "--court", "A", "--start", "10:00 AM",
            "--duration", "1",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid day: someday"));

    rally(dir.path())
        .args([
            "book", "--user", "alice", "--day", "monday", "--court", "A", "--start", "10:00 AM",
            "--duration", "0.75",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid duration"));

    rally(dir.path())
        .args([
            "book", "--user", "alice", "--day", "monday", "--court", "A", "--start", "09:30 PM",
            "--duration", "1",
        ])
        .assert()
        .failure()
        .stderr(contains("operating window"));

    rally(dir.path())
        .args(["list", "--user", "alice"])
        .assert()
        .success()
        .stdout(contains("no active bookings"));
}
