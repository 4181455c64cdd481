// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

use super::*;

#[test]
fn default_schedule_matches_stock_window() {
    let config = ScheduleConfig::default();
    let grid = config.grid().unwrap();
    assert_eq!(grid.open().to_string(), "08:00 AM");
    assert_eq!(grid.close().to_string(), "10:00 PM");
    assert_eq!(grid.slot_count(), 28);
    assert_eq!(config.roster().unwrap().len(), 8);
}

#[test]
fn parses_full_config() {
    let toml = r#"
open = "09:00 AM"
close = "05:00 PM"
courts = ["N", "S"]
"#;
    let config = parse_config(toml).unwrap();
    let grid = config.grid().unwrap();
    assert_eq!(grid.slot_count(), 16);
    let roster = config.roster().unwrap();
    assert_eq!(roster.courts().len(), 2);
    assert_eq!(roster.position(&crate::CourtId::new("S")), Some(1));
}

#[test]
fn omitted_fields_fall_back_to_defaults() {
    let config = parse_config(r#"courts = ["A", "B"]"#).unwrap();
    assert_eq!(config.open, "08:00 AM");
    assert_eq!(config.roster().unwrap().len(), 2);
}

#[test]
fn rejects_unknown_keys() {
    assert!(matches!(
        parse_config("slot_width = 15"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn rejects_inverted_window() {
    let config = parse_config(
        r#"
open = "05:00 PM"
close = "09:00 AM"
"#,
    )
    .unwrap();
    assert!(matches!(config.grid(), Err(ConfigError::EmptyWindow { .. })));
}

#[test]
fn rejects_unparseable_window_bound() {
    let config = parse_config(r#"open = "25:00""#).unwrap();
    assert!(matches!(config.grid(), Err(ConfigError::Grid(_))));
}
