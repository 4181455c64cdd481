// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! CLI subcommands

pub mod book;
pub mod cancel;
pub mod check;
pub mod days;
pub mod list;
pub mod suggest;

use anyhow::{bail, Context, Result};
use rally_core::ScheduleConfig;
use rally_engine::BookingEngine;
use rally_storage::FileStore;
use std::path::Path;

pub type Engine = BookingEngine<FileStore>;

/// Build an engine over the ledger in `data`, using `config` when given
pub fn open_engine(data: &Path, config: Option<&Path>) -> Result<Engine> {
    let config = match config {
        Some(path) => ScheduleConfig::load(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => ScheduleConfig::default(),
    };
    let store = FileStore::new(data.join("bookings.jsonl"));
    Ok(BookingEngine::open(store, config.grid()?, config.roster()?)?)
}

/// Convert a duration in hours (half-hour increments) to whole minutes
pub fn duration_minutes(hours: f64) -> Result<u32> {
    let halves = hours * 2.0;
    if halves <= 0.0 || halves > 48.0 || halves.fract() != 0.0 {
        bail!("invalid duration: {hours} (use half-hour increments, e.g. 1, 1.5, 2)");
    }
    Ok(halves as u32 * 30)
}
