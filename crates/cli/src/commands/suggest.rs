// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Suggest free alternatives near a requested slot

use super::{duration_minutes, Engine};
use crate::output;
use anyhow::Result;
use clap::Args;
use rally_core::{CourtId, Day};

#[derive(Args)]
pub struct SuggestArgs {
    /// Day of the week, e.g. monday
    #[arg(long)]
    pub day: String,
    /// Requested court code
    #[arg(long)]
    pub court: String,
    /// Requested start time, e.g. "02:00 PM"
    #[arg(long)]
    pub start: String,
    /// Duration in hours, half-hour increments
    #[arg(long)]
    pub duration: f64,
}

pub fn run(engine: &Engine, args: SuggestArgs) -> Result<()> {
    let day: Day = args.day.parse()?;
    let court = CourtId::new(&args.court);
    let minutes = duration_minutes(args.duration)?;

    let suggestions = engine.suggest(&court, day, &args.start, minutes)?;
    if suggestions.is_empty() {
        println!("nothing free within two hours of {}", args.start);
        return Ok(());
    }
    for suggestion in &suggestions {
        println!("{}", output::suggestion_line(suggestion));
    }
    Ok(())
}
