// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Show courts free at a slot

use super::Engine;
use anyhow::Result;
use clap::Args;
use rally_core::Day;

#[derive(Args)]
pub struct CheckArgs {
    /// Day of the week, e.g. monday
    #[arg(long)]
    pub day: String,
    /// Slot start time, e.g. "10:00 AM"
    #[arg(long)]
    pub start: String,
}

pub fn run(engine: &Engine, args: CheckArgs) -> Result<()> {
    let day: Day = args.day.parse()?;
    let free = engine.free_courts(day, &args.start)?;
    if free.is_empty() {
        println!("no courts free on {} at {}", day, args.start);
    } else {
        let codes: Vec<String> = free.iter().map(|c| c.to_string()).collect();
        println!("free on {} at {}: {}", day, args.start, codes.join(", "));
    }
    Ok(())
}
