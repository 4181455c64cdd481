// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Book a court

use super::{duration_minutes, Engine};
use crate::output;
use anyhow::Result;
use clap::Args;
use rally_core::{CourtId, Day, Owner};
use rally_engine::EngineError;

#[derive(Args)]
pub struct BookArgs {
    /// Booking user (owner of the reservation)
    #[arg(long)]
    pub user: String,
    /// Day of the week, e.g. monday
    #[arg(long)]
    pub day: String,
    /// Court code, e.g. A
    #[arg(long)]
    pub court: String,
    /// Start time, e.g. "10:00 AM"
    #[arg(long)]
    pub start: String,
    /// Duration in hours, half-hour increments
    #[arg(long)]
    pub duration: f64,
}

pub fn run(engine: &Engine, args: BookArgs) -> Result<()> {
    let day: Day = args.day.parse()?;
    let court = CourtId::new(&args.court);
    let minutes = duration_minutes(args.duration)?;
    let owner = Owner::new(args.user);

    match engine.create(&court, day, &args.start, minutes, &owner) {
        Ok(booking) => {
            println!("created {}", output::booking_line(&booking));
            Ok(())
        }
        Err(err @ EngineError::Overlap { .. }) => {
            let alternatives = engine
                .suggest(&court, day, &args.start, minutes)
                .unwrap_or_default();
            if !alternatives.is_empty() {
                println!("closest alternatives:");
                for suggestion in &alternatives {
                    println!("  {}", output::suggestion_line(suggestion));
                }
            }
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
