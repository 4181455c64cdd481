// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! List a user's active bookings

use super::Engine;
use crate::output;
use anyhow::Result;
use clap::Args;
use rally_core::Owner;

#[derive(Args)]
pub struct ListArgs {
    /// Booking user
    #[arg(long)]
    pub user: String,
}

pub fn run(engine: &Engine, args: ListArgs) -> Result<()> {
    let bookings = engine.bookings_for(&Owner::new(args.user));
    if bookings.is_empty() {
        println!("no active bookings");
        return Ok(());
    }
    for booking in &bookings {
        println!("{}", output::booking_line(booking));
    }
    Ok(())
}
