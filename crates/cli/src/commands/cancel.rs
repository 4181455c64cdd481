// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Cancel a booking

use super::Engine;
use anyhow::Result;
use clap::Args;
use rally_core::{BookingId, Owner};

#[derive(Args)]
pub struct CancelArgs {
    /// Booking id to cancel
    pub id: u64,
    /// Booking user
    #[arg(long)]
    pub user: String,
}

pub fn run(engine: &Engine, args: CancelArgs) -> Result<()> {
    engine.cancel(BookingId(args.id), &Owner::new(args.user))?;
    println!("canceled booking {}", args.id);
    Ok(())
}
