// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Report fully booked days

use super::Engine;
use anyhow::Result;

pub fn run(engine: &Engine) -> Result<()> {
    let full = engine.full_days();
    if full.is_empty() {
        println!("no fully booked days");
    } else {
        let names: Vec<String> = full.iter().map(|d| d.to_string()).collect();
        println!("fully booked: {}", names.join(", "));
    }
    Ok(())
}
