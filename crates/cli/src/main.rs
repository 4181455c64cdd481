// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! rally - court reservation CLI

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{book, cancel, check, days, list, suggest};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rally",
    version,
    about = "Court reservations on a weekly slot schedule"
)]
struct Cli {
    /// Data directory holding the booking ledger
    #[arg(long, global = true, default_value = "data")]
    data: PathBuf,

    /// Schedule configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book a court
    Book(book::BookArgs),
    /// Cancel one of your bookings
    Cancel(cancel::CancelArgs),
    /// List your active bookings
    List(list::ListArgs),
    /// Show courts free at a slot
    Check(check::CheckArgs),
    /// Report fully booked days
    Days,
    /// Suggest free alternatives near a requested slot
    Suggest(suggest::SuggestArgs),
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();
    let engine = commands::open_engine(&cli.data, cli.config.as_deref())?;

    match cli.command {
        Commands::Book(args) => book::run(&engine, args),
        Commands::Cancel(args) => cancel::run(&engine, args),
        Commands::List(args) => list::run(&engine, args),
        Commands::Check(args) => check::run(&engine, args),
        Commands::Days => days::run(&engine),
        Commands::Suggest(args) => suggest::run(&engine, args),
    }
}

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
