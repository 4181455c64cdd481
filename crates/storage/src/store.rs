// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Durable stores for booking records
//!
//! Records are flat JSON lines. Loading tolerates a missing file and drops
//! lines that fail to parse or lack a required field; persisting rewrites
//! the full record set through a temporary file.

use rally_core::Booking;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors from durable booking storage
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A durable store of booking records
pub trait BookingStore {
    /// Read every intact record, in stored order
    fn load(&self) -> Result<Vec<Booking>, StoreError>;

    /// Replace the stored record set
    fn persist(&self, bookings: &[Booking]) -> Result<(), StoreError>;
}

/// File-backed store, one JSON record per line
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookingStore for FileStore {
    fn load(&self) -> Result<Vec<Booking>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        let mut bookings = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            // Incomplete or garbled rows are dropped, not fatal
            if let Ok(booking) = serde_json::from_str::<Booking>(&line) {
                bookings.push(booking);
            }
        }
        Ok(bookings)
    }

    fn persist(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        {
            let mut file = File::create(&tmp)?;
            for booking in bookings {
                let line = serde_json::to_string(booking)?;
                writeln!(file, "{}", line)?;
            }
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<Booking>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for MemoryStore {
    fn load(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn persist(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        *self.records.lock().unwrap_or_else(|e| e.into_inner()) = bookings.to_vec();
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
