// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Schedule configuration
//!
//! The operating window and the court roster are fixed at configuration
//! time; the slot width is not configurable.

use crate::court::{CourtId, Roster, RosterError};
use crate::error::GridError;
use crate::grid::{SlotGrid, SlotTime};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors loading or validating a schedule configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Grid(#[from] GridError),
    #[error("{0}")]
    Roster(#[from] RosterError),
    #[error("operating window {open} to {close} is empty")]
    EmptyWindow { open: String, close: String },
}

/// Declarative schedule settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Opening time, `HH:MM AM/PM`
    pub open: String,
    /// Closing time, `HH:MM AM/PM`
    pub close: String,
    /// Court roster, in display order
    pub courts: Vec<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            open: "08:00 AM".to_string(),
            close: "10:00 PM".to_string(),
            courts: ('A'..='H').map(|c| c.to_string()).collect(),
        }
    }
}

/// Parse a schedule configuration from TOML text
pub fn parse_config(input: &str) -> Result<ScheduleConfig, ConfigError> {
    Ok(toml::from_str(input)?)
}

impl ScheduleConfig {
    /// Read a configuration file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        parse_config(&std::fs::read_to_string(path)?)
    }

    /// Build the slot grid for this window
    pub fn grid(&self) -> Result<SlotGrid, ConfigError> {
        let open = SlotTime::parse(&self.open)?;
        let close = SlotTime::parse(&self.close)?;
        SlotGrid::new(open, close).ok_or_else(|| ConfigError::EmptyWindow {
            open: self.open.clone(),
            close: self.close.clone(),
        })
    }

    /// Build the court roster
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        Ok(Roster::new(self.courts.iter().map(CourtId::new))?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
