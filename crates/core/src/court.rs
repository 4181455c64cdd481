// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Court identifiers and the configured roster

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A short court code, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourtId(pub String);

impl CourtId {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }
}

impl fmt::Display for CourtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourtId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Errors building a roster
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("roster has no courts")]
    Empty,
    #[error("duplicate court code: {0}")]
    Duplicate(CourtId),
}

/// The fixed set of bookable courts, in configuration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    courts: Vec<CourtId>,
}

impl Roster {
    /// Build a roster; codes must be unique and at least one is required
    pub fn new(codes: impl IntoIterator<Item = CourtId>) -> Result<Self, RosterError> {
        let courts: Vec<CourtId> = codes.into_iter().collect();
        if courts.is_empty() {
            return Err(RosterError::Empty);
        }
        for (i, court) in courts.iter().enumerate() {
            if courts[..i].contains(court) {
                return Err(RosterError::Duplicate(court.clone()));
            }
        }
        Ok(Self { courts })
    }

    /// The stock eight-court roster, A through H
    pub fn standard() -> Self {
        Self {
            courts: ('A'..='H').map(|c| CourtId(c.to_string())).collect(),
        }
    }

    pub fn contains(&self, court: &CourtId) -> bool {
        self.courts.contains(court)
    }

    /// Ordinal of a court within the roster
    pub fn position(&self, court: &CourtId) -> Option<usize> {
        self.courts.iter().position(|c| c == court)
    }

    pub fn courts(&self) -> &[CourtId] {
        &self.courts
    }

    pub fn len(&self) -> usize {
        self.courts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courts.is_empty()
    }
}

#[cfg(test)]
#[path = "court_tests.rs"]
mod tests;
