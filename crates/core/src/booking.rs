// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Booking records

use crate::court::CourtId;
use crate::day::Day;
use crate::grid::SlotTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique booking identifier, assigned monotonically and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookingId(pub u64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Booking lifecycle status; the only transition is active to canceled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Canceled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Active => write!(f, "active"),
            BookingStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// Opaque identity of the user who created a booking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner(pub String);

impl Owner {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A court reservation covering one or more contiguous slots
///
/// `end` is the exclusive bound of the reserved span. Records are never
/// deleted; cancellation flips the status and leaves the row in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub court: CourtId,
    pub day: Day,
    pub start: SlotTime,
    pub end: SlotTime,
    pub status: BookingStatus,
    pub owner: Owner,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }

    /// Whole minutes between start and end, when the record is well-formed
    pub fn span_minutes(&self) -> Option<u32> {
        self.start.minutes_until(self.end)
    }
}

#[cfg(test)]
#[path = "booking_tests.rs"]
mod tests;
