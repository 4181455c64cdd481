// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Derived slot-occupancy index
//!
//! A boolean table over (day, court, slot), rebuilt from the ledger's
//! active bookings. The table is a presence cache only: conflict detection
//! runs against ledger interval data at creation time, never against these
//! flags, so two records covering the same slot simply both mark it.

use rally_core::{Booking, CourtId, Day, Roster, SlotGrid, SlotTime};
use thiserror::Error;
use tracing::debug;

/// Errors from availability queries; the key domain is closed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("unknown court: {0}")]
    UnknownCourt(String),
    #[error("invalid slot: {0}")]
    InvalidSlot(String),
}

/// Occupancy table with one flag per (day, court, slot)
pub struct AvailabilityIndex {
    grid: SlotGrid,
    roster: Roster,
    free: Vec<bool>,
}

impl AvailabilityIndex {
    /// Build an all-free index over the given grid and roster
    pub fn new(grid: SlotGrid, roster: Roster) -> Self {
        let free = vec![true; Day::ALL.len() * roster.len() * grid.slot_count()];
        Self { grid, roster, free }
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    fn offset(&self, day: Day, court_ix: usize, slot_ix: usize) -> usize {
        (day.index() * self.roster.len() + court_ix) * self.grid.slot_count() + slot_ix
    }

    fn court_ix(&self, court: &CourtId) -> Result<usize, IndexError> {
        self.roster
            .position(court)
            .ok_or_else(|| IndexError::UnknownCourt(court.to_string()))
    }

    fn slot_ix(&self, slot: SlotTime) -> Result<usize, IndexError> {
        self.grid
            .slot_index(slot)
            .map_err(|_| IndexError::InvalidSlot(slot.to_string()))
    }

    /// Whether a single slot is free
    pub fn is_free(&self, day: Day, court: &CourtId, slot: SlotTime) -> Result<bool, IndexError> {
        let court_ix = self.court_ix(court)?;
        let slot_ix = self.slot_ix(slot)?;
        Ok(self.free[self.offset(day, court_ix, slot_ix)])
    }

    /// Whether `span` consecutive slots starting at `start_ix` are all free
    pub(crate) fn free_block(
        &self,
        day: Day,
        court_ix: usize,
        start_ix: usize,
        span: usize,
    ) -> bool {
        if start_ix + span > self.grid.slot_count() {
            return false;
        }
        (start_ix..start_ix + span).all(|s| self.free[self.offset(day, court_ix, s)])
    }

    /// Courts free at the given slot, in roster order
    pub fn free_courts(&self, day: Day, slot: SlotTime) -> Result<Vec<CourtId>, IndexError> {
        let slot_ix = self.slot_ix(slot)?;
        Ok(self
            .roster
            .courts()
            .iter()
            .enumerate()
            .filter(|(court_ix, _)| self.free[self.offset(day, *court_ix, slot_ix)])
            .map(|(_, court)| court.clone())
            .collect())
    }

    /// Rebuild the table from the current booking set
    ///
    /// Every flag resets to free, then each active booking marks the slots
    /// it covers. Idempotent and order-independent. Records whose span no
    /// longer maps onto the grid or roster are skipped; the ledger, not
    /// this cache, is the source of truth.
    pub fn synchronize<'a>(&mut self, bookings: impl IntoIterator<Item = &'a Booking>) {
        self.free.fill(true);
        let mut marked = 0usize;
        for booking in bookings.into_iter().filter(|b| b.is_active()) {
            let Ok(court_ix) = self.court_ix(&booking.court) else {
                continue;
            };
            let Some(minutes) = booking.span_minutes() else {
                continue;
            };
            let Ok(span) = SlotGrid::slots_spanned(minutes) else {
                continue;
            };
            let Ok(first) = self.grid.slot_index(booking.start) else {
                continue;
            };
            if first + span > self.grid.slot_count() {
                continue;
            }
            for slot_ix in first..first + span {
                let at = self.offset(booking.day, court_ix, slot_ix);
                self.free[at] = false;
                marked += 1;
            }
        }
        debug!(slots = marked, "availability index synchronized");
    }

    /// True when no court has a free slot left that day
    pub fn is_day_full(&self, day: Day) -> bool {
        let per_day = self.roster.len() * self.grid.slot_count();
        let base = day.index() * per_day;
        self.free[base..base + per_day].iter().all(|f| !f)
    }

    /// Fully booked days, in week order
    pub fn full_days(&self) -> Vec<Day> {
        Day::ALL.into_iter().filter(|d| self.is_day_full(*d)).collect()
    }
}

#[cfg(test)]
#[path = "availability_tests.rs"]
mod tests;
