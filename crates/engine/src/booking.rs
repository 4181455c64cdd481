// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Booking creation and cancellation
//!
//! `BookingEngine` pairs the durable ledger with the availability index
//! behind one lock. Writers hold the write guard across validation,
//! persistence, and resynchronization, so a write is one atomic scoped
//! transaction; readers share the read guard and always observe a fully
//! synchronized index.

use crate::availability::AvailabilityIndex;
use crate::error::EngineError;
use crate::search::{self, Suggestion};
use rally_core::{
    Booking, BookingId, BookingStatus, CourtId, Day, Owner, Roster, SlotGrid, SlotTime,
};
use rally_storage::{BookingStore, Ledger};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

struct EngineState<S: BookingStore> {
    ledger: Ledger<S>,
    index: AvailabilityIndex,
}

/// The booking engine: validated writes, indexed reads
pub struct BookingEngine<S: BookingStore> {
    state: RwLock<EngineState<S>>,
}

impl<S: BookingStore> BookingEngine<S> {
    /// Open the ledger and build a synchronized index over it
    pub fn open(store: S, grid: SlotGrid, roster: Roster) -> Result<Self, EngineError> {
        let ledger = Ledger::open(store)?;
        let mut index = AvailabilityIndex::new(grid, roster);
        index.synchronize(ledger.bookings());
        Ok(Self {
            state: RwLock::new(EngineState { ledger, index }),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, EngineState<S>> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, EngineState<S>> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Create a booking for `[start, start + minutes)` on (day, court)
    ///
    /// Validation runs to completion before any state changes; on failure
    /// neither the ledger nor the index is touched.
    pub fn create(
        &self,
        court: &CourtId,
        day: Day,
        start: &str,
        minutes: u32,
        owner: &Owner,
    ) -> Result<Booking, EngineError> {
        let mut state = self.write();

        if !state.index.roster().contains(court) {
            return Err(EngineError::UnknownCourt(court.to_string()));
        }
        let grid = *state.index.grid();
        let start = grid.normalize(start)?;
        let end = grid.end_time(start, minutes)?;
        let slots = grid.covered_slots(start, minutes)?;

        // Conflict detection reads the ledger's interval data, not the
        // boolean index: occupancy flags cannot tell two overlapping
        // bookings apart.
        let conflict = state
            .ledger
            .active()
            .find(|other| other.court == *court && other.day == day && overlaps(&grid, &slots, other))
            .map(|other| other.id);
        if let Some(id) = conflict {
            return Err(EngineError::Overlap {
                id,
                court: court.clone(),
                day,
            });
        }

        let booking = Booking {
            id: state.ledger.next_id(),
            court: court.clone(),
            day,
            start,
            end,
            status: BookingStatus::Active,
            owner: owner.clone(),
        };
        state.ledger.append(booking.clone())?;

        let EngineState { ledger, index } = &mut *state;
        index.synchronize(ledger.bookings());

        info!(
            id = booking.id.0,
            court = %booking.court,
            day = %booking.day,
            start = %booking.start,
            end = %booking.end,
            owner = %booking.owner,
            "booking created"
        );
        Ok(booking)
    }

    /// Cancel a booking owned by `requester`
    ///
    /// Status flips one way only; a canceled booking stays in the ledger.
    pub fn cancel(&self, id: BookingId, requester: &Owner) -> Result<(), EngineError> {
        let mut state = self.write();

        let (active, owned) = {
            let booking = state.ledger.get(id).ok_or(EngineError::NotFound(id))?;
            (booking.is_active(), booking.owner == *requester)
        };
        if !active {
            return Err(EngineError::NotActive(id));
        }
        if !owned {
            return Err(EngineError::Forbidden(id));
        }

        state.ledger.set_status(id, BookingStatus::Canceled)?;
        let EngineState { ledger, index } = &mut *state;
        index.synchronize(ledger.bookings());

        info!(id = id.0, "booking canceled");
        Ok(())
    }

    /// Active bookings owned by `owner`, in ledger order
    pub fn bookings_for(&self, owner: &Owner) -> Vec<Booking> {
        self.read()
            .ledger
            .find_by(|b| b.is_active() && b.owner == *owner)
            .cloned()
            .collect()
    }

    /// Whether one slot is free
    pub fn is_free(&self, day: Day, court: &CourtId, slot: &str) -> Result<bool, EngineError> {
        let state = self.read();
        let slot = state.index.grid().normalize(slot)?;
        Ok(state.index.is_free(day, court, slot)?)
    }

    /// Courts free at a slot, in roster order
    pub fn free_courts(&self, day: Day, slot: &str) -> Result<Vec<CourtId>, EngineError> {
        let state = self.read();
        let slot = state.index.grid().normalize(slot)?;
        Ok(state.index.free_courts(day, slot)?)
    }

    /// Fully booked days, in week order
    pub fn full_days(&self) -> Vec<Day> {
        self.read().index.full_days()
    }

    /// Nearby free alternatives for a request that did not fit
    pub fn suggest(
        &self,
        court: &CourtId,
        day: Day,
        start: &str,
        minutes: u32,
    ) -> Result<Vec<Suggestion>, EngineError> {
        let state = self.read();
        if !state.index.roster().contains(court) {
            return Err(EngineError::UnknownCourt(court.to_string()));
        }
        let preferred = state.index.grid().normalize(start)?;
        search::find_alternatives(
            &state.index,
            day,
            court,
            preferred,
            minutes,
            search::DEFAULT_SEARCH_WINDOW_MINUTES,
        )
    }
}

/// Whether an existing booking's covered slots intersect `slots`
fn overlaps(grid: &SlotGrid, slots: &[SlotTime], other: &Booking) -> bool {
    let Some(minutes) = other.span_minutes() else {
        return false;
    };
    let Ok(taken) = grid.covered_slots(other.start, minutes) else {
        return false;
    };
    taken.iter().any(|t| slots.contains(t))
}

#[cfg(test)]
#[path = "booking_tests.rs"]
mod tests;
