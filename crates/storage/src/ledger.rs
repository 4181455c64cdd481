// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! The authoritative booking ledger

use crate::store::{BookingStore, StoreError};
use rally_core::{Booking, BookingId, BookingStatus};
use thiserror::Error;

/// Errors from ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("no active booking with id {0}")]
    NotFound(BookingId),
}

/// Authoritative, durable record of bookings
///
/// Records are kept in append order. Every mutation rewrites the backing
/// store; if the rewrite fails the in-memory change is rolled back, so a
/// failed operation leaves no partial state.
pub struct Ledger<S: BookingStore> {
    store: S,
    bookings: Vec<Booking>,
}

impl<S: BookingStore> Ledger<S> {
    /// Load the ledger from its store
    pub fn open(store: S) -> Result<Self, LedgerError> {
        let bookings = store.load()?;
        Ok(Self { store, bookings })
    }

    /// Every record, in ledger order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Generic filtered scan over the ledger
    pub fn find_by<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Booking>
    where
        P: Fn(&Booking) -> bool + 'a,
    {
        self.bookings.iter().filter(move |b| predicate(b))
    }

    /// Active records, in ledger order
    pub fn active(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().filter(|b| b.is_active())
    }

    /// Look up a record by id, regardless of status
    pub fn get(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// One past the highest identifier ever assigned
    ///
    /// Canceled records count; identifiers are never reused.
    pub fn next_id(&self) -> BookingId {
        BookingId(self.bookings.iter().map(|b| b.id.0).max().unwrap_or(0) + 1)
    }

    /// Append a record and persist the full ledger
    pub fn append(&mut self, booking: Booking) -> Result<(), LedgerError> {
        self.bookings.push(booking);
        if let Err(e) = self.store.persist(&self.bookings) {
            self.bookings.pop();
            return Err(e.into());
        }
        Ok(())
    }

    /// Transition the active record matching `id` and persist
    pub fn set_status(&mut self, id: BookingId, status: BookingStatus) -> Result<(), LedgerError> {
        let ix = self
            .bookings
            .iter()
            .position(|b| b.id == id && b.is_active())
            .ok_or(LedgerError::NotFound(id))?;
        let previous = self.bookings[ix].status;
        self.bookings[ix].status = status;
        if let Err(e) = self.store.persist(&self.bookings) {
            self.bookings[ix].status = previous;
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
