// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Engine error taxonomy

use crate::availability::IndexError;
use rally_core::{BookingId, CourtId, Day, GridError};
use rally_storage::LedgerError;
use thiserror::Error;

/// Errors returned by booking-engine operations
///
/// Everything here is a local validation failure reported to the caller;
/// only store I/O surfacing through [`EngineError::Ledger`] is fatal to the
/// operation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown court: {0}")]
    UnknownCourt(String),
    #[error("overlaps active booking {id} on court {court}, {day}")]
    Overlap {
        id: BookingId,
        court: CourtId,
        day: Day,
    },
    #[error("no booking with id {0}")]
    NotFound(BookingId),
    #[error("booking {0} is not active")]
    NotActive(BookingId),
    #[error("booking {0} belongs to another user")]
    Forbidden(BookingId),
    #[error("{0}")]
    Grid(#[from] GridError),
    #[error("{0}")]
    Index(#[from] IndexError),
    #[error("{0}")]
    Ledger(#[from] LedgerError),
}
