// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! rally-engine: the availability and booking engine
//!
//! This crate provides:
//! - A derived, rebuildable slot-occupancy index
//! - Validated booking creation and cancellation over the ledger
//! - Bounded nearest-alternative search around a taken slot

pub mod availability;
pub mod booking;
pub mod error;
pub mod search;

pub use availability::{AvailabilityIndex, IndexError};
pub use booking::BookingEngine;
pub use error::EngineError;
pub use search::{find_alternatives, Suggestion, SuggestionKind, DEFAULT_SEARCH_WINDOW_MINUTES};
