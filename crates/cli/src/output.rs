// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Output formatting for CLI commands

use rally_core::Booking;
use rally_engine::{Suggestion, SuggestionKind};

/// One-line rendering of a booking
pub fn booking_line(booking: &Booking) -> String {
    format!(
        "booking {}: court {} on {} from {} to {} ({})",
        booking.id, booking.court, booking.day, booking.start, booking.end, booking.owner
    )
}

/// One-line rendering of a search suggestion
pub fn suggestion_line(suggestion: &Suggestion) -> String {
    let tag = match suggestion.kind {
        SuggestionKind::Preferred => "preferred",
        SuggestionKind::Alternative => "alternative",
    };
    format!("court {} at {} ({})", suggestion.court, suggestion.start, tag)
}
