// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! Nearest-alternative search
//!
//! When a requested (day, court, time) block is taken, explore nearby start
//! times and the rest of the roster for a free block of the same length.
//! The exploration is a bounded worklist over slot offsets with a visited
//! set, so termination never depends on recursion depth.

use crate::availability::AvailabilityIndex;
use crate::error::EngineError;
use rally_core::{CourtId, Day, SlotGrid, SlotTime, SLOT_MINUTES};
use std::collections::HashSet;

/// How far from the preferred time the search widens, in minutes
pub const DEFAULT_SEARCH_WINDOW_MINUTES: u32 = 120;

/// Whether a suggestion matches the original request exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SuggestionKind {
    Preferred,
    Alternative,
}

/// A bookable (court, time) candidate near the original request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub court: CourtId,
    pub start: SlotTime,
    pub kind: SuggestionKind,
}

/// Explore start times around `preferred` on `day`, alternating later and
/// earlier in 30-minute steps within the window
///
/// At each explored time the requested court is tried first, then the rest
/// of the roster in order. A candidate must have the full run of
/// `minutes / 30` consecutive free slots; a lone free slot never satisfies
/// a longer request. Each time is explored at most once, which bounds the
/// search to one pass per slot inside the window. Results are sorted by
/// time, preferred before alternative.
pub fn find_alternatives(
    index: &AvailabilityIndex,
    day: Day,
    court: &CourtId,
    preferred: SlotTime,
    minutes: u32,
    window_minutes: u32,
) -> Result<Vec<Suggestion>, EngineError> {
    let grid = index.grid();
    let span = SlotGrid::slots_spanned(minutes)?;
    let origin = grid.slot_index(preferred)? as i64;

    // Worklist of offsets: 0, +1, -1, +2, -2, ... out to the window edge
    let steps = (window_minutes / SLOT_MINUTES) as i64;
    let mut worklist = Vec::with_capacity(2 * steps as usize + 1);
    worklist.push(0);
    for step in 1..=steps {
        worklist.push(step);
        worklist.push(-step);
    }

    let mut visited = HashSet::new();
    let mut found: Vec<(usize, Suggestion)> = Vec::new();
    for offset in worklist {
        let slot_ix = origin + offset;
        if slot_ix < 0 || slot_ix as usize >= grid.slot_count() {
            continue;
        }
        let slot_ix = slot_ix as usize;
        if !visited.insert(slot_ix) {
            continue;
        }
        let Some(start) = grid.slot_at(slot_ix) else {
            continue;
        };

        for (court_ix, candidate) in candidate_courts(index, court) {
            if !index.free_block(day, court_ix, slot_ix, span) {
                continue;
            }
            let kind = if candidate == court && start == preferred {
                SuggestionKind::Preferred
            } else {
                SuggestionKind::Alternative
            };
            found.push((
                slot_ix,
                Suggestion {
                    court: candidate.clone(),
                    start,
                    kind,
                },
            ));
        }
    }

    found.sort_by_key(|(slot_ix, suggestion)| (*slot_ix, suggestion.kind));
    Ok(found.into_iter().map(|(_, suggestion)| suggestion).collect())
}

/// The requested court first, then the rest of the roster in order
fn candidate_courts<'a>(
    index: &'a AvailabilityIndex,
    requested: &'a CourtId,
) -> impl Iterator<Item = (usize, &'a CourtId)> + 'a {
    let roster = index.roster();
    let first = roster.position(requested).map(|ix| (ix, requested));
    first.into_iter().chain(
        roster
            .courts()
            .iter()
            .enumerate()
            .filter(move |(_, court)| *court != requested),
    )
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
