// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Rally Contributors

//! The weekly slot grid
//!
//! Bookable time is divided into fixed 30-minute slots inside a configured
//! operating window shared by every day and court. The grid is pure
//! arithmetic: it maps time strings to canonical slot times, slot times to
//! ordinals, and (start, duration) spans to the slot sequences they cover.

use crate::error::GridError;
use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Width of a bookable slot, in minutes
pub const SLOT_MINUTES: u32 = 30;

const TIME_FORMAT: &str = "%I:%M %p";

/// A time of day sitting on a 30-minute slot boundary
///
/// The canonical text form is zero-padded 12-hour time, e.g. `08:00 AM`.
/// Parsing tolerates case and surrounding whitespace; rendering is always
/// canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime(NaiveTime);

impl SlotTime {
    /// Parse an `HH:MM AM/PM` string whose minute sits on a slot boundary
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let canon = text.trim().to_ascii_uppercase();
        let time = NaiveTime::parse_from_str(&canon, TIME_FORMAT)
            .map_err(|_| GridError::InvalidTime(text.trim().to_string()))?;
        if time.minute() % SLOT_MINUTES != 0 {
            return Err(GridError::InvalidTime(text.trim().to_string()));
        }
        Ok(Self(time))
    }

    /// Build from whole minutes past midnight; must be aligned and within
    /// the day
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes >= 24 * 60 || minutes % SLOT_MINUTES != 0 {
            return None;
        }
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).map(Self)
    }

    /// Minutes past midnight
    pub fn minutes_from_midnight(self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    /// Whole minutes from `self` until a strictly later `other`
    pub fn minutes_until(self, other: SlotTime) -> Option<u32> {
        other
            .minutes_from_midnight()
            .checked_sub(self.minutes_from_midnight())
            .filter(|m| *m > 0)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl FromStr for SlotTime {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}

/// The operating window of one day, shared by all days and courts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    open: SlotTime,
    close: SlotTime,
}

impl SlotGrid {
    /// Build a grid over `[open, close)`; `None` when the window is empty
    pub fn new(open: SlotTime, close: SlotTime) -> Option<Self> {
        if close <= open {
            return None;
        }
        Some(Self { open, close })
    }

    /// The stock 08:00 AM to 10:00 PM window
    pub fn standard() -> Self {
        Self {
            open: SlotTime(hm(8, 0)),
            close: SlotTime(hm(22, 0)),
        }
    }

    pub fn open(&self) -> SlotTime {
        self.open
    }

    pub fn close(&self) -> SlotTime {
        self.close
    }

    /// Number of bookable slots per day
    pub fn slot_count(&self) -> usize {
        ((self.close.minutes_from_midnight() - self.open.minutes_from_midnight()) / SLOT_MINUTES)
            as usize
    }

    /// Number of slots a duration spans; the duration must be a positive
    /// multiple of the slot width
    pub fn slots_spanned(minutes: u32) -> Result<usize, GridError> {
        if minutes == 0 || minutes % SLOT_MINUTES != 0 {
            return Err(GridError::InvalidDuration { minutes });
        }
        Ok((minutes / SLOT_MINUTES) as usize)
    }

    /// Parse a time string into its canonical in-window slot time
    pub fn normalize(&self, text: &str) -> Result<SlotTime, GridError> {
        let time = SlotTime::parse(text)?;
        self.slot_index(time)?;
        Ok(time)
    }

    /// Ordinal of a slot within the day's window
    pub fn slot_index(&self, time: SlotTime) -> Result<usize, GridError> {
        let m = time.minutes_from_midnight();
        if m < self.open.minutes_from_midnight() || m >= self.close.minutes_from_midnight() {
            return Err(self.out_of_window(time));
        }
        Ok(((m - self.open.minutes_from_midnight()) / SLOT_MINUTES) as usize)
    }

    /// Start time of the slot at `index`, the inverse of [`slot_index`]
    ///
    /// [`slot_index`]: SlotGrid::slot_index
    pub fn slot_at(&self, index: usize) -> Option<SlotTime> {
        if index >= self.slot_count() {
            return None;
        }
        SlotTime::from_minutes(self.open.minutes_from_midnight() + index as u32 * SLOT_MINUTES)
    }

    /// The ordered slot start times covered by `[start, start + minutes)`
    pub fn covered_slots(&self, start: SlotTime, minutes: u32) -> Result<Vec<SlotTime>, GridError> {
        let span = Self::slots_spanned(minutes)?;
        let first = self.slot_index(start)?;
        let mut slots = Vec::with_capacity(span);
        for ix in first..first + span {
            match self.slot_at(ix) {
                Some(slot) => slots.push(slot),
                None => {
                    let minute = self.open.minutes_from_midnight() + ix as u32 * SLOT_MINUTES;
                    return Err(self.out_of_window(clock_text(minute)));
                }
            }
        }
        Ok(slots)
    }

    /// The exclusive end of `[start, start + minutes)`; may equal the close
    /// of the window
    pub fn end_time(&self, start: SlotTime, minutes: u32) -> Result<SlotTime, GridError> {
        self.covered_slots(start, minutes)?;
        let minute = start.minutes_from_midnight() + minutes;
        SlotTime::from_minutes(minute).ok_or_else(|| self.out_of_window(clock_text(minute)))
    }

    fn out_of_window(&self, time: impl fmt::Display) -> GridError {
        GridError::OutOfWindow {
            time: time.to_string(),
            open: self.open.to_string(),
            close: self.close.to_string(),
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// 12-hour rendering of raw minutes past midnight
fn clock_text(total: u32) -> String {
    let (hour, minute) = (total / 60 % 24, total % 60);
    let (display, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{:02}:{:02} {}", display, minute, suffix)
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
