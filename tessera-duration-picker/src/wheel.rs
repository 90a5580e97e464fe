//! The three wheels of a duration picker.
//!
//! ## Usage
//!
//! Address picker columns by [`Wheel`] instead of raw component indices.
//! Hosts that only know positions can convert with [`Wheel::from_component`].

use std::fmt;

/// One wheel (column) of a duration picker.
///
/// The set is closed: a duration picker always has exactly these three wheels,
/// in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Wheel {
    /// Whole hours.
    Hours,
    /// Minutes within the hour.
    Minutes,
    /// Seconds within the minute.
    Seconds,
}

impl Wheel {
    /// All wheels in component order.
    pub const ALL: [Wheel; 3] = [Wheel::Hours, Wheel::Minutes, Wheel::Seconds];

    /// Positional component index (hours = 0, minutes = 1, seconds = 2).
    pub const fn component(self) -> usize {
        match self {
            Wheel::Hours => 0,
            Wheel::Minutes => 1,
            Wheel::Seconds => 2,
        }
    }

    /// Resolves a positional component index.
    pub const fn from_component(component: usize) -> Option<Self> {
        match component {
            0 => Some(Wheel::Hours),
            1 => Some(Wheel::Minutes),
            2 => Some(Wheel::Seconds),
            _ => None,
        }
    }

    /// Seconds contributed by one row of this wheel.
    pub const fn seconds_per_row(self) -> u64 {
        match self {
            Wheel::Hours => 3600,
            Wheel::Minutes => 60,
            Wheel::Seconds => 1,
        }
    }

    /// Unit suffix rendered after the row number.
    pub const fn unit_suffix(self) -> &'static str {
        match self {
            Wheel::Hours => "h",
            Wheel::Minutes => "m",
            Wheel::Seconds => "s",
        }
    }

    /// Label text for `row`, e.g. `"1 h"`.
    pub fn label(self, row: u32) -> String {
        format!("{row} {}", self.unit_suffix())
    }
}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Wheel::Hours => "hours",
            Wheel::Minutes => "minutes",
            Wheel::Seconds => "seconds",
        })
    }
}
