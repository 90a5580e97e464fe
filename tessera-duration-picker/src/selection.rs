//! Wheel positions and their mapping to durations.

use std::{fmt, time::Duration};

use crate::wheel::Wheel;

/// Selected row of each wheel.
///
/// A selection maps to a duration as `hours * 3600 + minutes * 60 + seconds`,
/// computed with integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    /// Row of the hours wheel.
    pub hours: u32,
    /// Row of the minutes wheel.
    pub minutes: u32,
    /// Row of the seconds wheel.
    pub seconds: u32,
}

impl Selection {
    /// All wheels at row zero.
    pub const ZERO: Selection = Selection::new(0, 0, 0);

    /// Creates a selection from explicit rows.
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Splits a duration into wheel rows.
    ///
    /// Fractional seconds are truncated. Returns `None` when the hours do not
    /// fit a `u32` row. No bounds are checked; see
    /// [`DurationConstraintEngine::selection_from_duration`](crate::DurationConstraintEngine::selection_from_duration)
    /// for the checked conversion.
    pub fn from_duration(duration: Duration) -> Option<Self> {
        let secs = duration.as_secs();
        Some(Self {
            hours: u32::try_from(secs / 3600).ok()?,
            minutes: (secs / 60 % 60) as u32,
            seconds: (secs % 60) as u32,
        })
    }

    /// Row currently selected on `wheel`.
    pub const fn row(&self, wheel: Wheel) -> u32 {
        match wheel {
            Wheel::Hours => self.hours,
            Wheel::Minutes => self.minutes,
            Wheel::Seconds => self.seconds,
        }
    }

    /// Moves `wheel` to `row` in place.
    pub fn set_row(&mut self, wheel: Wheel, row: u32) {
        match wheel {
            Wheel::Hours => self.hours = row,
            Wheel::Minutes => self.minutes = row,
            Wheel::Seconds => self.seconds = row,
        }
    }

    /// Returns a copy with `wheel` moved to `row` and the other wheels fixed.
    pub fn with_row(mut self, wheel: Wheel, row: u32) -> Self {
        self.set_row(wheel, row);
        self
    }

    /// Total whole seconds represented by this selection.
    pub fn total_seconds(&self) -> u64 {
        Wheel::ALL
            .into_iter()
            .map(|wheel| u64::from(self.row(wheel)) * wheel.seconds_per_row())
            .sum()
    }

    /// Duration represented by this selection.
    pub fn to_duration(&self) -> Duration {
        Duration::from_secs(self.total_seconds())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}
