//! Minimum/maximum limits of a duration picker.

use std::time::Duration;

use derive_setters::Setters;
use tracing::warn;

use crate::error::{PickerError, Result};

/// Ceiling applied by [`MaximumPolicy::ClampToDay`].
pub const ONE_DAY: Duration = Duration::from_secs(86_400);

/// Largest maximum whose hours wheel still has a `u32` row count.
pub const LARGEST_MAXIMUM: Duration = Duration::from_secs(u32::MAX as u64 * 3600 - 1);

/// How a requested maximum is treated before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaximumPolicy {
    /// Keep the maximum as requested.
    #[default]
    Unbounded,
    /// Clamp the maximum to [`ONE_DAY`].
    ClampToDay,
}

impl MaximumPolicy {
    /// Maps the `clamp_maximum_to_day` switch onto a policy.
    pub const fn from_clamp_flag(clamp_maximum_to_day: bool) -> Self {
        if clamp_maximum_to_day {
            MaximumPolicy::ClampToDay
        } else {
            MaximumPolicy::Unbounded
        }
    }

    /// Effective maximum for a requested one.
    pub fn apply(self, maximum: Duration) -> Duration {
        match self {
            MaximumPolicy::Unbounded => maximum,
            MaximumPolicy::ClampToDay if maximum > ONE_DAY => {
                warn!(requested = ?maximum, "maximum duration clamped to one day");
                ONE_DAY
            }
            MaximumPolicy::ClampToDay => maximum,
        }
    }
}

/// Inclusive range of selectable durations.
///
/// `minimum <= maximum` holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    minimum: Duration,
    maximum: Duration,
}

impl Bounds {
    /// Creates bounds, rejecting `minimum > maximum` and maxima past
    /// [`LARGEST_MAXIMUM`].
    pub fn new(minimum: Duration, maximum: Duration) -> Result<Self> {
        if maximum > LARGEST_MAXIMUM {
            return Err(PickerError::MaximumTooLarge {
                maximum,
                limit: LARGEST_MAXIMUM,
            });
        }
        if minimum > maximum {
            return Err(PickerError::InvertedBounds { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    /// Creates bounds after passing `maximum` through `policy`.
    pub fn with_policy(minimum: Duration, maximum: Duration, policy: MaximumPolicy) -> Result<Self> {
        Self::new(minimum, policy.apply(maximum))
    }

    /// Smallest selectable duration.
    pub fn minimum(&self) -> Duration {
        self.minimum
    }

    /// Largest selectable duration.
    pub fn maximum(&self) -> Duration {
        self.maximum
    }

    /// Whether `duration` lies within the bounds.
    pub fn contains(&self, duration: Duration) -> bool {
        (self.minimum..=self.maximum).contains(&duration)
    }

    /// Fails with the matching error when `duration` is out of bounds.
    pub fn check(&self, duration: Duration) -> Result<()> {
        if duration < self.minimum {
            return Err(PickerError::BelowMinimum {
                duration,
                minimum: self.minimum,
            });
        }
        if duration > self.maximum {
            return Err(PickerError::AboveMaximum {
                duration,
                maximum: self.maximum,
            });
        }
        Ok(())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            minimum: Duration::ZERO,
            maximum: ONE_DAY,
        }
    }
}

/// Configuration for a [`DurationConstraintEngine`](crate::DurationConstraintEngine).
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
pub struct PickerOptions {
    /// Smallest duration accepted by `select_duration`.
    pub minimum: Duration,
    /// Largest duration reachable on the wheels.
    pub maximum: Duration,
    /// Clamp `maximum` to one day whenever it is written.
    pub clamp_maximum_to_day: bool,
    /// Whether correction moves ask the host to animate.
    pub animate_corrections: bool,
    /// The host reports its own `move_wheel` calls back as user selections.
    pub host_echoes_moves: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            minimum: Duration::ZERO,
            maximum: ONE_DAY,
            clamp_maximum_to_day: false,
            animate_corrections: true,
            host_echoes_moves: false,
        }
    }
}

impl PickerOptions {
    /// Policy selected by [`PickerOptions::clamp_maximum_to_day`].
    pub fn maximum_policy(&self) -> MaximumPolicy {
        MaximumPolicy::from_clamp_flag(self.clamp_maximum_to_day)
    }

    /// Validated bounds described by these options.
    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::with_policy(self.minimum, self.maximum, self.maximum_policy())
    }
}
