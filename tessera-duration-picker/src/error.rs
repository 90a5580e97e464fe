//! Errors reported at the picker's API boundary.

use std::time::Duration;

use thiserror::Error;

/// Contract violations rejected by the duration picker.
///
/// None of these are transient; retrying the same call yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickerError {
    /// The configured minimum is greater than the (effective) maximum.
    #[error("minimum duration {minimum:?} is greater than the maximum duration {maximum:?}")]
    InvertedBounds {
        /// Requested minimum.
        minimum: Duration,
        /// Effective maximum after the maximum policy was applied.
        maximum: Duration,
    },
    /// The maximum has more hours than the hours wheel can index.
    #[error("maximum duration {maximum:?} is larger than the supported limit {limit:?}")]
    MaximumTooLarge {
        /// Requested maximum after the maximum policy was applied.
        maximum: Duration,
        /// Largest supported maximum.
        limit: Duration,
    },
    /// A duration below the configured minimum was selected.
    #[error("cannot select {duration:?}, which is less than the minimum duration {minimum:?}")]
    BelowMinimum {
        /// Rejected duration.
        duration: Duration,
        /// Configured minimum.
        minimum: Duration,
    },
    /// A duration above the configured maximum was selected.
    #[error("cannot select {duration:?}, which is greater than the maximum duration {maximum:?}")]
    AboveMaximum {
        /// Rejected duration.
        duration: Duration,
        /// Configured maximum.
        maximum: Duration,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = PickerError> = std::result::Result<T, E>;
