//! Constraint and synchronization logic for duration wheels.
//!
//! ## Usage
//!
//! Own one [`DurationConstraintEngine`] per picker. Render rows from
//! [`row_count`](DurationConstraintEngine::row_count) and
//! [`row_style`](DurationConstraintEngine::row_style), and forward every user
//! scroll to [`handle_user_selected_row`](DurationConstraintEngine::handle_user_selected_row).
//!
//! Only the maximum gates rows while the user scrolls. The minimum is enforced
//! by [`select_duration`](DurationConstraintEngine::select_duration) alone, so
//! interactive scrolling may commit a duration below the minimum.

use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use tracing::{debug, error, trace};

use crate::{
    bounds::{Bounds, LARGEST_MAXIMUM, MaximumPolicy, PickerOptions},
    error::{PickerError, Result},
    host::{DurationListener, MoveReason, PickerHost, RowStyle, WheelMove},
    selection::Selection,
    wheel::Wheel,
};

/// Outcome of [`DurationConstraintEngine::handle_user_selected_row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChange {
    /// The row was accepted and the listener was told about this duration.
    Committed(Duration),
    /// The row exceeded the maximum; the wheel was moved to `row` instead.
    Corrected {
        /// Wheel that was corrected.
        wheel: Wheel,
        /// Row the wheel now shows.
        row: u32,
    },
    /// The event echoed the engine's own correction and was ignored. Only
    /// returned when the host echoes moves.
    Unchanged,
}

/// Keeps three duration wheels consistent with a minimum/maximum range.
#[derive(Debug)]
pub struct DurationConstraintEngine {
    bounds: Bounds,
    policy: MaximumPolicy,
    animate_corrections: bool,
    host_echoes_moves: bool,
    selection: Selection,
    listener: Option<Weak<dyn DurationListener>>,
    pending_correction: Option<(Wheel, u32)>,
}

impl DurationConstraintEngine {
    /// Creates an engine with every wheel at row zero.
    pub fn new(options: &PickerOptions) -> Result<Self> {
        Ok(Self {
            bounds: options.bounds()?,
            policy: options.maximum_policy(),
            animate_corrections: options.animate_corrections,
            host_echoes_moves: options.host_echoes_moves,
            selection: Selection::ZERO,
            listener: None,
            pending_correction: None,
        })
    }

    /// Current bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Smallest duration accepted by [`select_duration`](Self::select_duration).
    pub fn minimum(&self) -> Duration {
        self.bounds.minimum()
    }

    /// Largest duration reachable on the wheels.
    pub fn maximum(&self) -> Duration {
        self.bounds.maximum()
    }

    /// Policy applied whenever the maximum is written.
    pub fn maximum_policy(&self) -> MaximumPolicy {
        self.policy
    }

    /// Rows the wheels currently show.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Duration of the current selection.
    pub fn duration(&self) -> Duration {
        self.duration_from_selection(self.selection)
    }

    /// Registers the single listener, replacing any previous one.
    ///
    /// Only a weak reference is kept; the caller keeps `listener` alive.
    pub fn set_listener<L>(&mut self, listener: &Arc<L>)
    where
        L: DurationListener + 'static,
    {
        let listener = Arc::downgrade(listener);
        self.listener = Some(listener);
    }

    /// Registers an already downgraded listener.
    pub fn set_listener_weak(&mut self, listener: Weak<dyn DurationListener>) {
        self.listener = Some(listener);
    }

    /// Removes the listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Whether a listener is registered and still alive.
    pub fn has_listener(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|listener| listener.strong_count() > 0)
    }

    /// Number of rows `wheel` should display for the current maximum.
    ///
    /// Never zero. Minutes and seconds stop at 60 rows however large the
    /// maximum is.
    pub fn row_count(&self, wheel: Wheel) -> u32 {
        let max_secs = self.bounds.maximum().as_secs();
        match wheel {
            Wheel::Hours => u32::try_from(max_secs / 3600 + 1).unwrap_or(u32::MAX),
            Wheel::Minutes => (max_secs / 60).clamp(1, 60) as u32,
            Wheel::Seconds => max_secs.clamp(1, 60) as u32,
        }
    }

    /// Duration represented by `selection`.
    pub fn duration_from_selection(&self, selection: Selection) -> Duration {
        selection.to_duration()
    }

    /// Splits `duration` into wheel rows, failing when it is out of bounds.
    pub fn selection_from_duration(&self, duration: Duration) -> Result<Selection> {
        self.bounds.check(duration)?;
        Selection::from_duration(duration).ok_or(PickerError::AboveMaximum {
            duration,
            maximum: self.bounds.maximum(),
        })
    }

    /// Whether `candidate_row` on `wheel`, with the other wheels held where
    /// `selection` has them, stays within the maximum.
    pub fn is_row_valid(&self, candidate_row: u32, wheel: Wheel, selection: Selection) -> bool {
        selection.with_row(wheel, candidate_row).to_duration() <= self.bounds.maximum()
    }

    /// [`is_row_valid`](Self::is_row_valid) against the current selection.
    pub fn is_current_row_valid(&self, row: u32, wheel: Wheel) -> bool {
        self.is_row_valid(row, wheel, self.selection)
    }

    /// Styling hint for the label of `row` on `wheel`.
    pub fn row_style(&self, row: u32, wheel: Wheel) -> RowStyle {
        if self.is_current_row_valid(row, wheel) {
            RowStyle::Enabled
        } else {
            RowStyle::Dimmed
        }
    }

    /// Label of `row` on `wheel`, e.g. `"1 h"`.
    pub fn label_text(&self, row: u32, wheel: Wheel) -> String {
        wheel.label(row)
    }

    /// Largest valid row strictly below `candidate_row`.
    ///
    /// Returns `None` when no row down to zero is valid, which only happens if
    /// `selection` already exceeds the maximum on the other wheels.
    pub fn nearest_valid_row(
        &self,
        candidate_row: u32,
        wheel: Wheel,
        selection: Selection,
    ) -> Option<u32> {
        let ceiling = candidate_row.checked_sub(1)?;
        // Validity is monotonic in the row, so the answer is the smaller of the
        // ceiling and the last row that still fits under the maximum.
        let others = selection.with_row(wheel, 0).total_seconds();
        let headroom = self.bounds.maximum().as_secs().checked_sub(others)?;
        let last_fitting = headroom / wheel.seconds_per_row();
        Some(u32::try_from(last_fitting).map_or(ceiling, |row| row.min(ceiling)))
    }

    /// Moves every wheel to show `duration`.
    ///
    /// `animated` is forwarded to the host as is. The listener is not
    /// notified.
    pub fn select_duration<H>(
        &mut self,
        duration: Duration,
        animated: bool,
        host: &mut H,
    ) -> Result<Selection>
    where
        H: PickerHost + ?Sized,
    {
        let selection = self.selection_from_duration(duration)?;
        debug!(?duration, %selection, "selecting duration");
        self.selection = selection;
        self.pending_correction = None;
        for wheel in Wheel::ALL {
            host.move_wheel(WheelMove {
                wheel,
                row: selection.row(wheel),
                animated,
                reason: MoveReason::Programmatic,
            });
        }
        Ok(selection)
    }

    /// Applies a row the user scrolled `wheel` to.
    ///
    /// A row that would exceed the maximum is snapped down to the nearest
    /// valid row and the host is asked to show it; nothing is committed. A
    /// valid row is committed, the host reloads all wheels, and the listener
    /// receives the new duration.
    ///
    /// With [`PickerOptions::host_echoes_moves`] set, the first event that
    /// repeats a correction is treated as the host's echo and ignored.
    /// Otherwise every event is a user selection, including one that lands on
    /// the corrected row.
    ///
    /// # Panics
    ///
    /// Panics if no valid row exists below `row`. The engine keeps its
    /// selection under the maximum, so this indicates corrupted state.
    pub fn handle_user_selected_row<H>(&mut self, row: u32, wheel: Wheel, host: &mut H) -> RowChange
    where
        H: PickerHost + ?Sized,
    {
        if self.pending_correction.take() == Some((wheel, row)) && self.selection.row(wheel) == row
        {
            trace!(%wheel, row, "ignoring echoed correction");
            return RowChange::Unchanged;
        }

        if !self.is_row_valid(row, wheel, self.selection) {
            let selection = self.selection;
            let Some(corrected) = self.nearest_valid_row(row, wheel, selection) else {
                error!(%wheel, row, %selection, maximum = ?self.bounds.maximum(), "no valid row to fall back to");
                panic!("no valid {wheel} row below {row} for selection {selection}");
            };
            debug!(%wheel, row, corrected, "row exceeds maximum, correcting");
            self.selection.set_row(wheel, corrected);
            if self.host_echoes_moves {
                self.pending_correction = Some((wheel, corrected));
            }
            host.move_wheel(WheelMove {
                wheel,
                row: corrected,
                animated: self.animate_corrections,
                reason: MoveReason::Correction,
            });
            return RowChange::Corrected {
                wheel,
                row: corrected,
            };
        }

        self.selection.set_row(wheel, row);
        let duration = self.duration();
        debug!(%wheel, row, ?duration, "committed selection");
        host.reload_wheels();
        self.notify(duration);
        RowChange::Committed(duration)
    }

    /// Replaces the bounds, passing the maximum through the engine's policy.
    ///
    /// If the current selection no longer fits under the new maximum it is
    /// moved to the maximum itself. On error nothing changes.
    pub fn set_bounds<H>(&mut self, minimum: Duration, maximum: Duration, host: &mut H) -> Result<()>
    where
        H: PickerHost + ?Sized,
    {
        let bounds = Bounds::with_policy(minimum, maximum, self.policy)?;
        let snapped = Selection::from_duration(bounds.maximum()).ok_or(
            PickerError::MaximumTooLarge {
                maximum: bounds.maximum(),
                limit: LARGEST_MAXIMUM,
            },
        )?;
        self.bounds = bounds;
        self.pending_correction = None;

        if self.selection.to_duration() > bounds.maximum() {
            debug!(from = %self.selection, to = %snapped, "selection exceeds new maximum");
            for wheel in Wheel::ALL {
                if snapped.row(wheel) != self.selection.row(wheel) {
                    host.move_wheel(WheelMove {
                        wheel,
                        row: snapped.row(wheel),
                        animated: false,
                        reason: MoveReason::Reconfigured,
                    });
                }
            }
            self.selection = snapped;
        }

        host.reload_wheels();
        Ok(())
    }

    /// Replaces the maximum; see [`set_bounds`](Self::set_bounds).
    pub fn set_maximum<H>(&mut self, maximum: Duration, host: &mut H) -> Result<()>
    where
        H: PickerHost + ?Sized,
    {
        self.set_bounds(self.bounds.minimum(), maximum, host)
    }

    /// Replaces the minimum; see [`set_bounds`](Self::set_bounds).
    pub fn set_minimum<H>(&mut self, minimum: Duration, host: &mut H) -> Result<()>
    where
        H: PickerHost + ?Sized,
    {
        self.set_bounds(minimum, self.bounds.maximum(), host)
    }

    fn notify(&self, duration: Duration) {
        match self.listener.as_ref().and_then(Weak::upgrade) {
            Some(listener) => listener.on_duration_selected(duration),
            None => trace!(?duration, "no live listener for committed duration"),
        }
    }
}

impl Default for DurationConstraintEngine {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            policy: MaximumPolicy::default(),
            animate_corrections: PickerOptions::default().animate_corrections,
            host_echoes_moves: PickerOptions::default().host_echoes_moves,
            selection: Selection::ZERO,
            listener: None,
            pending_correction: None,
        }
    }
}
