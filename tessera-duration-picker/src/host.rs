//! Seams between the constraint engine and the UI that hosts it.
//!
//! ## Usage
//!
//! Implement [`PickerHost`] on whatever owns the wheel widgets, and register a
//! [`DurationListener`] to hear about committed durations. The engine never
//! renders anything itself; it only tells the host what to move or redraw.

use std::time::Duration;

use crate::wheel::Wheel;

/// Why the engine asks the host to move a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    /// Requested through `select_duration`.
    Programmatic,
    /// The user picked an invalid row and it was snapped to a valid one.
    Correction,
    /// New bounds pushed the selection back under the maximum.
    Reconfigured,
}

/// Instruction to display `row` on `wheel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelMove {
    /// Wheel to move.
    pub wheel: Wheel,
    /// Row to show.
    pub row: u32,
    /// Rendering hint, passed through untouched.
    pub animated: bool,
    /// What triggered the move.
    pub reason: MoveReason,
}

/// Validity-derived styling of a row label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Selectable with the other wheels where they are.
    Enabled,
    /// Would exceed the maximum; hosts usually grey these out.
    Dimmed,
}

/// UI side of a duration picker.
pub trait PickerHost {
    /// Show `wheel_move.row` on `wheel_move.wheel`.
    fn move_wheel(&mut self, wheel_move: WheelMove);

    /// Redraw every wheel. Row styling may change after any commit because the
    /// valid range of one wheel depends on the others.
    fn reload_wheels(&mut self);
}

/// Headless host that ignores every instruction.
impl PickerHost for () {
    fn move_wheel(&mut self, _wheel_move: WheelMove) {}

    fn reload_wheels(&mut self) {}
}

/// Observer of committed duration changes.
///
/// Closures `Fn(Duration)` implement this directly.
pub trait DurationListener: Send + Sync {
    /// Called once per committed selection, never for corrections.
    fn on_duration_selected(&self, duration: Duration);
}

impl<F> DurationListener for F
where
    F: Fn(Duration) + Send + Sync,
{
    fn on_duration_selected(&self, duration: Duration) {
        self(duration);
    }
}
