use tessera_duration_picker::{PickerHost, WheelMove};
use tracing::debug;

/// Host that records the engine's instructions so commands can report them.
#[derive(Default)]
pub struct TerminalHost {
    pub moves: Vec<WheelMove>,
    pub reloads: usize,
}

impl TerminalHost {
    pub fn clear(&mut self) {
        self.moves.clear();
        self.reloads = 0;
    }
}

impl PickerHost for TerminalHost {
    fn move_wheel(&mut self, wheel_move: WheelMove) {
        debug!(
            wheel = %wheel_move.wheel,
            row = wheel_move.row,
            animated = wheel_move.animated,
            reason = ?wheel_move.reason,
            "move wheel"
        );
        self.moves.push(wheel_move);
    }

    fn reload_wheels(&mut self) {
        debug!("reload wheels");
        self.reloads += 1;
    }
}
