use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use tessera_duration_picker::DurationConstraintEngine;

use crate::{OutputFormat, host::TerminalHost, output};

#[derive(Serialize)]
struct MoveReport {
    wheel: String,
    row: u32,
    animated: bool,
}

#[derive(Serialize)]
struct SelectReport {
    selection: output::SelectionReport,
    moves: Vec<MoveReport>,
}

pub fn execute(
    engine: &mut DurationConstraintEngine,
    duration: Duration,
    animated: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut host = TerminalHost::default();
    let selection = engine.select_duration(duration, animated, &mut host)?;

    match format {
        OutputFormat::Json => output::print_json(&SelectReport {
            selection: selection.into(),
            moves: host
                .moves
                .iter()
                .map(|wheel_move| MoveReport {
                    wheel: wheel_move.wheel.to_string(),
                    row: wheel_move.row,
                    animated: wheel_move.animated,
                })
                .collect(),
        }),
        OutputFormat::Text => {
            output::status("Selected", output::describe(selection));
            for wheel_move in &host.moves {
                output::step(format!(
                    "{} -> {}{}",
                    wheel_move.wheel,
                    output::styled_label(engine, wheel_move.row, wheel_move.wheel),
                    if wheel_move.animated { " (animated)" } else { "" }
                ));
            }
            Ok(())
        }
    }
}
