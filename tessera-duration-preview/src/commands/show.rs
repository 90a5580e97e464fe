use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use tessera_duration_picker::{DurationConstraintEngine, RowStyle, Wheel};

use crate::{OutputFormat, host::TerminalHost, output};

#[derive(Serialize)]
struct WheelRows {
    wheel: String,
    row_count: u32,
    selected: u32,
    /// Largest row that keeps the selection under the maximum.
    last_enabled: Option<u32>,
}

#[derive(Serialize)]
struct ShowReport {
    selection: output::SelectionReport,
    wheels: Vec<WheelRows>,
}

pub fn execute(
    engine: &mut DurationConstraintEngine,
    at: Option<Duration>,
    window: u32,
    format: OutputFormat,
) -> Result<()> {
    if let Some(at) = at {
        engine.select_duration(at, false, &mut TerminalHost::default())?;
    }

    match format {
        OutputFormat::Json => {
            let wheels = Wheel::ALL
                .into_iter()
                .map(|wheel| WheelRows {
                    wheel: wheel.to_string(),
                    row_count: engine.row_count(wheel),
                    selected: engine.selection().row(wheel),
                    last_enabled: (0..engine.row_count(wheel))
                        .rev()
                        .find(|&row| engine.row_style(row, wheel) == RowStyle::Enabled),
                })
                .collect();
            output::print_json(&ShowReport {
                selection: engine.selection().into(),
                wheels,
            })
        }
        OutputFormat::Text => {
            println!("{}", output::wheel_table(engine, window));
            output::status("Selected", output::describe(engine.selection()));
            Ok(())
        }
    }
}
