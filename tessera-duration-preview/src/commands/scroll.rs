use std::{sync::Arc, time::Duration};

use anyhow::Result;
use parking_lot::Mutex;
use serde::Serialize;
use tessera_duration_picker::{DurationConstraintEngine, RowChange, Wheel};

use crate::{OutputFormat, duration_arg::format_secs, host::TerminalHost, output};

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ScrollReport {
    Committed {
        selection: output::SelectionReport,
        notified_secs: Vec<f64>,
        reloads: usize,
    },
    Corrected {
        wheel: String,
        requested_row: u32,
        row: u32,
        animated: bool,
        selection: output::SelectionReport,
    },
    Unchanged,
}

pub fn execute(
    engine: &mut DurationConstraintEngine,
    wheel: Wheel,
    row: u32,
    at: Option<Duration>,
    format: OutputFormat,
) -> Result<()> {
    let mut host = TerminalHost::default();
    if let Some(at) = at {
        engine.select_duration(at, false, &mut host)?;
        host.clear();
    }

    let notified = Arc::new(Mutex::new(Vec::<Duration>::new()));
    let sink = Arc::clone(&notified);
    let listener = Arc::new(move |duration: Duration| sink.lock().push(duration));
    engine.set_listener(&listener);

    let change = engine.handle_user_selected_row(row, wheel, &mut host);
    let notified = notified.lock().clone();

    match format {
        OutputFormat::Json => output::print_json(&match change {
            RowChange::Committed(_) => ScrollReport::Committed {
                selection: engine.selection().into(),
                notified_secs: notified.iter().map(Duration::as_secs_f64).collect(),
                reloads: host.reloads,
            },
            RowChange::Corrected { wheel, row: corrected } => ScrollReport::Corrected {
                wheel: wheel.to_string(),
                requested_row: row,
                row: corrected,
                animated: host.moves.iter().any(|wheel_move| wheel_move.animated),
                selection: engine.selection().into(),
            },
            RowChange::Unchanged => ScrollReport::Unchanged,
        }),
        OutputFormat::Text => {
            match change {
                RowChange::Committed(_) => {
                    output::status("Committed", output::describe(engine.selection()));
                    for duration in &notified {
                        output::step(format!(
                            "listener: on_duration_selected({})",
                            format_secs(*duration)
                        ));
                    }
                }
                RowChange::Corrected { wheel, row: corrected } => {
                    output::status(
                        "Corrected",
                        format!(
                            "{wheel} {} -> {} (exceeds maximum {})",
                            output::styled_label(engine, row, wheel),
                            engine.label_text(corrected, wheel),
                            format_secs(engine.maximum())
                        ),
                    );
                    output::step("listener: not notified");
                }
                RowChange::Unchanged => {
                    output::status("Unchanged", output::describe(engine.selection()));
                }
            }
            Ok(())
        }
    }
}
