use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use owo_colors::OwoColorize;
use serde::Serialize;
use tessera_duration_picker::{DurationConstraintEngine, RowStyle, Selection, Wheel};

use crate::duration_arg::format_secs;

const STATUS_WIDTH: usize = 12;

pub fn status(label: &str, message: impl AsRef<str>) {
    println!(
        "{:>width$} {}",
        style(label).green().bold(),
        message.as_ref(),
        width = STATUS_WIDTH
    );
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("error").red().bold(), message.as_ref());
}

pub fn note(message: impl AsRef<str>) {
    println!("{}: {}", style("note").blue().bold(), message.as_ref());
}

pub fn step(message: impl AsRef<str>) {
    println!("    {}", message.as_ref());
}

pub fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Label of `row`, dimmed when it would exceed the maximum.
pub fn styled_label(engine: &DurationConstraintEngine, row: u32, wheel: Wheel) -> String {
    let label = engine.label_text(row, wheel);
    match engine.row_style(row, wheel) {
        RowStyle::Dimmed if console::colors_enabled() => label.dimmed().to_string(),
        _ => label,
    }
}

pub fn describe(selection: Selection) -> String {
    format!("{selection} ({})", format_secs(selection.to_duration()))
}

#[derive(Serialize)]
pub struct SelectionReport {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub duration_secs: f64,
}

impl From<Selection> for SelectionReport {
    fn from(selection: Selection) -> Self {
        Self {
            hours: selection.hours,
            minutes: selection.minutes,
            seconds: selection.seconds,
            duration_secs: selection.to_duration().as_secs_f64(),
        }
    }
}

/// First row shown for `wheel` so that its selected row sits mid-window.
fn window_start(engine: &DurationConstraintEngine, wheel: Wheel, window: u32) -> u32 {
    let count = engine.row_count(wheel);
    let selected = engine.selection().row(wheel);
    let start = selected.saturating_sub(window / 2);
    start.min(count.saturating_sub(window))
}

/// Renders the three wheels side by side.
pub fn wheel_table(engine: &DurationConstraintEngine, window: u32) -> Table {
    let window = window.max(1);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(Wheel::ALL.map(|wheel| {
            Cell::new(format!("{wheel} ({})", engine.row_count(wheel)))
                .add_attribute(Attribute::Bold)
        }));

    let starts = Wheel::ALL.map(|wheel| window_start(engine, wheel, window));
    let selection = engine.selection();
    for offset in 0..window {
        let cells = Wheel::ALL.into_iter().zip(starts).map(|(wheel, start)| {
            let row = start + offset;
            if row >= engine.row_count(wheel) {
                return Cell::new("");
            }
            let selected = selection.row(wheel) == row;
            let text = if selected {
                format!("> {}", engine.label_text(row, wheel))
            } else {
                format!("  {}", engine.label_text(row, wheel))
            };
            let cell = Cell::new(text);
            let cell = match engine.row_style(row, wheel) {
                RowStyle::Enabled => cell,
                RowStyle::Dimmed => cell.fg(Color::DarkGrey),
            };
            if selected {
                cell.add_attribute(Attribute::Bold)
            } else {
                cell
            }
        });
        table.add_row(cells);
    }
    table
}
