use anyhow::Result;
use serde::Serialize;
use tessera_duration_picker::{DurationConstraintEngine, Wheel};

use crate::{OutputFormat, duration_arg::format_secs, output};

#[derive(Serialize)]
struct RowCounts {
    hours: u32,
    minutes: u32,
    seconds: u32,
    minimum_secs: f64,
    maximum_secs: f64,
}

pub fn execute(engine: &DurationConstraintEngine, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => output::print_json(&RowCounts {
            hours: engine.row_count(Wheel::Hours),
            minutes: engine.row_count(Wheel::Minutes),
            seconds: engine.row_count(Wheel::Seconds),
            minimum_secs: engine.minimum().as_secs_f64(),
            maximum_secs: engine.maximum().as_secs_f64(),
        }),
        OutputFormat::Text => {
            for wheel in Wheel::ALL {
                println!("{wheel}: {}", engine.row_count(wheel));
            }
            output::note(format!(
                "bounds {} ..= {}",
                format_secs(engine.minimum()),
                format_secs(engine.maximum())
            ));
            Ok(())
        }
    }
}
