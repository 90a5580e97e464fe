use std::{path::PathBuf, process::ExitCode, time::Duration};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tessera_duration_picker::{DurationConstraintEngine, Wheel};

mod commands;
mod config;
mod duration_arg;
mod host;
mod output;

#[derive(Parser)]
#[command(name = "tessera-duration-preview")]
#[command(version, about = "Preview host for tessera duration pickers", long_about = None)]
struct Cli {
    /// Picker configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Minimum duration, in seconds or units (e.g. 90, 1h30m)
    #[arg(long, global = true, value_parser = duration_arg::parse)]
    min: Option<Duration>,
    /// Maximum duration, in seconds or units (e.g. 86400, 24h)
    #[arg(long, global = true, value_parser = duration_arg::parse)]
    max: Option<Duration>,
    /// Clamp the maximum to one day
    #[arg(long, global = true)]
    clamp_to_day: bool,
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of rows on each wheel
    Rows,
    /// Render the wheels, dimming rows past the maximum
    Show {
        /// Duration to select before rendering
        #[arg(long, value_parser = duration_arg::parse)]
        at: Option<Duration>,
        /// Rows rendered per wheel
        #[arg(long, default_value_t = 12)]
        window: u32,
    },
    /// Select a duration the way the hosting app would
    Select {
        /// Duration to select
        #[arg(value_parser = duration_arg::parse)]
        duration: Duration,
        /// Ask the wheels to animate
        #[arg(long)]
        animated: bool,
    },
    /// Simulate the user scrolling a wheel to a row
    Scroll {
        /// Wheel being scrolled
        #[arg(value_enum)]
        wheel: WheelArg,
        /// Row the user stopped on
        row: u32,
        /// Duration selected before the scroll
        #[arg(long, value_parser = duration_arg::parse)]
        at: Option<Duration>,
    },
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WheelArg {
    #[value(alias = "h")]
    Hours,
    #[value(alias = "m")]
    Minutes,
    #[value(alias = "s")]
    Seconds,
}

impl From<WheelArg> for Wheel {
    fn from(value: WheelArg) -> Self {
        match value {
            WheelArg::Hours => Wheel::Hours,
            WheelArg::Minutes => Wheel::Minutes,
            WheelArg::Seconds => Wheel::Seconds,
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "warn,tessera_duration_picker=debug,tessera_duration_preview=debug"
    } else {
        "off,tessera_duration_picker=info"
    };
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(fallback) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("off"),
        },
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let file_config = config::load(cli.config.as_deref())?;
    let options = file_config.picker_options(&config::Overrides {
        minimum: cli.min,
        maximum: cli.max,
        clamp_to_day: cli.clamp_to_day,
    })?;
    let mut engine = DurationConstraintEngine::new(&options)?;

    match cli.command {
        Commands::Rows => commands::rows::execute(&engine, cli.format)?,
        Commands::Show { at, window } => {
            commands::show::execute(&mut engine, at, window, cli.format)?;
        }
        Commands::Select { duration, animated } => {
            commands::select::execute(&mut engine, duration, animated, cli.format)?;
        }
        Commands::Scroll { wheel, row, at } => {
            commands::scroll::execute(&mut engine, wheel.into(), row, at, cli.format)?;
        }
    }

    Ok(())
}
