use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tessera_duration_picker::PickerOptions;

use crate::duration_arg;

/// Contents of a preview configuration file.
///
/// ```toml
/// [picker]
/// minimum = 0
/// maximum = "24h"
/// clamp_maximum_to_day = false
/// animated = true
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    pub picker: PickerSection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerSection {
    pub minimum: Option<DurationValue>,
    pub maximum: Option<DurationValue>,
    pub clamp_maximum_to_day: bool,
    /// Animate correction moves.
    pub animated: bool,
}

impl Default for PickerSection {
    fn default() -> Self {
        let defaults = PickerOptions::default();
        Self {
            minimum: None,
            maximum: None,
            clamp_maximum_to_day: defaults.clamp_maximum_to_day,
            animated: defaults.animate_corrections,
        }
    }
}

/// A duration written either as seconds or as a unit string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(f64),
    Text(String),
}

impl DurationValue {
    fn resolve(&self, key: &str) -> Result<Duration> {
        match self {
            DurationValue::Seconds(secs) => Duration::try_from_secs_f64(*secs)
                .map_err(|_| anyhow!("picker.{key} must be a non-negative number of seconds")),
            DurationValue::Text(text) => {
                duration_arg::parse(text).map_err(|err| anyhow!("picker.{key}: {err}"))
            }
        }
    }
}

/// Command-line values that take precedence over the file.
pub struct Overrides {
    pub minimum: Option<Duration>,
    pub maximum: Option<Duration>,
    pub clamp_to_day: bool,
}

impl PreviewConfig {
    pub fn picker_options(&self, overrides: &Overrides) -> Result<PickerOptions> {
        let mut options = PickerOptions::default()
            .clamp_maximum_to_day(self.picker.clamp_maximum_to_day || overrides.clamp_to_day)
            .animate_corrections(self.picker.animated);

        if let Some(minimum) = overrides.minimum {
            options = options.minimum(minimum);
        } else if let Some(minimum) = &self.picker.minimum {
            options = options.minimum(minimum.resolve("minimum")?);
        }

        if let Some(maximum) = overrides.maximum {
            options = options.maximum(maximum);
        } else if let Some(maximum) = &self.picker.maximum {
            options = options.maximum(maximum.resolve("maximum")?);
        }

        Ok(options)
    }
}

pub fn load_from_path(path: &Path) -> Result<PreviewConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Loads `path` when given, otherwise falls back to defaults.
pub fn load(path: Option<&Path>) -> Result<PreviewConfig> {
    match path {
        Some(path) => {
            let config = load_from_path(path)?;
            tracing::debug!(path = %path.display(), ?config, "loaded picker config");
            Ok(config)
        }
        None => Ok(PreviewConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Overrides, PreviewConfig};

    fn no_overrides() -> Overrides {
        Overrides {
            minimum: None,
            maximum: None,
            clamp_to_day: false,
        }
    }

    #[test]
    fn reads_seconds_and_unit_strings() {
        let config: PreviewConfig = toml::from_str(
            "[picker]\nminimum = 90\nmaximum = \"1h30m\"\nanimated = false\n",
        )
        .expect("valid config");
        let options = config
            .picker_options(&no_overrides())
            .expect("valid options");

        assert_eq!(options.minimum, Duration::from_secs(90));
        assert_eq!(options.maximum, Duration::from_secs(5400));
        assert!(!options.animate_corrections);
        assert!(!options.clamp_maximum_to_day);
    }

    #[test]
    fn command_line_wins_over_file() {
        let config: PreviewConfig =
            toml::from_str("[picker]\nmaximum = 120.5\n").expect("valid config");
        let options = config
            .picker_options(&Overrides {
                minimum: None,
                maximum: Some(Duration::from_secs(60)),
                clamp_to_day: true,
            })
            .expect("valid options");

        assert_eq!(options.maximum, Duration::from_secs(60));
        assert!(options.clamp_maximum_to_day);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config: PreviewConfig = toml::from_str("").expect("valid config");
        let options = config
            .picker_options(&no_overrides())
            .expect("valid options");
        assert_eq!(options, tessera_duration_picker::PickerOptions::default());
    }

    #[test]
    fn rejects_unknown_keys_and_bad_durations() {
        assert!(toml::from_str::<PreviewConfig>("[picker]\nmaxmum = 5\n").is_err());

        let config: PreviewConfig =
            toml::from_str("[picker]\nmaximum = \"soon\"\n").expect("parses as text");
        let err = config
            .picker_options(&no_overrides())
            .expect_err("bad duration");
        assert!(err.to_string().contains("picker.maximum"));
    }
}
