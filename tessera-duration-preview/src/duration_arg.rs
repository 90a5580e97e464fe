use std::time::Duration;

/// Parses plain seconds (`90`, `90.5`) or `humantime` units (`1h30m`,
/// `45m`, `2h 5s`).
pub fn parse(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("duration must not be empty".to_string());
    }

    if let Ok(secs) = input.parse::<f64>() {
        return Duration::try_from_secs_f64(secs).map_err(|_| {
            format!("invalid duration '{input}': seconds must be finite and non-negative")
        });
    }

    humantime::parse_duration(input).map_err(|err| {
        format!("invalid duration '{input}': {err} (use seconds like 90 or units like 1h30m)")
    })
}

/// Seconds with any fractional part, e.g. `3725s` or `90.5s`.
pub fn format_secs(duration: Duration) -> String {
    format!("{}s", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{format_secs, parse};

    #[test]
    fn plain_seconds() {
        assert_eq!(parse("3725"), Ok(Duration::from_secs(3725)));
        assert_eq!(parse("90.5"), Ok(Duration::from_millis(90_500)));
        assert_eq!(parse("0"), Ok(Duration::ZERO));
    }

    #[test]
    fn unit_form() {
        assert_eq!(parse("1h2m5s"), Ok(Duration::from_secs(3725)));
        assert_eq!(parse("45m"), Ok(Duration::from_secs(2700)));
        assert_eq!(parse("2h 5s"), Ok(Duration::from_secs(7205)));
        assert_eq!(parse("0s"), Ok(Duration::ZERO));
        assert_eq!(parse("1d"), Ok(Duration::from_secs(86_400)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("").is_err());
        assert!(parse("-5").is_err());
        assert!(parse("1h30").is_err());
        assert!(parse("h").is_err());
        assert!(parse("5 parsecs").is_err());
    }

    #[test]
    fn formats_whole_and_fractional_seconds() {
        assert_eq!(format_secs(Duration::from_secs(3725)), "3725s");
        assert_eq!(format_secs(Duration::from_millis(90_500)), "90.5s");
    }
}
