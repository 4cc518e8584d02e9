use chrono::{DateTime, Local, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::config::ClockConfig;
use crate::digit::DigitPosition;
use crate::error::ClockError;

/// Wall-clock reading as zero-padded two-character strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockDigits {
    pub hour: String,
    pub minute: String,
    pub second: String,
}

impl ClockDigits {
    /// Characters for `positions`, in order.
    pub fn chars_for(&self, positions: &[DigitPosition]) -> String {
        positions.iter().map(|p| p.pick(self)).collect()
    }
}

/// Parses an IANA zone identifier.
pub fn resolve_zone(name: &str) -> Result<Tz, ClockError> {
    name.parse::<Tz>()
        .map_err(|_| ClockError::InvalidTimezone(name.to_string()))
}

/// Reads the digits `config` should display at `instant`.
///
/// The configured zone is resolved first (falling back to the local zone if
/// it does not parse), then the hour is mapped onto the configured cycle,
/// then everything is zero-padded. Pure apart from the fallback's debug log.
pub fn sample(config: &ClockConfig, instant: DateTime<Utc>) -> ClockDigits {
    let (hour, minute, second) = match config.timezone.as_deref() {
        Some(name) => match resolve_zone(name) {
            Ok(tz) => wall_time(instant.with_timezone(&tz)),
            Err(err) => {
                log::debug!("{err}; sampling local time");
                wall_time(instant.with_timezone(&Local))
            }
        },
        None => wall_time(instant.with_timezone(&Local)),
    };

    let hour = config.time_format.display_hour(hour);
    ClockDigits {
        hour: format!("{hour:02}"),
        minute: format!("{minute:02}"),
        second: format!("{second:02}"),
    }
}

fn wall_time<Z: TimeZone>(t: DateTime<Z>) -> (u32, u32, u32) {
    (t.hour(), t.minute(), t.second())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeFormat;

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, s).unwrap()
    }

    fn config(format: TimeFormat, tz: Option<&str>) -> ClockConfig {
        ClockConfig {
            time_format: format,
            timezone: tz.map(str::to_string),
            ..ClockConfig::default()
        }
    }

    #[test]
    fn twenty_four_hour_is_raw_zero_padded() {
        let cfg = config(TimeFormat::H24, Some("UTC"));
        for h in 0..24 {
            for m in 0..60 {
                for s in (0..60).step_by(7) {
                    let d = sample(&cfg, utc(h, m, s));
                    assert_eq!(d.hour, format!("{h:02}"));
                    assert_eq!(d.minute, format!("{m:02}"));
                    assert_eq!(d.second, format!("{s:02}"));
                }
            }
        }
    }

    #[test]
    fn twelve_hour_midnight_and_afternoon() {
        let cfg = config(TimeFormat::H12, Some("UTC"));
        assert_eq!(sample(&cfg, utc(0, 0, 0)).hour, "12");
        assert_eq!(sample(&cfg, utc(12, 30, 0)).hour, "12");
        assert_eq!(sample(&cfg, utc(13, 0, 0)).hour, "01");
        assert_eq!(sample(&cfg, utc(9, 0, 0)).hour, "09");
    }

    #[test]
    fn zone_is_resolved_before_hour_cycle() {
        // 15:30 UTC is 00:30 the next day in Tokyo.
        let cfg = config(TimeFormat::H12, Some("Asia/Tokyo"));
        let d = sample(&cfg, utc(15, 30, 5));
        assert_eq!((d.hour.as_str(), d.minute.as_str(), d.second.as_str()), ("12", "30", "05"));
    }

    #[test]
    fn zone_with_daylight_saving() {
        // New York is on EDT (UTC-4) on 15 March 2024.
        let cfg = config(TimeFormat::H24, Some("America/New_York"));
        assert_eq!(sample(&cfg, utc(14, 5, 9)).hour, "10");
    }

    #[test]
    fn invalid_zone_falls_back_to_local() {
        let instant = utc(14, 5, 9);
        let bad = sample(&config(TimeFormat::H24, Some("Mars/Olympus_Mons")), instant);
        let local = sample(&config(TimeFormat::H24, None), instant);
        assert_eq!(bad, local);
    }

    #[test]
    fn resolve_zone_reports_bad_names() {
        assert!(resolve_zone("Europe/Paris").is_ok());
        assert_eq!(
            resolve_zone("Nowhere/Land"),
            Err(ClockError::InvalidTimezone("Nowhere/Land".into()))
        );
    }

    #[test]
    fn chars_for_positions() {
        let d = sample(&config(TimeFormat::H24, Some("UTC")), utc(14, 5, 9));
        assert_eq!(d.chars_for(DigitPosition::active(false)), "1405");
        assert_eq!(d.chars_for(DigitPosition::active(true)), "140509");
    }
}
