use chrono::{DateTime, Local, TimeZone};

use super::format::{fragment, ICON_CLOCK};

/// Format a timestamp as `HH:MM:SS` or `hh:mm:ss AM/PM`.
pub fn format_clock<Tz: TimeZone>(time: &DateTime<Tz>, use_24h: bool) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let pattern = if use_24h { "%H:%M:%S" } else { "%I:%M:%S %p" };
    fragment(ICON_CLOCK, &time.format(pattern).to_string())
}

/// Current local wall-clock time
pub fn read_clock(use_24h: bool) -> String {
    format_clock(&Local::now(), use_24h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_24h_and_12h_formats() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let time = tz.with_ymd_and_hms(2024, 3, 1, 21, 5, 9).unwrap();

        assert_eq!(format_clock(&time, true), "⏰ 21:05:09");
        assert_eq!(format_clock(&time, false), "⏰ 09:05:09 PM");
    }

    #[test]
    fn test_morning_is_am() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let time = tz.with_ymd_and_hms(2024, 3, 1, 0, 30, 0).unwrap();
        assert_eq!(format_clock(&time, false), "⏰ 12:30:00 AM");
    }
}
