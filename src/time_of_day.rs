use jiff::civil::Time;

use crate::error::{Error, Result};

/// 24-hour `HH:mm`, the format of the time input control.
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_time_of_day(input: &str) -> Result<Time> {
    Time::strptime(TIME_FORMAT, input.trim()).map_err(|source| Error::InvalidTime {
        input: input.to_string(),
        source,
    })
}

pub fn format_time_of_day(time: Time) -> String {
    time.strftime(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn test_parse_hours_and_minutes() {
        assert_eq!(parse_time_of_day("09:30").unwrap(), time(9, 30, 0, 0));
        assert_eq!(parse_time_of_day("23:59").unwrap(), time(23, 59, 0, 0));
        assert_eq!(parse_time_of_day("00:00").unwrap(), time(0, 0, 0, 0));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "abc", "25:00", "12:60", "12:30pm"] {
            let err = parse_time_of_day(input).unwrap_err();
            assert!(matches!(err, Error::InvalidTime { .. }), "{input:?}");
        }
    }

    #[test]
    fn test_format_drops_seconds() {
        assert_eq!(format_time_of_day(time(7, 5, 42, 0)), "07:05");
        assert_eq!(format_time_of_day(time(18, 0, 0, 0)), "18:00");
    }
}
