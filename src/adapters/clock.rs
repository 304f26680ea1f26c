//! Timestamp source

use chrono::{Local, NaiveDateTime};

/// Creation dates and synthesized confirm dates are written in local time
/// without an offset
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Provider of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Renders a timestamp the way MML date-times are written
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_timestamp_has_no_fraction_or_offset() {
        let timestamp = NaiveDate::from_ymd_opt(2026, 3, 7)
            .and_then(|d| d.and_hms_milli_opt(8, 5, 9, 250))
            .unwrap();
        assert_eq!(format_timestamp(timestamp), "2026-03-07T08:05:09");
    }

    #[test]
    fn test_system_clock_round_trips_through_format() {
        let rendered = format_timestamp(SystemClock.now());
        assert!(NaiveDateTime::parse_from_str(&rendered, TIMESTAMP_FORMAT).is_ok());
    }
}
