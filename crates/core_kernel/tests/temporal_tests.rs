//! Unit tests for the Temporal module
//!
//! Tests cover clocks, the trailing window, Timezone month bucketing,
//! and timestamp parsing/formatting.

use chrono::{Duration, TimeZone, Utc};
use core_kernel::temporal::{
    format_timestamp, parse_timestamp, record_precision, within_trailing_days, TRAILING_WINDOW_DAYS,
};
use core_kernel::{Clock, FixedClock, SystemClock, TemporalError, Timezone};

mod clocks {
    use super::*;

    #[test]
    fn test_fixed_clock_is_frozen() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let clock = FixedClock(at);

        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}

mod trailing_window {
    use super::*;

    #[test]
    fn test_recent_timestamp_is_inside() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert!(within_trailing_days(now - Duration::days(30), now, TRAILING_WINDOW_DAYS));
    }

    #[test]
    fn test_boundary_is_excluded() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let boundary = now - Duration::days(TRAILING_WINDOW_DAYS);

        assert!(!within_trailing_days(boundary, now, TRAILING_WINDOW_DAYS));
        assert!(within_trailing_days(
            boundary + Duration::seconds(1),
            now,
            TRAILING_WINDOW_DAYS
        ));
    }
}

mod timezone {
    use super::*;

    #[test]
    fn test_default_is_utc() {
        assert_eq!(Timezone::default(), Timezone::new(chrono_tz::UTC));
    }

    #[test]
    fn test_parse_known_zone() {
        let tz: Timezone = "America/New_York".parse().unwrap();
        assert_eq!(tz, Timezone::new(chrono_tz::America::New_York));
    }

    #[test]
    fn test_parse_unknown_zone() {
        assert!(matches!(
            "Nowhere/Special".parse::<Timezone>(),
            Err(TemporalError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn test_month_key_in_utc() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap();
        assert_eq!(Timezone::default().month_key(ts), "2024-01");
    }

    #[test]
    fn test_month_key_shifts_with_zone() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap();
        let tokyo = Timezone::new(chrono_tz::Asia::Tokyo);
        assert_eq!(tokyo.month_key(ts), "2024-02");
    }
}

mod timestamps {
    use super::*;

    #[test]
    fn test_format_is_rfc3339_utc() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 7).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-15T09:05:07.000000Z");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_timestamp("2024-03-15T10:05:07+01:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 7).unwrap());
    }

    #[test]
    fn test_parse_legacy_space_separated() {
        let parsed = parse_timestamp("2024-03-15 09:05:07.123456").unwrap();
        assert_eq!(parsed.date_naive().to_string(), "2024-03-15");
        assert_eq!(parsed.timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn test_parse_naive_without_fraction() {
        let parsed = parse_timestamp("2024-03-15T09:05:07").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 7).unwrap());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_timestamp("last tuesday"),
            Err(TemporalError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_format_then_parse_keeps_micros() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 7).unwrap() + Duration::microseconds(42);
        assert_eq!(parse_timestamp(&format_timestamp(&ts)).unwrap(), ts);
    }

    #[test]
    fn test_record_precision_drops_nanoseconds() {
        let ts = Utc.timestamp_opt(1_719_835_200, 123_456_789).unwrap();
        let stored = record_precision(ts);

        assert_eq!(stored.timestamp_subsec_nanos(), 123_456_000);
        assert_eq!(parse_timestamp(&format_timestamp(&stored)).unwrap(), stored);
    }
}
