//! Time handling types
//!
//! This module provides:
//! - `Clock`: the source of "now" for trailing-window calculations
//! - `Timezone`: the reporting timezone used to bucket claims by month
//! - `timestamp`: serde support for record timestamps on disk

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Length of the trailing window used for "recent" claim counts
pub const TRAILING_WINDOW_DAYS: i64 = 365;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by `Utc::now`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Returns true if `timestamp` falls strictly after `now - days`
pub fn within_trailing_days(timestamp: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    timestamp > now - Duration::days(days)
}

/// Timezone wrapper for the office reporting calendar
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s.trim())
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(s.to_string()))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the calendar month (`YYYY-MM`) of a UTC instant in this timezone
    pub fn month_key(&self, utc: DateTime<Utc>) -> String {
        utc.with_timezone(&self.0).format("%Y-%m").to_string()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

/// Sub-second digits kept in stored timestamps
pub const RECORD_SUBSEC_DIGITS: u16 = 6;

/// Formats a timestamp the way records are written to disk
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Drops precision finer than what `format_timestamp` writes
///
/// Records built from this value read back from disk unchanged.
pub fn record_precision(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.trunc_subsecs(RECORD_SUBSEC_DIGITS)
}

/// Parses a record timestamp
///
/// Accepts RFC 3339 with an offset, or a naive `YYYY-MM-DD[T| ]HH:MM:SS[.f]`
/// value which is taken to be UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TemporalError> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TemporalError::InvalidTimestamp(raw.to_string()))
}

/// Serde adapter for record timestamps, used with `#[serde(with = "...")]`
pub mod timestamp {
    use super::*;

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(timestamp))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
