//! Fuel refuel scheduling.
//!
//! A vehicle must refuel a fixed interval after the given time. The
//! schedule is a pure function of its input: no clock is consulted and no
//! state is kept.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hours between the given time and the next refuel.
pub const REFUEL_INTERVAL_HOURS: i64 = 30;

/// Date-time layouts accepted when no UTC offset is given.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Layouts with a numeric offset that RFC 3339 parsing does not cover.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Error returned when a timestamp cannot be used for scheduling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("malformed timestamp {0:?}: expected an ISO 8601 date-time")]
    Malformed(String),

    #[error("timestamp out of range")]
    OutOfRange,
}

/// An ISO 8601 date-time, with or without a UTC offset.
///
/// The form of the input is kept: a zoned time stays zoned with its
/// offset, and a naive time stays naive.
///
/// # Examples
///
/// ```
/// use logistics_server::domain::FuelTimestamp;
///
/// let zoned = FuelTimestamp::parse("2024-03-09T12:00:00-05:00").unwrap();
/// assert_eq!(zoned.to_string(), "2024-03-09T12:00:00-05:00");
///
/// let naive = FuelTimestamp::parse("2024-03-09 12:00").unwrap();
/// assert_eq!(naive.to_string(), "2024-03-09T12:00:00");
///
/// assert!(FuelTimestamp::parse("next tuesday").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelTimestamp {
    /// A fixed point in time with its UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// A wall-clock time with no offset.
    Naive(NaiveDateTime),
}

impl FuelTimestamp {
    /// Parse an ISO 8601 date-time.
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Zoned(dt));
        }
        for format in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(s, format) {
                return Ok(Self::Zoned(dt));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self::Naive(dt));
            }
        }

        Err(TimestampError::Malformed(s.to_string()))
    }

    /// Add a duration of elapsed time, keeping the offset.
    pub fn checked_add(self, delta: Duration) -> Option<Self> {
        match self {
            Self::Zoned(dt) => dt.checked_add_signed(delta).map(Self::Zoned),
            Self::Naive(dt) => dt.checked_add_signed(delta).map(Self::Naive),
        }
    }
}

impl fmt::Display for FuelTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zoned(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

impl FromStr for FuelTimestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for FuelTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FuelTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// When the next refuel is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefuelSchedule {
    pub current_time: FuelTimestamp,
    pub next_refuel_time: FuelTimestamp,
    pub hours_until_refuel: i64,
}

/// Compute the next refuel time: exactly [`REFUEL_INTERVAL_HOURS`] of
/// elapsed time after `current_time`.
///
/// Fails only if the result falls outside the representable range.
pub fn compute_next_refuel(current_time: FuelTimestamp) -> Result<RefuelSchedule, TimestampError> {
    let next_refuel_time = current_time
        .checked_add(Duration::hours(REFUEL_INTERVAL_HOURS))
        .ok_or(TimestampError::OutOfRange)?;

    Ok(RefuelSchedule {
        current_time,
        next_refuel_time,
        hours_until_refuel: REFUEL_INTERVAL_HOURS,
    })
}
