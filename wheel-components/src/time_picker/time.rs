//! Wall-clock time of day used for initial values and bounds.

use std::{fmt, str::FromStr};

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

const TIME_FORMAT: &str = "%H:%M";

/// Errors produced when building a [`TimeOfDay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// The string was not `HH:MM`.
    #[error("invalid time string: {0}")]
    Parse(#[from] chrono::ParseError),
    /// The hour or minute was out of range.
    #[error("{hour}:{minute} is not a valid time of day")]
    OutOfRange {
        /// Requested hour.
        hour: u32,
        /// Requested minute.
        minute: u32,
    },
}

/// A time of day with minute precision.
///
/// Parses from `"HH:MM"` on the 24-hour clock.
///
/// ```
/// use wheel_components::time_picker::TimeOfDay;
///
/// let time: TimeOfDay = "14:05".parse().unwrap();
/// assert_eq!((time.hour(), time.minute()), (14, 5));
/// assert_eq!(time.hour12(), 2);
/// assert!(time.is_pm());
/// assert_eq!(time.to_string(), "14:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Midnight.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(NaiveTime::MIN);

    /// Creates a time of day, validating both parts.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or(TimeParseError::OutOfRange { hour, minute })
    }

    /// Takes the hour and minute of any chrono time value.
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(NaiveTime::MIN))
    }

    /// Returns the time as a chrono value, seconds zeroed.
    pub fn as_naive_time(self) -> NaiveTime {
        self.0
    }

    /// Hour on the 24-hour clock.
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    /// Minute of the hour.
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Hour on a 0-based 12-hour clock, `0..=11`.
    pub fn hour12(self) -> u32 {
        self.hour() % 12
    }

    /// Whether the time is at or after noon.
    pub fn is_pm(self) -> bool {
        self.0.hour12().0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)?;
        Ok(Self(time))
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::from_timelike(&time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!("09:00".parse::<TimeOfDay>(), TimeOfDay::new(9, 0));
        assert_eq!(" 07:05 ".parse::<TimeOfDay>(), TimeOfDay::new(7, 5));
        assert_eq!("00:00".parse::<TimeOfDay>(), Ok(TimeOfDay::MIDNIGHT));
    }

    #[test]
    fn test_parse_errors() {
        for input in ["", "9", "ab:10", "10:x", "24:00", "12:60"] {
            assert!(
                matches!(input.parse::<TimeOfDay>(), Err(TimeParseError::Parse(_))),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            TimeOfDay::new(24, 0),
            Err(TimeParseError::OutOfRange { hour: 24, minute: 0 })
        );
        assert_eq!(
            TimeOfDay::new(12, 60),
            Err(TimeParseError::OutOfRange {
                hour: 12,
                minute: 60
            })
        );
    }

    #[test]
    fn test_from_chrono_drops_seconds() {
        let time = NaiveTime::from_hms_opt(23, 59, 30).map(TimeOfDay::from);
        assert_eq!(time, TimeOfDay::new(23, 59).ok());
        assert_eq!(
            time.map(|t| t.as_naive_time().second()),
            Some(0)
        );
    }

    #[test]
    fn test_twelve_hour_parts() {
        let noon = TimeOfDay::new(12, 0);
        assert_eq!(noon.map(|t| (t.hour12(), t.is_pm())), Ok((0, true)));
        let eleven = TimeOfDay::new(11, 59);
        assert_eq!(eleven.map(|t| (t.hour12(), t.is_pm())), Ok((11, false)));
    }
}
