//! Wall-clock sampling and the displayed time value.

use crate::surface::{DigitPosition, Field};
use chrono::Timelike;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;

/// Hours, minutes and seconds as zero-padded two-character strings.
///
/// Equality is exact string equality per field, so `"09"` and `"9"` differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hours: String,
    minutes: String,
    seconds: String,
}

impl ClockTime {
    /// Build from raw field strings, unvalidated.
    pub fn new(
        hours: impl Into<String>,
        minutes: impl Into<String>,
        seconds: impl Into<String>,
    ) -> Self {
        Self {
            hours: hours.into(),
            minutes: minutes.into(),
            seconds: seconds.into(),
        }
    }

    /// Build from numeric components, zero-padding each to two digits.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self::new(
            format!("{hours:02}"),
            format!("{minutes:02}"),
            format!("{seconds:02}"),
        )
    }

    pub fn from_timelike(time: &impl Timelike) -> Self {
        Self::from_hms(time.hour(), time.minute(), time.second())
    }

    pub fn hours(&self) -> &str {
        &self.hours
    }

    pub fn minutes(&self) -> &str {
        &self.minutes
    }

    pub fn seconds(&self) -> &str {
        &self.seconds
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Hours => &self.hours,
            Field::Minutes => &self.minutes,
            Field::Seconds => &self.seconds,
        }
    }

    /// Digit character at `position` of `field`, `None` if the string is too short.
    pub fn digit(&self, field: Field, position: DigitPosition) -> Option<char> {
        self.field(field).chars().nth(position.index())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

/// Errors from parsing `HH:MM:SS`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseClockTimeError {
    #[error("expected HH:MM:SS, got {0:?}")]
    Format(String),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u32 },
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || ParseClockTimeError::Format(s.to_string());
        let parts: Vec<&str> = s.trim().split(':').collect();
        let [hours, minutes, seconds] = parts.as_slice() else {
            return Err(format_err());
        };

        let parse = |part: &str, field: &'static str, max: u32| -> Result<u32, Self::Err> {
            if part.is_empty() || part.len() > 2 || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(format_err());
            }
            let value: u32 = part.parse().map_err(|_| format_err())?;
            if value > max {
                return Err(ParseClockTimeError::OutOfRange { field, value });
            }
            Ok(value)
        };

        Ok(Self::from_hms(
            parse(*hours, "hours", 23)?,
            parse(*minutes, "minutes", 59)?,
            parse(*seconds, "seconds", 59)?,
        ))
    }
}

/// Source of the current wall-clock time
pub trait TimeSource {
    fn now(&self) -> ClockTime;
}

/// Local time from the operating system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> ClockTime {
        ClockTime::from_timelike(&chrono::Local::now())
    }
}

/// Time source that returns whatever it was last set to.
///
/// Clones share the same value, so a handle kept outside a `Clock` can move
/// time forward while the clock owns another handle.
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    current: Rc<RefCell<ClockTime>>,
}

impl ManualTimeSource {
    pub fn new(time: ClockTime) -> Self {
        Self {
            current: Rc::new(RefCell::new(time)),
        }
    }

    pub fn set(&self, time: ClockTime) {
        *self.current.borrow_mut() = time;
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> ClockTime {
        self.current.borrow().clone()
    }
}
