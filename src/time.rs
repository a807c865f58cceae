//! Parsing and validation of `HH:MM:SS` input

use std::{fmt, str::FromStr};

use chrono::Timelike;
use parse_display::Display;
use strum_macros::EnumIter;

use crate::error::{ClockError, FormatError, RangeError};

/// Separator between the components of the input string
pub const SEGMENT_SEPARATOR: char = ':';

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[display(style = "UPPERCASE")]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// Upper bound of the legal range for this unit
    ///
    /// Hours accept `24` so the end of the day can be written `24:00:00`.
    pub fn max(self) -> u32 {
        match self {
            Self::Hours => 24,
            Self::Minutes | Self::Seconds => 60,
        }
    }

    pub fn max_inclusive(self) -> bool {
        matches!(self, Self::Hours)
    }

    pub fn contains(self, value: i64) -> bool {
        let max = i64::from(self.max());

        if self.max_inclusive() {
            (0..=max).contains(&value)
        } else {
            (0..max).contains(&value)
        }
    }

    fn validate(self, value: i64) -> Result<u32, RangeError> {
        if self.contains(value) {
            Ok(value as u32)
        } else {
            Err(RangeError {
                unit: self,
                value,
                min: 0,
                max: self.max(),
            })
        }
    }

    fn parse_segment(self, segment: &str) -> Result<i64, FormatError> {
        segment.parse().map_err(|_| FormatError::NotNumeric {
            unit: self,
            segment: segment.to_owned(),
        })
    }
}

/// Validated hours, minutes and seconds of one instant
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeComponents {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl TimeComponents {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self, RangeError> {
        Ok(Self {
            hours: TimeUnit::Hours.validate(hours.into())?,
            minutes: TimeUnit::Minutes.validate(minutes.into())?,
            seconds: TimeUnit::Seconds.validate(seconds.into())?,
        })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn get(&self, unit: TimeUnit) -> u32 {
        match unit {
            TimeUnit::Hours => self.hours,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Seconds => self.seconds,
        }
    }
}

impl fmt::Display for TimeComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for TimeComponents {
    type Err = ClockError;

    /// Parse `HH:MM:SS`
    ///
    /// Every segment is checked for well-formedness before any range check, so a malformed
    /// input is always reported as a [FormatError] even if another segment is out of range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FormatError::MissingInput.into());
        }

        let segments: Vec<&str> = s.split(SEGMENT_SEPARATOR).collect();
        let (hours, minutes, seconds) = match segments.as_slice() {
            [hours, minutes, seconds] => (
                TimeUnit::Hours.parse_segment(hours)?,
                TimeUnit::Minutes.parse_segment(minutes)?,
                TimeUnit::Seconds.parse_segment(seconds)?,
            ),
            other => {
                return Err(FormatError::Structure {
                    segments: other.len(),
                }
                .into())
            }
        };

        Ok(Self {
            hours: TimeUnit::Hours.validate(hours)?,
            minutes: TimeUnit::Minutes.validate(minutes)?,
            seconds: TimeUnit::Seconds.validate(seconds)?,
        })
    }
}

impl<T: Timelike> From<&T> for TimeComponents {
    fn from(time: &T) -> Self {
        Self {
            hours: time.hour(),
            minutes: time.minute(),
            seconds: time.second(),
        }
    }
}
