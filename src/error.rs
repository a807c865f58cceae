//! Conversion error types

use thiserror::Error;

use crate::time::TimeUnit;

/// Structural malformation of the input string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("a non empty input must be supplied")]
    MissingInput,
    #[error("input should be of format: HH:MM:SS (got {segments} segments)")]
    Structure { segments: usize },
    #[error("input is not parsable, it should be of format: HH:MM:SS ({unit} segment: `{segment}`)")]
    NotNumeric { unit: TimeUnit, segment: String },
}

/// A numerically valid component outside of its domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{unit} arg should be in range of {min}:{max} (got {value})")]
pub struct RangeError {
    pub unit: TimeUnit,
    pub value: i64,
    pub min: u32,
    /// Upper bound, inclusive for hours and exclusive for minutes and seconds
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("invalid time format: {0}")]
    Format(#[from] FormatError),
    #[error("time out of range: {0}")]
    Range(#[from] RangeError),
}

impl ClockError {
    /// Component the error relates to, if any
    pub fn unit(&self) -> Option<TimeUnit> {
        match self {
            Self::Format(FormatError::NotNumeric { unit, .. }) => Some(*unit),
            Self::Format(_) => None,
            Self::Range(range) => Some(range.unit),
        }
    }
}
