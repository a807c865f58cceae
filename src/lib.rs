//! `berlin_clock` converts a clock time into the lamp rows of the
//! [Berlin Clock](https://en.wikipedia.org/wiki/Mengenlehreuhr).
//!
//! # Structure
//!
//! The input `HH:MM:SS` is parsed and validated into [time::TimeComponents], each row is then
//! built independently by the functions of [row], and [display::ClockDisplay] joins the five
//! rows (seconds, hours top, hours bottom, minutes top, minutes bottom) into text.
//!
//! ```
//! assert_eq!(
//!     berlin_clock::convert("11:30:45").unwrap(),
//!     "O\nRROO\nROOO\nYYRYYROOOOO\nOOOO"
//! );
//! ```
//!
//! # License
//!
//! This source code is released under the [MIT-License](https://opensource.org/licenses/MIT)

#[macro_use]
extern crate tracing;

pub mod config;
pub mod converter;
pub mod display;
pub mod error;
pub mod lamp;
pub mod row;
pub mod time;

pub use converter::{BerlinClock, TimeConverter};
pub use error::{ClockError, FormatError, RangeError};

/// Convert `time` (`HH:MM:SS`) to the five rendered lamp rows, separated by `\n`
pub fn convert(time: &str) -> Result<String, ClockError> {
    BerlinClock::default().convert_time(time)
}
