//! Conversion entry points

use crate::{
    config::{Config, RowSeparator},
    display::ClockDisplay,
    error::ClockError,
    time::TimeComponents,
};

/// Converts a textual time into its rendered clock representation
pub trait TimeConverter {
    fn convert_time(&self, time: &str) -> Result<String, ClockError>;
}

/// Berlin Clock converter
///
/// Stateless apart from its rendering options: a single instance can be shared between threads
/// and called any number of times.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BerlinClock {
    separator: RowSeparator,
}

impl BerlinClock {
    pub fn new(separator: RowSeparator) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> RowSeparator {
        self.separator
    }

    /// Parse and validate `time`, then build its lamp rows
    #[instrument(level = "debug")]
    pub fn display(&self, time: &str) -> Result<ClockDisplay, ClockError> {
        let time: TimeComponents = time.parse()?;
        trace!(%time, "parsed time");

        Ok(ClockDisplay::new(&time))
    }
}

impl From<&Config> for BerlinClock {
    fn from(config: &Config) -> Self {
        Self::new(config.separator)
    }
}

impl TimeConverter for BerlinClock {
    fn convert_time(&self, time: &str) -> Result<String, ClockError> {
        Ok(self.display(time)?.render(self.separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::FormatError,
        row::{HOURS_LAMPS, MINUTES_BOTTOM_LAMPS, MINUTES_TOP_LAMPS, SECONDS_LAMPS},
        time::TimeUnit,
    };

    fn convert(time: &str) -> Result<String, ClockError> {
        BerlinClock::default().convert_time(time)
    }

    fn rows(rendered: &str) -> Vec<&str> {
        rendered.split('\n').collect()
    }

    #[test]
    fn start_of_day() {
        assert_eq!(
            convert("00:00:00").unwrap(),
            "Y\nOOOO\nOOOO\nOOOOOOOOOOO\nOOOO"
        );
    }

    #[test]
    fn first_half_of_day() {
        assert_eq!(
            rows(&convert("11:30:45").unwrap()),
            ["O", "RROO", "ROOO", "YYRYYROOOOO", "OOOO"]
        );
    }

    #[test]
    fn second_half_of_day() {
        assert_eq!(
            rows(&convert("16:42:20").unwrap()),
            ["Y", "RRRO", "ROOO", "YYRYYRYYOOO", "YYOO"]
        );
    }

    #[test]
    fn end_of_day() {
        assert_eq!(
            rows(&convert("23:59:59").unwrap()),
            ["O", "RRRR", "RRRO", "YYRYYRYYRYY", "YYYY"]
        );
        assert_eq!(
            rows(&convert("24:00:00").unwrap()),
            ["Y", "RRRR", "RRRR", "OOOOOOOOOOO", "OOOO"]
        );
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(convert(""), Err(FormatError::MissingInput.into()));
        assert_eq!(
            convert("12:15"),
            Err(FormatError::Structure { segments: 2 }.into())
        );
        assert!(matches!(
            convert("ab:12:50"),
            Err(ClockError::Format(FormatError::NotNumeric { .. }))
        ));
        assert_eq!(convert("25:12:50").unwrap_err().unit(), Some(TimeUnit::Hours));
        assert_eq!(convert("23:72:50").unwrap_err().unit(), Some(TimeUnit::Minutes));
        assert_eq!(convert("23:29:70").unwrap_err().unit(), Some(TimeUnit::Seconds));
    }

    #[test]
    fn crlf_separator() {
        let clock = BerlinClock::new(RowSeparator::CrLf);
        assert_eq!(
            clock.convert_time("16:42:20").unwrap(),
            "Y\r\nRRRO\r\nROOO\r\nYYRYYRYYOOO\r\nYYOO"
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let clock = BerlinClock::default();
        assert_eq!(clock.convert_time("11:30:45"), clock.convert_time("11:30:45"));
    }

    #[test]
    fn every_valid_time() {
        let clock = BerlinClock::default();

        for hours in 0..=24 {
            for minutes in 0..60 {
                for seconds in 0..60 {
                    let input = format!("{:02}:{:02}:{:02}", hours, minutes, seconds);
                    let rendered = clock.convert_time(&input).unwrap();
                    let rows = rows(&rendered);

                    let lengths: Vec<usize> = rows.iter().map(|row| row.len()).collect();
                    assert_eq!(
                        lengths,
                        [
                            SECONDS_LAMPS,
                            HOURS_LAMPS,
                            HOURS_LAMPS,
                            MINUTES_TOP_LAMPS,
                            MINUTES_BOTTOM_LAMPS
                        ]
                    );
                    assert!(rows.iter().all(|row| row.chars().all(|c| "OYR".contains(c))));

                    assert_eq!(rows[0] == "Y", seconds % 2 == 0, "{}", input);

                    for (i, lamp) in rows[3].chars().enumerate() {
                        match lamp {
                            'O' => {}
                            'R' => assert_eq!((i + 1) % 3, 0, "{}", input),
                            _ => assert_ne!((i + 1) % 3, 0, "{}", input),
                        }
                    }

                    let display = clock.display(&input).unwrap();
                    assert_eq!(
                        display.hours_top.lit_count() * 5 + display.hours_bottom.lit_count(),
                        hours as usize
                    );
                    assert_eq!(
                        display.minutes_top.lit_count() * 5 + display.minutes_bottom.lit_count(),
                        minutes as usize
                    );
                }
            }
        }
    }
}
