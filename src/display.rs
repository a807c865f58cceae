//! Five-row clock display and its assembly into text

use std::fmt;

use crate::{
    config::RowSeparator,
    row::{self, LampRow},
    time::TimeComponents,
};

/// Number of rows in a rendered display
pub const ROW_COUNT: usize = 5;

/// Lamp rows for one instant, top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockDisplay {
    pub seconds: LampRow,
    pub hours_top: LampRow,
    pub hours_bottom: LampRow,
    pub minutes_top: LampRow,
    pub minutes_bottom: LampRow,
}

impl ClockDisplay {
    pub fn new(time: &TimeComponents) -> Self {
        Self {
            seconds: row::seconds_row(time.seconds()),
            hours_top: row::hours_top_row(time.hours()),
            hours_bottom: row::hours_bottom_row(time.hours()),
            minutes_top: row::minutes_top_row(time.minutes()),
            minutes_bottom: row::minutes_bottom_row(time.minutes()),
        }
    }

    pub fn rows(&self) -> [&LampRow; ROW_COUNT] {
        [
            &self.seconds,
            &self.hours_top,
            &self.hours_bottom,
            &self.minutes_top,
            &self.minutes_bottom,
        ]
    }

    /// Join the rendered rows with `separator`, without a trailing one
    pub fn render(&self, separator: RowSeparator) -> String {
        self.rows()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

impl From<&TimeComponents> for ClockDisplay {
    fn from(time: &TimeComponents) -> Self {
        Self::new(time)
    }
}

impl fmt::Display for ClockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RowSeparator::Lf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(h: u32, m: u32, s: u32) -> ClockDisplay {
        ClockDisplay::new(&TimeComponents::new(h, m, s).unwrap())
    }

    #[test]
    fn row_order() {
        let display = display(16, 42, 20);
        let rows: Vec<String> = display.rows().iter().map(|row| row.to_string()).collect();

        assert_eq!(rows, ["Y", "RRRO", "ROOO", "YYRYYRYYOOO", "YYOO"]);
    }

    #[test]
    fn render_with_separators() {
        let display = display(0, 0, 0);

        assert_eq!(
            display.render(RowSeparator::Lf),
            "Y\nOOOO\nOOOO\nOOOOOOOOOOO\nOOOO"
        );
        assert_eq!(
            display.render(RowSeparator::CrLf),
            "Y\r\nOOOO\r\nOOOO\r\nOOOOOOOOOOO\r\nOOOO"
        );
        assert_eq!(display.to_string(), display.render(RowSeparator::Lf));
    }

    #[test]
    fn no_trailing_separator() {
        let rendered = display(23, 59, 59).render(RowSeparator::Platform);
        assert!(!rendered.ends_with(RowSeparator::Platform.as_str()));
        assert_eq!(rendered.matches(RowSeparator::Platform.as_str()).count(), ROW_COUNT - 1);
    }
}
