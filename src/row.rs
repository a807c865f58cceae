//! Lamp rows and the builders for each row of the clock

use std::fmt;

use crate::lamp::Lamp;

/// Lamps in the seconds indicator
pub const SECONDS_LAMPS: usize = 1;
/// Lamps in each of the two hours rows
pub const HOURS_LAMPS: usize = 4;
/// Lamps in the five-minute row
pub const MINUTES_TOP_LAMPS: usize = 11;
/// Lamps in the single-minute row
pub const MINUTES_BOTTOM_LAMPS: usize = 4;

/// Units represented by one lamp of a top row
const STEP: u32 = 5;
/// Every lamp at a multiple of this 1-based position in the minutes top row marks a quarter
const QUARTER_MARKER: usize = 3;

/// Fixed-length sequence of lamps, rendered left to right
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct LampRow {
    lamps: Vec<Lamp>,
}

impl LampRow {
    /// Build a row of `len` lamps where the first `lit` are `color` and the others are off
    ///
    /// `lit` is derived from validated components so it never exceeds `len`.
    pub fn lit_first(lit: u32, len: usize, color: Lamp) -> Self {
        let lit = lit as usize;
        debug_assert!(lit <= len, "{} lit lamps in a row of {}", lit, len);

        let mut lamps = vec![color; lit.min(len)];
        lamps.resize(len, Lamp::Off);

        Self { lamps }
    }

    pub fn lamps(&self) -> &[Lamp] {
        &self.lamps
    }

    pub fn len(&self) -> usize {
        self.lamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lamps.is_empty()
    }

    pub fn lit_count(&self) -> usize {
        self.lamps.iter().filter(|lamp| lamp.is_lit()).count()
    }

    /// Recolor the lit lamps at every `nth` position (1-based) to `color`
    fn recolor_every(mut self, nth: usize, color: Lamp) -> Self {
        for lamp in self.lamps.iter_mut().skip(nth - 1).step_by(nth) {
            if lamp.is_lit() {
                *lamp = color;
            }
        }

        self
    }
}

impl fmt::Display for LampRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lamp in &self.lamps {
            write!(f, "{}", lamp)?;
        }

        Ok(())
    }
}

/// Seconds indicator: yellow on even seconds, off on odd ones
pub fn seconds_row(seconds: u32) -> LampRow {
    LampRow::lit_first(1 - seconds % 2, SECONDS_LAMPS, Lamp::Yellow)
}

/// One red lamp per five full hours
pub fn hours_top_row(hours: u32) -> LampRow {
    LampRow::lit_first(hours / STEP, HOURS_LAMPS, Lamp::Red)
}

/// One red lamp per hour past the last five-hour mark
pub fn hours_bottom_row(hours: u32) -> LampRow {
    LampRow::lit_first(hours % STEP, HOURS_LAMPS, Lamp::Red)
}

/// One lamp per five full minutes, quarter-hour lamps lit red instead of yellow
pub fn minutes_top_row(minutes: u32) -> LampRow {
    LampRow::lit_first(minutes / STEP, MINUTES_TOP_LAMPS, Lamp::Yellow)
        .recolor_every(QUARTER_MARKER, Lamp::Red)
}

/// One yellow lamp per minute past the last five-minute mark
pub fn minutes_bottom_row(minutes: u32) -> LampRow {
    LampRow::lit_first(minutes % STEP, MINUTES_BOTTOM_LAMPS, Lamp::Yellow)
}
