//! Lamp state definitions

use parse_display::Display;
use strum_macros::EnumIter;

/// State of a single lamp of the clock
///
/// The [std::fmt::Display] implementation yields the one-character form used in the rendered output.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Lamp {
    #[display("O")]
    Off,
    #[display("Y")]
    Yellow,
    #[display("R")]
    Red,
}

impl Lamp {
    /// Character this lamp renders to
    pub fn symbol(self) -> char {
        match self {
            Self::Off => 'O',
            Self::Yellow => 'Y',
            Self::Red => 'R',
        }
    }

    pub fn is_lit(self) -> bool {
        self != Self::Off
    }
}

impl Default for Lamp {
    fn default() -> Self {
        Self::Off
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn symbol_matches_display() {
        for lamp in Lamp::iter() {
            assert_eq!(lamp.to_string(), lamp.symbol().to_string());
        }
    }

    #[test]
    fn only_off_is_unlit() {
        assert!(!Lamp::Off.is_lit());
        assert!(Lamp::Yellow.is_lit());
        assert!(Lamp::Red.is_lit());
    }
}
