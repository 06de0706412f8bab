//! A fixed seat position.

use std::fmt;

/// A seat identified by its column letter and 1-based row number.
///
/// Seats are created once by the layout builder and never change.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    pub letter: char,
    pub number: u32,
}

impl Seat {
    #[inline]
    pub fn new(letter: char, number: u32) -> Self {
        Self { letter, number }
    }

    /// Grid row holding this seat (`number - 1`).
    #[inline]
    pub fn row_index(self) -> usize {
        self.number.saturating_sub(1) as usize
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.number)
    }
}
