//! Symbols for each visible cell state.

use ab_cabin::Cell;
use ab_core::PassengerStore;

/// One symbol per thing a viewer can distinguish on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyphs {
    /// A seat nobody is in.
    pub empty_seat:  &'static str,
    /// Two passengers sharing a seat cell.
    pub crowded:     &'static str,
    /// A passenger sitting down.
    pub seated:      &'static str,
    /// A passenger on the move, in the aisle or crossing a row.
    pub walking:     &'static str,
    /// An aisle cell nobody is in.
    pub open_aisle:  &'static str,
    /// Left and right edge of every row.
    pub wall:        &'static str,
}

impl Glyphs {
    pub const EMOJI: Glyphs = Glyphs {
        empty_seat: "💺",
        crowded:    "👥",
        seated:     "👤",
        walking:    "🚹",
        open_aisle: "❌",
        wall:       "|",
    };

    /// Plain-text fallback for terminals without emoji fonts.
    pub const ASCII: Glyphs = Glyphs {
        empty_seat: "_",
        crowded:    "X",
        seated:     "o",
        walking:    "w",
        open_aisle: ".",
        wall:       "|",
    };

    /// Symbol for `cell`, looking up seat state in `passengers`.
    ///
    /// A passenger missing from `passengers` is drawn as walking.
    pub fn for_cell(&self, cell: &Cell, passengers: &PassengerStore) -> &'static str {
        match *cell {
            Cell::EmptySeat(_) => self.empty_seat,
            Cell::Blocked { .. } => self.crowded,
            Cell::Transiting { passenger, .. } => {
                if passengers.get(passenger).is_some_and(|p| p.is_seated) {
                    self.seated
                } else {
                    self.walking
                }
            }
            Cell::InAisle(_) => self.walking,
            Cell::AisleOpen => self.open_aisle,
            Cell::Label(_) => "",
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::EMOJI
    }
}
