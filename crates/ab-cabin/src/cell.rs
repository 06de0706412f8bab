//! Grid cell states.

use ab_core::{PassengerId, Seat};

/// What the label row records for one physical column.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnLabel {
    Seat(char),
    Aisle,
}

/// The state of one grid position.
///
/// Non-aisle cells cycle `EmptySeat → Transiting ⇄ Blocked` and back.  The
/// `seat` carried by `Transiting` and `Blocked` is always the seat that
/// physically sits in that column, whoever currently occupies the cell.
///
/// A non-aisle cell never holds more than two passengers: `Blocked` is the
/// deepest overlap.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Unoccupied seat.
    EmptySeat(Seat),
    /// Aisle position with nobody present.
    AisleOpen,
    /// A boarding passenger standing in the aisle.
    InAisle(PassengerId),
    /// A single passenger in a seat cell, either passing through on the way
    /// to a farther seat or sitting in `seat`.
    Transiting { passenger: PassengerId, seat: Seat },
    /// `passer` is moving through toward a farther seat; `blocked` stays put
    /// underneath until `passer` leaves.
    Blocked {
        passer:  PassengerId,
        blocked: PassengerId,
        seat:    Seat,
    },
    /// Auxiliary label row entry.  Lookup only; nobody moves here.
    Label(ColumnLabel),
}

impl Cell {
    /// The passenger whose turn it is to act in this cell: the aisle walker,
    /// the lone occupant, or the passer of a blocked pair.
    #[inline]
    pub fn front(&self) -> Option<PassengerId> {
        match *self {
            Cell::InAisle(p) => Some(p),
            Cell::Transiting { passenger, .. } => Some(passenger),
            Cell::Blocked { passer, .. } => Some(passer),
            Cell::EmptySeat(_) | Cell::AisleOpen | Cell::Label(_) => None,
        }
    }

    /// Number of passengers physically in the cell (0, 1 or 2).
    #[inline]
    pub fn occupancy(&self) -> usize {
        match self {
            Cell::InAisle(_) | Cell::Transiting { .. } => 1,
            Cell::Blocked { .. } => 2,
            Cell::EmptySeat(_) | Cell::AisleOpen | Cell::Label(_) => 0,
        }
    }

    /// `true` if `passenger` is anywhere in this cell.
    pub fn contains(&self, passenger: PassengerId) -> bool {
        match *self {
            Cell::InAisle(p) | Cell::Transiting { passenger: p, .. } => p == passenger,
            Cell::Blocked { passer, blocked, .. } => passer == passenger || blocked == passenger,
            Cell::EmptySeat(_) | Cell::AisleOpen | Cell::Label(_) => false,
        }
    }

    /// The physical seat of a seat cell, occupied or not.
    #[inline]
    pub fn seat(&self) -> Option<Seat> {
        match *self {
            Cell::EmptySeat(seat)
            | Cell::Transiting { seat, .. }
            | Cell::Blocked { seat, .. } => Some(seat),
            Cell::AisleOpen | Cell::InAisle(_) | Cell::Label(_) => None,
        }
    }

    #[inline]
    pub fn is_aisle(&self) -> bool {
        matches!(self, Cell::AisleOpen | Cell::InAisle(_))
    }
}
