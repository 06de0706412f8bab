//! Passengers and the per-run passenger store.

use crate::{PassengerId, Seat};

/// One ticket holder.
///
/// Only the boarding engine mutates a passenger once the simulation starts:
/// [`stow_baggage`](Self::stow_baggage) while standing at the seat row and
/// [`sit_down`](Self::sit_down) on reaching the assigned seat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:          PassengerId,
    pub has_baggage: bool,
    /// `None` when the flight was oversold past this passenger.
    pub seat:        Option<Seat>,
    pub is_seated:   bool,
}

impl Passenger {
    pub fn new(id: PassengerId, has_baggage: bool) -> Self {
        Self {
            id,
            has_baggage,
            seat: None,
            is_seated: false,
        }
    }

    /// `true` if the passenger holds a seat and will therefore board.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.seat.is_some()
    }

    /// Put the carry-on in the overhead bin.
    #[inline]
    pub fn stow_baggage(&mut self) {
        self.has_baggage = false;
    }

    #[inline]
    pub fn sit_down(&mut self) {
        self.is_seated = true;
    }
}

// ── PassengerStore ────────────────────────────────────────────────────────────

/// All passengers of one run, indexed by `PassengerId`.
///
/// `passengers[i].id == PassengerId(i)` always holds; [`push`](Self::push)
/// assigns ids in insertion order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerStore {
    passengers: Vec<Passenger>,
}

impl PassengerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a passenger with the next free id and return that id.
    pub fn push(&mut self, has_baggage: bool, seat: Option<Seat>) -> PassengerId {
        let id = PassengerId(self.passengers.len() as u32);
        let mut passenger = Passenger::new(id, has_baggage);
        passenger.seat = seat;
        self.passengers.push(passenger);
        id
    }

    #[inline]
    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: PassengerId) -> Option<&mut Passenger> {
        self.passengers.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Passenger> {
        self.passengers.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Passenger> {
        self.passengers.iter_mut()
    }

    /// Passengers holding a seat.
    pub fn assigned_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.is_assigned()).count()
    }

    pub fn seated_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.is_seated).count()
    }

    /// `true` once every passenger with a seat is sitting in it.
    ///
    /// Passengers without a seat never board and are ignored, so an oversold
    /// flight still terminates.
    pub fn is_boarding_complete(&self) -> bool {
        self.passengers
            .iter()
            .all(|p| p.is_seated || !p.is_assigned())
    }
}

impl<'a> IntoIterator for &'a PassengerStore {
    type Item = &'a Passenger;
    type IntoIter = std::slice::Iter<'a, Passenger>;

    fn into_iter(self) -> Self::IntoIter {
        self.passengers.iter()
    }
}
