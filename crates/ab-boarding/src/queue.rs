//! `BoardingQueue` — the line of passengers waiting to enter one aisle.

use std::collections::VecDeque;

use ab_core::PassengerId;

/// FIFO of passengers not yet in the cabin, one per aisle zone.
///
/// The engine only ever calls [`pop_front`](Self::pop_front); ordering
/// (grouping and shuffling) is decided up front by the seat seller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardingQueue {
    inner: VecDeque<PassengerId>,
}

impl BoardingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, passenger: PassengerId) {
        self.inner.push_back(passenger);
    }

    /// Remove and return the next passenger to board.
    pub fn pop_front(&mut self) -> Option<PassengerId> {
        self.inner.pop_front()
    }

    /// The next passenger to board, without removing them.
    pub fn front(&self) -> Option<PassengerId> {
        self.inner.front().copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.inner.iter().copied()
    }
}

impl From<Vec<PassengerId>> for BoardingQueue {
    fn from(passengers: Vec<PassengerId>) -> Self {
        Self { inner: passengers.into() }
    }
}

impl FromIterator<PassengerId> for BoardingQueue {
    fn from_iter<I: IntoIterator<Item = PassengerId>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}
