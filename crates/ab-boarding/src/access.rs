//! Passenger access for the engine.
//!
//! The engine reads and mutates passengers through [`PassengerAccess`] so the
//! same rules run against the whole [`PassengerStore`] (sequential rounds) or
//! against a [`ZonePassengers`] view holding only one zone's passengers
//! (parallel rounds, where each zone needs its own disjoint `&mut`).

use ab_cabin::Cabin;
use ab_core::{Passenger, PassengerId, PassengerStore};
use rustc_hash::FxHashMap;

/// Lookup of passengers by id.
pub trait PassengerAccess {
    fn passenger(&self, id: PassengerId) -> Option<&Passenger>;

    fn passenger_mut(&mut self, id: PassengerId) -> Option<&mut Passenger>;
}

impl PassengerAccess for PassengerStore {
    #[inline]
    fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.get(id)
    }

    #[inline]
    fn passenger_mut(&mut self, id: PassengerId) -> Option<&mut Passenger> {
        self.get_mut(id)
    }
}

// ── ZonePassengers ────────────────────────────────────────────────────────────

/// Exclusive view of the passengers belonging to one aisle zone.
#[derive(Default)]
pub struct ZonePassengers<'a> {
    members: FxHashMap<PassengerId, &'a mut Passenger>,
}

impl<'a> ZonePassengers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, passenger: &'a mut Passenger) {
        self.members.insert(passenger.id, passenger);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl PassengerAccess for ZonePassengers<'_> {
    #[inline]
    fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.members.get(&id).map(|p| &**p)
    }

    #[inline]
    fn passenger_mut(&mut self, id: PassengerId) -> Option<&mut Passenger> {
        self.members.get_mut(&id).map(|p| &mut **p)
    }
}

/// Split `store` into one [`ZonePassengers`] per cabin zone, by the zone of
/// each passenger's seat.  Passengers without a seat belong to no zone.
pub fn partition_by_zone<'a>(cabin: &Cabin, store: &'a mut PassengerStore) -> Vec<ZonePassengers<'a>> {
    let mut views: Vec<ZonePassengers<'a>> =
        cabin.zones().iter().map(|_| ZonePassengers::new()).collect();
    for passenger in store.iter_mut() {
        let zone = passenger.seat.as_ref().and_then(|seat| cabin.zone_of_seat(seat));
        if let Some(zone) = zone {
            views[zone].insert(passenger);
        }
    }
    views
}
