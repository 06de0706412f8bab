//! Ticket sales and boarding-queue formation.
//!
//! This runs once, before the first round.  The engine later consumes the
//! resulting queues only through `BoardingQueue::pop_front`.

use ab_cabin::Cabin;
use ab_core::{BoardingConfig, PassengerId, PassengerStore, Seat, SimRng};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::BoardingQueue;

/// How many tickets to sell and who carries a bag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SalesPolicy {
    pub min_sell_ratio:      f64,
    pub max_sell_ratio:      f64,
    pub baggage_probability: f64,
}

impl SalesPolicy {
    pub fn from_config(config: &BoardingConfig) -> Self {
        Self {
            min_sell_ratio:      config.min_sell_ratio,
            max_sell_ratio:      config.max_sell_ratio,
            baggage_probability: config.baggage_probability,
        }
    }
}

impl Default for SalesPolicy {
    fn default() -> Self {
        Self::from_config(&BoardingConfig::default())
    }
}

/// Everyone who bought a ticket, plus one boarding queue per cabin zone.
pub struct Manifest {
    pub passengers: PassengerStore,
    /// Indexed like `Cabin::zones`.
    pub queues:     Vec<BoardingQueue>,
}

/// Number of tickets sold: uniform in
/// `[floor(min_ratio * capacity), floor(max_ratio * capacity)]`.
pub fn tickets_to_sell(capacity: usize, policy: &SalesPolicy, rng: &mut SimRng) -> usize {
    let low = (capacity as f64 * policy.min_sell_ratio).floor() as usize;
    let high = ((capacity as f64 * policy.max_sell_ratio).floor() as usize).max(low);
    rng.gen_range(low..=high)
}

/// Sell tickets for `cabin`, hand out seats at random, and form the queues.
///
/// Passengers sold beyond capacity keep `seat = None`; they never board and
/// appear in no queue.  Each zone's queue is its passengers in random order,
/// shuffled by an RNG derived from `rng` and the zone index.
pub fn sell_seats(cabin: &Cabin, policy: &SalesPolicy, rng: &mut SimRng) -> Manifest {
    let capacity = cabin.capacity();
    let sold = tickets_to_sell(capacity, policy, rng);

    let mut available: Vec<Seat> = cabin.seats().to_vec();
    rng.shuffle(&mut available);

    let mut passengers = PassengerStore::new();
    let mut unseated = 0usize;
    for _ in 0..sold {
        let has_baggage = rng.gen_bool(policy.baggage_probability);
        let seat = available.pop();
        if seat.is_none() {
            unseated += 1;
        }
        passengers.push(has_baggage, seat);
    }
    if unseated > 0 {
        warn!(sold, capacity, unseated, "flight oversold; passengers left without a seat");
    }

    let queues: Vec<BoardingQueue> = group_by_zone(cabin, &passengers)
        .into_iter()
        .enumerate()
        .map(|(zone, mut group)| {
            rng.child(zone as u64).shuffle(&mut group);
            BoardingQueue::from(group)
        })
        .collect();

    debug!(
        sold,
        capacity,
        zones = queues.len(),
        queued = queues.iter().map(BoardingQueue::len).sum::<usize>(),
        "tickets sold"
    );

    Manifest { passengers, queues }
}

/// Group seated passengers by the zone serving their seat.
///
/// Within a group passengers appear in row-major seat order; shuffle them to
/// get a realistic queue.  The result is indexed like `Cabin::zones`.
pub fn group_by_zone(cabin: &Cabin, passengers: &PassengerStore) -> Vec<Vec<PassengerId>> {
    let mut by_seat: FxHashMap<Seat, PassengerId> = passengers
        .iter()
        .filter_map(|p| p.seat.map(|seat| (seat, p.id)))
        .collect();

    let mut groups = vec![Vec::new(); cabin.zones().len()];
    for seat in cabin.seats() {
        let Some(id) = by_seat.remove(seat) else {
            continue;
        };
        if let Some(zone) = cabin.zone_of_seat(seat) {
            groups[zone].push(id);
        }
    }
    groups
}
