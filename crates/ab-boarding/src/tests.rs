//! Unit tests for ab-boarding.

use ab_cabin::{Cabin, Cell};
use ab_core::{PassengerId, PassengerStore, Seat};

use crate::{BoardingQueue, ZoneReport, advance_zone};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Advance the first (only) zone of `cabin` by one round.
fn step(cabin: &mut Cabin, store: &mut PassengerStore, queue: &mut BoardingQueue) -> ZoneReport {
    let zone = cabin.zones()[0].clone();
    advance_zone(cabin, &zone, queue, store).expect("engine step")
}

/// Step until everyone with a seat is seated; return the number of rounds.
fn rounds_to_complete(
    cabin: &mut Cabin,
    store: &mut PassengerStore,
    queue: &mut BoardingQueue,
) -> usize {
    let mut rounds = 0;
    while !store.is_boarding_complete() {
        step(cabin, store, queue);
        rounds += 1;
        assert!(rounds < 1_000, "boarding did not terminate");
    }
    rounds
}

fn transiting(passenger: PassengerId, seat: Seat) -> Cell {
    Cell::Transiting { passenger, seat }
}

// ── Aisle movement ────────────────────────────────────────────────────────────

#[cfg(test)]
mod aisle {
    use super::*;

    #[test]
    fn walker_advances_one_row_per_round() {
        // A | B, three rows.
        let mut cabin = Cabin::build(3, 2).unwrap();
        let mut store = PassengerStore::new();
        let b3 = Seat::new('B', 3);
        let p = store.push(false, Some(b3));
        let mut queue = BoardingQueue::from(vec![p]);

        let r = step(&mut cabin, &mut store, &mut queue);
        assert_eq!(r.boarded, 1);
        assert_eq!(*cabin.cell(0, 1), Cell::InAisle(p));

        step(&mut cabin, &mut store, &mut queue);
        assert_eq!(*cabin.cell(0, 1), Cell::AisleOpen);
        assert_eq!(*cabin.cell(1, 1), Cell::InAisle(p));

        step(&mut cabin, &mut store, &mut queue);
        assert_eq!(*cabin.cell(2, 1), Cell::InAisle(p));

        let r = step(&mut cabin, &mut store, &mut queue);
        assert_eq!(r.stepped, 1);
        assert_eq!(*cabin.cell(2, 1), Cell::AisleOpen);
        assert_eq!(*cabin.cell(2, 2), transiting(p, b3));

        let r = step(&mut cabin, &mut store, &mut queue);
        assert_eq!(r.seated, 1);
        assert!(store.get(p).unwrap().is_seated);
    }

    #[test]
    fn baggage_costs_one_round_at_the_seat_row() {
        let mut cabin = Cabin::build(1, 2).unwrap();
        let mut store = PassengerStore::new();
        let a1 = Seat::new('A', 1);
        let p = store.push(true, Some(a1));
        let mut queue = BoardingQueue::from(vec![p]);

        step(&mut cabin, &mut store, &mut queue);
        let r = step(&mut cabin, &mut store, &mut queue);
        assert_eq!(r.stowed, 1);
        assert_eq!(r.stepped, 0);
        assert!(!store.get(p).unwrap().has_baggage);
        assert_eq!(*cabin.cell(0, 1), Cell::InAisle(p));

        step(&mut cabin, &mut store, &mut queue);
        assert_eq!(*cabin.cell(0, 0), transiting(p, a1));
        step(&mut cabin, &mut store, &mut queue);
        assert!(store.is_boarding_complete());
    }

    #[test]
    fn congestion_holds_the_passenger_behind() {
        // p1 stows a bag in row 2 while p2 (row 3) waits behind in row 1.
        let mut cabin = Cabin::build(3, 2).unwrap();
        let mut store = PassengerStore::new();
        let p1 = store.push(true, Some(Seat::new('A', 2)));
        let p2 = store.push(false, Some(Seat::new('A', 3)));
        let mut queue = BoardingQueue::from(vec![p1, p2]);

        step(&mut cabin, &mut store, &mut queue);
        step(&mut cabin, &mut store, &mut queue);
        assert_eq!(*cabin.cell(1, 1), Cell::InAisle(p1));
        assert_eq!(*cabin.cell(0, 1), Cell::InAisle(p2));

        let r = step(&mut cabin, &mut store, &mut queue);
        assert_eq!(r.stowed, 1);
        assert_eq!(r.advanced, 0);
        assert_eq!(*cabin.cell(0, 1), Cell::InAisle(p2));
    }

    #[test]
    fn entry_waits_for_the_front_cell() {
        let mut cabin = Cabin::build(2, 2).unwrap();
        let mut store = PassengerStore::new();
        let p1 = store.push(true, Some(Seat::new('A', 1)));
        let p2 = store.push(false, Some(Seat::new('B', 2)));
        let mut queue = BoardingQueue::from(vec![p1, p2]);

        step(&mut cabin, &mut store, &mut queue);
        let r = step(&mut cabin, &mut store, &mut queue); // p1 stows in row 0
        assert_eq!(r.boarded, 0);
        assert_eq!(queue.front(), Some(p2));

        let r = step(&mut cabin, &mut store, &mut queue); // p1 turns into A1
        assert_eq!(r.boarded, 1);
        assert!(queue.is_empty());
    }
}

// ── Lateral movement and blocking ─────────────────────────────────────────────

#[cfg(test)]
mod lateral {
    use super::*;

    #[test]
    fn single_row_two_seats_with_one_bag() {
        // A | B; A1 travels light, B1 has a bag.
        let mut cabin = Cabin::build(1, 2).unwrap();
        let mut store = PassengerStore::new();
        let a = store.push(false, Some(Seat::new('A', 1)));
        let b = store.push(true, Some(Seat::new('B', 1)));
        let mut queue = BoardingQueue::from(vec![a, b]);

        step(&mut cabin, &mut store, &mut queue);
        assert_eq!(*cabin.cell(0, 1), Cell::InAisle(a));

        step(&mut cabin, &mut store, &mut queue);
        assert_eq!(*cabin.cell(0, 0), transiting(a, Seat::new('A', 1)));
        assert_eq!(*cabin.cell(0, 1), Cell::InAisle(b));

        let r = step(&mut cabin, &mut store, &mut queue);
        assert_eq!((r.seated, r.stowed), (1, 1));

        step(&mut cabin, &mut store, &mut queue);
        assert_eq!(*cabin.cell(0, 2), transiting(b, Seat::new('B', 1)));

        step(&mut cabin, &mut store, &mut queue);
        assert!(store.is_boarding_complete());
    }

    #[test]
    fn single_row_scenario_takes_five_rounds() {
        let mut cabin = Cabin::build(1, 2).unwrap();
        let mut store = PassengerStore::new();
        let a = store.push(false, Some(Seat::new('A', 1)));
        let b = store.push(true, Some(Seat::new('B', 1)));
        let mut queue = BoardingQueue::from(vec![b, a]);
        assert_eq!(rounds_to_complete(&mut cabin, &mut store, &mut queue), 5);
    }

    #[test]
    fn window_passenger_first_clears_before_middle_steps_in() {
        // A B | C D; A1 boards before B1.
        let mut cabin = Cabin::build(1, 4).unwrap();
        let mut store = PassengerStore::new();
        let (a1, b1) = (Seat::new('A', 1), Seat::new('B', 1));
        let far = store.push(false, Some(a1));
        let near = store.push(false, Some(b1));
        let mut queue = BoardingQueue::from(vec![far, near]);

        step(&mut cabin, &mut store, &mut queue);
        step(&mut cabin, &mut store, &mut queue);
        assert_eq!(*cabin.cell(0, 1), transiting(far, b1));
        assert_eq!(*cabin.cell(0, 2), Cell::InAisle(near));

        // Column 1 is swept before the aisle: `far` moves on to A1, then
        // `near` finds B1 empty.
        let r = step(&mut cabin, &mut store, &mut queue);
        assert_eq!(r.blocked, 0);
        assert_eq!(*cabin.cell(0, 0), transiting(far, a1));
        assert_eq!(*cabin.cell(0, 1), transiting(near, b1));

        let r = step(&mut cabin, &mut store, &mut queue);
        assert_eq!(r.seated, 2);
        assert!(store.is_boarding_complete());
    }

    #[test]
    fn seated_aisle_neighbour_is_passed_and_restored() {
        // A B | C D; B1 sits down before A1 arrives.
        let mut cabin = Cabin::build(1, 4).unwrap();
        let mut store = PassengerStore::new();
        let (a1, b1) = (Seat::new('A', 1), Seat::new('B', 1));
        let near = store.push(false, Some(b1));
        let far = store.push(false, Some(a1));
        let mut queue = BoardingQueue::from(vec![near, far]);

        step(&mut cabin, &mut store, &mut queue);
        step(&mut cabin, &mut store, &mut queue);
        let r = step(&mut cabin, &mut store, &mut queue);
        assert_eq!((r.seated, r.blocked), (1, 1));
        assert_eq!(
            *cabin.cell(0, 1),
            Cell::Blocked { passer: far, blocked: near, seat: b1 }
        );

        step(&mut cabin, &mut store, &mut queue);
        assert_eq!(*cabin.cell(0, 1), transiting(near, b1));
        assert_eq!(*cabin.cell(0, 0), transiting(far, a1));
        assert!(store.get(near).unwrap().is_seated);

        step(&mut cabin, &mut store, &mut queue);
        assert!(store.is_boarding_complete());
    }

    #[test]
    fn seated_cells_are_frozen() {
        let mut cabin = Cabin::build(2, 4).unwrap();
        let mut store = PassengerStore::new();
        let ids: Vec<PassengerId> = cabin
            .seats()
            .to_vec()
            .into_iter()
            .map(|seat| store.push(true, Some(seat)))
            .collect();
        let mut queue = BoardingQueue::from(ids);
        rounds_to_complete(&mut cabin, &mut store, &mut queue);

        let before = cabin.clone();
        let r = step(&mut cabin, &mut store, &mut queue);
        assert!(!r.made_progress());
        for row in 0..cabin.seat_rows() {
            for column in 0..cabin.width() {
                assert_eq!(cabin.cell(row, column), before.cell(row, column));
            }
        }
    }
}

// ── Invariant violations ──────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use super::*;
    use crate::{BoardingError, ZonePassengers};

    #[test]
    fn third_passenger_in_a_cell_is_rejected() {
        let mut cabin = Cabin::build(1, 4).unwrap();
        let mut store = PassengerStore::new();
        let b1 = Seat::new('B', 1);
        let passer = store.push(false, Some(b1));
        let under = store.push(false, Some(b1));
        let third = store.push(false, Some(Seat::new('A', 1)));
        store.get_mut(passer).unwrap().sit_down();
        cabin.set(0, 1, Cell::Blocked { passer, blocked: under, seat: b1 });
        cabin.set(0, 2, Cell::InAisle(third));

        let zone = cabin.zones()[0].clone();
        let err = advance_zone(&mut cabin, &zone, &mut BoardingQueue::new(), &mut store);
        assert!(matches!(err, Err(BoardingError::Overcrowded { row: 0, column: 1 })));
    }

    #[test]
    fn unknown_seat_letter_is_rejected() {
        let mut cabin = Cabin::build(1, 2).unwrap();
        let mut store = PassengerStore::new();
        let p = store.push(false, Some(Seat::new('Q', 1)));
        cabin.set(0, 1, Cell::InAisle(p));

        let zone = cabin.zones()[0].clone();
        let err = advance_zone(&mut cabin, &zone, &mut BoardingQueue::new(), &mut store);
        assert!(matches!(err, Err(BoardingError::Cabin(_))));
    }

    #[test]
    fn unassigned_passenger_in_the_aisle_is_rejected() {
        let mut cabin = Cabin::build(1, 2).unwrap();
        let mut store = PassengerStore::new();
        let p = store.push(false, None);
        cabin.set(0, 1, Cell::InAisle(p));

        let zone = cabin.zones()[0].clone();
        let err = advance_zone(&mut cabin, &zone, &mut BoardingQueue::new(), &mut store);
        assert!(matches!(err, Err(BoardingError::Unassigned(id)) if id == p));
    }

    #[test]
    fn passenger_outside_the_zone_view_is_reported() {
        let mut cabin = Cabin::build(1, 2).unwrap();
        cabin.set(0, 1, Cell::InAisle(PassengerId(9)));
        let zone = cabin.zones()[0].clone();
        let mut view = ZonePassengers::new();
        let err = advance_zone(&mut cabin, &zone, &mut BoardingQueue::new(), &mut view);
        assert!(matches!(err, Err(BoardingError::PassengerNotFound(PassengerId(9)))));
    }
}

// ── Zone views ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod access {
    use super::*;
    use crate::{PassengerAccess, partition_by_zone};

    #[test]
    fn partition_splits_by_seat_zone_and_skips_unassigned() {
        // A B C | D E F G | H I J
        let cabin = Cabin::build(2, 10).unwrap();
        let mut store = PassengerStore::new();
        let left = store.push(false, Some(Seat::new('E', 1)));
        let right = store.push(false, Some(Seat::new('F', 2)));
        store.push(false, None);

        let mut views = partition_by_zone(&cabin, &mut store);
        assert_eq!(views.len(), 2);
        assert_eq!((views[0].len(), views[1].len()), (1, 1));
        assert!(views[0].passenger(left).is_some());
        assert!(views[0].passenger(right).is_none());
        views[1].passenger_mut(right).unwrap().sit_down();
        drop(views);
        assert!(store.get(right).unwrap().is_seated);
    }

    #[test]
    fn zone_view_drives_the_engine_like_the_store() {
        let mut cabin = Cabin::build(1, 2).unwrap();
        let mut store = PassengerStore::new();
        let p = store.push(false, Some(Seat::new('B', 1)));
        let mut queue = BoardingQueue::from(vec![p]);
        let zone = cabin.zones()[0].clone();
        for _ in 0..3 {
            let mut views = partition_by_zone(&cabin, &mut store);
            advance_zone(&mut cabin, &zone, &mut queue, &mut views[0]).unwrap();
        }
        assert!(store.is_boarding_complete());
    }
}

// ── Queues and reports ────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut q: BoardingQueue = [PassengerId(3), PassengerId(1)].into_iter().collect();
        q.push_back(PassengerId(2));
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop_front(), Some(PassengerId(3)));
        assert_eq!(q.front(), Some(PassengerId(1)));
        assert_eq!(q.iter().collect::<Vec<_>>(), vec![PassengerId(1), PassengerId(2)]);
    }

    #[test]
    fn report_accumulates() {
        let mut total = ZoneReport::default();
        assert!(!total.made_progress());
        total += ZoneReport { stowed: 1, ..Default::default() };
        total += ZoneReport { seated: 2, boarded: 1, ..Default::default() };
        assert!(total.made_progress());
        assert_eq!((total.stowed, total.seated, total.boarded), (1, 2, 1));
    }
}

// ── Seat sales ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sales {
    use std::collections::HashSet;

    use ab_core::SimRng;

    use super::*;
    use crate::sales::tickets_to_sell;
    use crate::{SalesPolicy, group_by_zone, sell_seats};

    #[test]
    fn tickets_sold_within_policy_bounds() {
        let policy = SalesPolicy::default();
        let mut rng = SimRng::new(3);
        for _ in 0..200 {
            let sold = tickets_to_sell(100, &policy, &mut rng);
            assert!((95..=103).contains(&sold), "sold {sold}");
        }
    }

    #[test]
    fn every_seat_sold_at_most_once_and_queued_in_its_zone() {
        let cabin = Cabin::build(8, 10).unwrap();
        let manifest = sell_seats(&cabin, &SalesPolicy::default(), &mut SimRng::new(11));

        let seats: Vec<Seat> = manifest.passengers.iter().filter_map(|p| p.seat).collect();
        let unique: HashSet<Seat> = seats.iter().copied().collect();
        assert_eq!(seats.len(), unique.len());

        assert_eq!(manifest.queues.len(), 2);
        let queued: usize = manifest.queues.iter().map(BoardingQueue::len).sum();
        assert_eq!(queued, manifest.passengers.assigned_count());
        for (zone, queue) in manifest.queues.iter().enumerate() {
            for id in queue.iter() {
                let seat = manifest.passengers.get(id).unwrap().seat.unwrap();
                assert_eq!(cabin.zone_of_seat(&seat), Some(zone));
            }
        }
    }

    #[test]
    fn oversold_passengers_get_no_seat_and_no_queue_slot() {
        let cabin = Cabin::build(2, 2).unwrap();
        let policy = SalesPolicy {
            min_sell_ratio:      1.5,
            max_sell_ratio:      1.5,
            baggage_probability: 0.0,
        };
        let manifest = sell_seats(&cabin, &policy, &mut SimRng::new(5));
        assert_eq!(manifest.passengers.len(), 6);
        assert_eq!(manifest.passengers.assigned_count(), 4);
        assert_eq!(manifest.queues[0].len(), 4);
        assert!(manifest.passengers.iter().all(|p| !p.has_baggage));
    }

    #[test]
    fn same_seed_same_manifest() {
        let cabin = Cabin::build(6, 6).unwrap();
        let a = sell_seats(&cabin, &SalesPolicy::default(), &mut SimRng::new(99));
        let b = sell_seats(&cabin, &SalesPolicy::default(), &mut SimRng::new(99));
        assert_eq!(a.queues, b.queues);
        assert!(a.passengers.iter().eq(b.passengers.iter()));
    }

    #[test]
    fn grouping_follows_row_major_seat_order() {
        let cabin = Cabin::build(2, 2).unwrap();
        let mut store = PassengerStore::new();
        let b2 = store.push(false, Some(Seat::new('B', 2)));
        let a1 = store.push(false, Some(Seat::new('A', 1)));
        store.push(false, None);
        let groups = group_by_zone(&cabin, &store);
        assert_eq!(groups, vec![vec![a1, b2]]);
    }
}
