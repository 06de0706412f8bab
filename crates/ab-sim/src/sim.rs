//! The `Sim` struct and its round loop.

use ab_boarding::{BoardingQueue, ZoneReport, advance_zone};
use ab_cabin::{Cabin, Zone};
use ab_core::{BoardingConfig, PassengerStore, Round};
use tracing::{debug, info, warn};

use crate::{RoundReport, SimError, SimObserver, SimResult};

/// `true` once every passenger holding a seat is seated.
///
/// Passengers without a seat never board and are ignored.
#[inline]
pub fn is_boarding_complete(passengers: &PassengerStore) -> bool {
    passengers.is_boarding_complete()
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Owns the grid, every passenger, and the per-zone queues for one run.
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Configuration the run was built from.
    pub config: BoardingConfig,

    /// The seating grid, mutated in place every round.
    pub cabin: Cabin,

    /// Aisle zones, in processing order.  A copy of `cabin.zones()`.
    pub zones: Vec<Zone>,

    /// Everyone who bought a ticket.
    pub passengers: PassengerStore,

    /// Waiting lines, indexed like `zones`.
    pub queues: Vec<BoardingQueue>,

    /// Last completed round; `Round::ZERO` before the first.
    pub round: Round,

    /// Consecutive rounds without movement while boarding was incomplete.
    idle_rounds: u64,
}

impl Sim {
    pub(crate) fn new(
        config:     BoardingConfig,
        cabin:      Cabin,
        passengers: PassengerStore,
        queues:     Vec<BoardingQueue>,
    ) -> Self {
        let zones = cabin.zones().to_vec();
        Self {
            config,
            cabin,
            zones,
            passengers,
            queues,
            round: Round::ZERO,
            idle_rounds: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run rounds until boarding is complete; returns the final round.
    ///
    /// Calls observer hooks at every round boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Round> {
        while !self.is_boarding_complete() {
            self.step(observer)?;
        }
        info!(
            rounds   = self.round.0,
            seated   = self.passengers.seated_count(),
            unseated = self.passengers.len() - self.passengers.assigned_count(),
            "boarding complete"
        );
        observer.on_sim_end(self.round, &self.passengers);
        Ok(self.round)
    }

    /// Run exactly `n` rounds, whether or not boarding completes.
    ///
    /// Useful for tests and incremental stepping.  `on_sim_end` is not called.
    pub fn run_rounds<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Advance every zone by one round.
    ///
    /// On a fully boarded cabin this changes nothing (the round counter still
    /// advances).  Fails with [`SimError::Stalled`] once `stall_limit`
    /// consecutive rounds pass without any movement while boarding is
    /// incomplete.
    pub fn advance_round(&mut self) -> SimResult<RoundReport> {
        let round = self.round.next();
        let zones = self.advance_zones()?;
        self.round = round;

        let mut totals = ZoneReport::default();
        for zone in &zones {
            totals += *zone;
        }
        let report = RoundReport {
            round,
            totals,
            zones,
            seated:  self.passengers.seated_count(),
            waiting: self.queues.iter().map(BoardingQueue::len).sum(),
        };
        debug!(
            round    = %round,
            advanced = totals.advanced,
            stowed   = totals.stowed,
            stepped  = totals.stepped,
            blocked  = totals.blocked,
            seated   = report.seated,
            waiting  = report.waiting,
            "round complete"
        );

        if report.made_progress() || self.is_boarding_complete() {
            self.idle_rounds = 0;
        } else {
            self.idle_rounds += 1;
            if self.idle_rounds >= self.config.stall_limit {
                warn!(round = %round, idle_rounds = self.idle_rounds, "boarding stalled");
                return Err(SimError::Stalled { round, idle_rounds: self.idle_rounds });
            }
        }
        Ok(report)
    }

    #[inline]
    pub fn is_boarding_complete(&self) -> bool {
        is_boarding_complete(&self.passengers)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_round_start(self.round.next());
        let report = self.advance_round()?;
        observer.on_round_end(&report, &self.cabin, &self.passengers);
        Ok(())
    }

    /// One `advance_zone` call per zone, in zone order.
    fn advance_zones(&mut self) -> SimResult<Vec<ZoneReport>> {
        #[cfg(not(feature = "parallel"))]
        {
            let cabin      = &mut self.cabin;
            let passengers = &mut self.passengers;
            self.zones
                .iter()
                .zip(self.queues.iter_mut())
                .map(|(zone, queue)| advance_zone(&mut *cabin, zone, queue, &mut *passengers))
                .collect::<Result<Vec<_>, _>>()
                .map_err(SimError::from)
        }

        #[cfg(feature = "parallel")]
        {
            use ab_boarding::partition_by_zone;
            use rayon::prelude::*;

            // Each zone works on a private copy of the grid and an exclusive
            // view of its own passengers, then its columns are copied back.
            let shared = &self.cabin;
            let views = partition_by_zone(shared, &mut self.passengers);
            let results: Vec<(Cabin, ZoneReport)> = self
                .zones
                .par_iter()
                .zip(self.queues.par_iter_mut())
                .zip(views.into_par_iter())
                .map(|((zone, queue), mut view)| {
                    let mut local = shared.clone();
                    advance_zone(&mut local, zone, queue, &mut view).map(|r| (local, r))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let mut reports = Vec::with_capacity(results.len());
            for (zone, (local, report)) in self.zones.iter().zip(results) {
                self.cabin.copy_columns_from(&local, zone.columns());
                reports.push(report);
            }
            Ok(reports)
        }
    }
}
