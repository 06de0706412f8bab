//! Simulation observer trait for rendering and progress reporting.

use ab_cabin::Cabin;
use ab_core::{PassengerStore, Round};

use crate::RoundReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] between rounds.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The grid passed to
/// [`on_round_end`](Self::on_round_end) is always a complete round: every zone
/// has been advanced.
pub trait SimObserver {
    /// Called before any zone moves in `round`.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called once all zones have been advanced for `report.round`.
    fn on_round_end(
        &mut self,
        _report:     &RoundReport,
        _cabin:      &Cabin,
        _passengers: &PassengerStore,
    ) {}

    /// Called once after the last passenger sits down.
    fn on_sim_end(&mut self, _final_round: Round, _passengers: &PassengerStore) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
