//! Per-round summary handed to observers.

use ab_boarding::ZoneReport;
use ab_core::Round;

/// What happened during one round, across all zones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundReport {
    /// The round just completed (the first round is `R1`).
    pub round:   Round,
    /// Sum of the per-zone counters.
    pub totals:  ZoneReport,
    /// Per-zone counters, indexed like `Cabin::zones`.
    pub zones:   Vec<ZoneReport>,
    /// Passengers seated after this round.
    pub seated:  usize,
    /// Passengers still waiting in a boarding queue after this round.
    pub waiting: usize,
}

impl RoundReport {
    #[inline]
    pub fn made_progress(&self) -> bool {
        self.totals.made_progress()
    }
}
