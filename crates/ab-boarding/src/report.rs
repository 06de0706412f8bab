//! Per-step movement counters.

use std::ops::AddAssign;

/// What happened during one zone step (or, summed, one round).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneReport {
    /// Aisle walkers that moved one row back.
    pub advanced: usize,
    /// Passengers who spent the step stowing a bag.
    pub stowed:   usize,
    /// Sideways moves, out of the aisle or between seat cells.
    pub stepped:  usize,
    /// Sideways moves that landed on an occupied cell.
    pub blocked:  usize,
    /// Passengers who sat down.
    pub seated:   usize,
    /// Passengers taken off the queue into the entry cell.
    pub boarded:  usize,
}

impl ZoneReport {
    /// `true` if anything at all changed.
    #[inline]
    pub fn made_progress(&self) -> bool {
        self.advanced + self.stowed + self.stepped + self.seated + self.boarded > 0
    }
}

impl AddAssign for ZoneReport {
    fn add_assign(&mut self, rhs: ZoneReport) {
        self.advanced += rhs.advanced;
        self.stowed += rhs.stowed;
        self.stepped += rhs.stepped;
        self.blocked += rhs.blocked;
        self.seated += rhs.seated;
        self.boarded += rhs.boarded;
    }
}
