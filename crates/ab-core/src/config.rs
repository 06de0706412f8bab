//! Run configuration.

use std::time::Duration;

use crate::{AbError, AbResult};

/// Highest supported seat-column count (one letter per column, `A`–`Z`).
pub const MAX_SEAT_COLUMNS: usize = 26;

/// Top-level configuration for one boarding run.
///
/// Filled in by the application crate (the `board` CLI parses it from
/// arguments) and handed to `ab_sim::SimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardingConfig {
    /// Seat rows in the cabin.
    pub rows: usize,

    /// Seat columns per row, aisles excluded.  Up to 6 gives a single aisle,
    /// wider cabins get two.
    pub columns: usize,

    /// Master RNG seed.  The same seed always produces the same run.
    pub seed: u64,

    /// Pause between rendered rounds.  Display pacing only: the simulation
    /// result does not depend on it.
    pub round_delay_ms: u64,

    /// Chance that a passenger carries a bag that must be stowed.
    pub baggage_probability: f64,

    /// Lower bound on tickets sold, as a fraction of capacity.
    pub min_sell_ratio: f64,

    /// Upper bound on tickets sold, as a fraction of capacity.  Above 1.0 the
    /// flight may be oversold.
    pub max_sell_ratio: f64,

    /// Consecutive rounds without any movement before the run is declared
    /// stalled.
    pub stall_limit: u64,
}

impl Default for BoardingConfig {
    fn default() -> Self {
        Self {
            rows:                10,
            columns:             10,
            seed:                42,
            round_delay_ms:      500,
            baggage_probability: 0.7,
            min_sell_ratio:      0.95,
            max_sell_ratio:      1.03,
            stall_limit:         16,
        }
    }
}

impl BoardingConfig {
    #[inline]
    pub fn round_delay(&self) -> Duration {
        Duration::from_millis(self.round_delay_ms)
    }

    /// Total seats the layout will contain.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Reject configurations the layout builder or seat seller cannot honor.
    pub fn validate(&self) -> AbResult<()> {
        if self.rows == 0 {
            return Err(AbError::Config("rows must be positive".into()));
        }
        if self.columns == 0 || self.columns > MAX_SEAT_COLUMNS {
            return Err(AbError::Config(format!(
                "columns must be in 1..={MAX_SEAT_COLUMNS}, got {}",
                self.columns
            )));
        }
        if !(0.0..=1.0).contains(&self.baggage_probability) {
            return Err(AbError::Config(format!(
                "baggage_probability must be in [0, 1], got {}",
                self.baggage_probability
            )));
        }
        if self.min_sell_ratio < 0.0 || self.min_sell_ratio > self.max_sell_ratio {
            return Err(AbError::Config(format!(
                "sell ratios must satisfy 0 <= min <= max, got {}..{}",
                self.min_sell_ratio, self.max_sell_ratio
            )));
        }
        if self.stall_limit == 0 {
            return Err(AbError::Config("stall_limit must be positive".into()));
        }
        Ok(())
    }
}
