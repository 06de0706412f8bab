//! `ab-sim` — round driver for the aircraft boarding simulation.
//!
//! # Round loop
//!
//! ```text
//! while not every seat-holder is seated:
//!   ① on_round_start
//!   ② Zones   — ab_boarding::advance_zone once per aisle zone, in ascending
//!               aisle order (on Rayon with the `parallel` feature)
//!   ③ Stall   — stall_limit rounds in a row without movement → SimError::Stalled
//!   ④ on_round_end(report, cabin, passengers)   ← render here
//! on_sim_end
//! ```
//!
//! Observers only ever see the grid between rounds, never mid-round.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Advances zones on Rayon's thread pool.                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ab_core::BoardingConfig;
//! use ab_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(BoardingConfig::default()).build()?;
//! let rounds = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::RoundReport;
pub use sim::{Sim, is_boarding_complete};
