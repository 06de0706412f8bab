//! `ab-core` — foundational types for the aircraft boarding simulation.
//!
//! This crate is a dependency of every other `ab-*` crate.  It has no `ab-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId`, `ZoneId`                               |
//! | [`seat`]        | `Seat` (letter + number)                              |
//! | [`passenger`]   | `Passenger`, `PassengerStore`                         |
//! | [`round`]       | `Round` counter                                       |
//! | [`config`]      | `BoardingConfig`                                      |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `AbError`, `AbResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod passenger;
pub mod rng;
pub mod round;
pub mod seat;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BoardingConfig;
pub use error::{AbError, AbResult};
pub use ids::{PassengerId, ZoneId};
pub use passenger::{Passenger, PassengerStore};
pub use rng::SimRng;
pub use round::Round;
pub use seat::Seat;
