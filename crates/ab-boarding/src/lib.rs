//! `ab-boarding` — the boarding state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`engine`]   | `advance_zone` — one round of transition rules for a zone   |
//! | [`report`]   | `ZoneReport` — what moved during a step                     |
//! | [`queue`]    | `BoardingQueue` — a zone's waiting line                     |
//! | [`access`]   | `PassengerAccess` trait, `ZonePassengers` split view        |
//! | [`sales`]    | `sell_seats`, `group_by_zone`, `SalesPolicy`, `Manifest`    |
//! | [`error`]    | `BoardingError`, `BoardingResult<T>`                        |
//!
//! # One step of a zone
//!
//! ```text
//! for row in (0..seat_rows).rev():          back of the cabin first
//!   for column in zone.column_order():      outside seats first, aisle last
//!     InAisle(p) on the aisle  → walk back one row / stow bag / step sideways
//!     Transiting | Blocked     → sit down on own seat, else step toward it
//! entry: row-0 aisle cell open → pop the next queued passenger into it
//! ```
//!
//! The sweep order guarantees no passenger acts twice in one round: every
//! move goes into a cell that was already visited earlier in the sweep.

pub mod access;
pub mod engine;
pub mod error;
pub mod queue;
pub mod report;
pub mod sales;

#[cfg(test)]
mod tests;

pub use access::{PassengerAccess, ZonePassengers, partition_by_zone};
pub use engine::advance_zone;
pub use error::{BoardingError, BoardingResult};
pub use queue::BoardingQueue;
pub use report::ZoneReport;
pub use sales::{Manifest, SalesPolicy, group_by_zone, sell_seats};
