//! `ab-cabin` — the seating grid the boarding engine mutates.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`cell`]    | `Cell` (tagged grid state), `ColumnLabel`                |
//! | [`layout`]  | `Cabin` — grid + label row, built from row/column counts |
//! | [`zone`]    | `Zone` — one aisle and the seat columns it serves        |
//! | [`error`]   | `CabinError`, `CabinResult<T>`                           |
//!
//! # Layout
//!
//! ```text
//! columns <= 6        A B C | D E F              one aisle at columns / 2
//! columns  > 6        A B C | D E F G | H I J    aisles at k and columns + 1 - k,
//!                                                k = columns / 3
//! ```
//!
//! The last grid row is an auxiliary label row mapping each physical column
//! to its seat letter (or the aisle).  It is never swept by the engine.

pub mod cell;
pub mod error;
pub mod layout;
pub mod zone;


pub use cell::{Cell, ColumnLabel};
pub use error::{CabinError, CabinResult};
pub use layout::Cabin;
pub use zone::Zone;
