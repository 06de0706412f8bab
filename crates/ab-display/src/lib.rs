//! `ab-display` — draws the boarding grid to a terminal between rounds.
//!
//! | Type                 | Role                                               |
//! |----------------------|----------------------------------------------------|
//! | [`Glyphs`]           | One symbol per visible cell state (emoji or ASCII) |
//! | [`render_frame`]     | Pure `Cabin` → `String` conversion                 |
//! | [`TerminalRenderer`] | `SimObserver` that draws a frame, then sleeps      |
//!
//! The grid is only ever read between rounds, after every zone has been
//! advanced.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ab_display::{Glyphs, TerminalRenderer};
//!
//! let mut renderer = TerminalRenderer::stdout(config.round_delay(), Glyphs::EMOJI);
//! sim.run(&mut renderer)?;
//! if let Some(e) = renderer.take_error() { eprintln!("display error: {e}"); }
//! ```

pub mod error;
pub mod frame;
pub mod glyphs;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use error::{DisplayError, DisplayResult};
pub use frame::{FRAME_WIDTH, render_frame, render_grid};
pub use glyphs::Glyphs;
pub use renderer::TerminalRenderer;
