//! `TerminalRenderer<W>` — bridges `SimObserver` to a terminal.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use ab_cabin::Cabin;
use ab_core::{PassengerStore, Round};
use ab_sim::{RoundReport, SimObserver};
use tracing::warn;

use crate::{DisplayError, DisplayResult, Glyphs, render_frame};

/// ANSI "erase display, cursor home".
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// A [`SimObserver`] that redraws the grid after every round and then
/// sleeps for the pacing delay.
///
/// Write errors are stored internally because `SimObserver` methods have no
/// return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TerminalRenderer<W: Write> {
    out:        W,
    glyphs:     Glyphs,
    delay:      Duration,
    clear:      bool,
    frames:     u64,
    last_error: Option<DisplayError>,
}

impl TerminalRenderer<Stdout> {
    /// Render to standard output, clearing the screen before each frame.
    pub fn stdout(delay: Duration, glyphs: Glyphs) -> Self {
        Self::new(io::stdout(), delay, glyphs)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, delay: Duration, glyphs: Glyphs) -> Self {
        Self {
            out,
            glyphs,
            delay,
            clear:      true,
            frames:     0,
            last_error: None,
        }
    }

    /// Append frames instead of clearing the screen between them.
    pub fn without_clear(mut self) -> Self {
        self.clear = false;
        self
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<DisplayError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, round: Round, cabin: &Cabin, passengers: &PassengerStore) -> DisplayResult<()> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        let frame = render_frame(round, cabin, passengers, &self.glyphs);
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }

    fn store_err(&mut self, result: DisplayResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "terminal write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for TerminalRenderer<W> {
    fn on_round_end(&mut self, report: &RoundReport, cabin: &Cabin, passengers: &PassengerStore) {
        let result = self.draw(report.round, cabin, passengers);
        self.store_err(result);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn on_sim_end(&mut self, _final_round: Round, _passengers: &PassengerStore) {
        let result = writeln!(self.out, "Boarding completed!")
            .and_then(|()| self.out.flush())
            .map_err(DisplayError::from);
        self.store_err(result);
    }
}
