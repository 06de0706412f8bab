//! Text rendering of one grid snapshot.

use ab_cabin::Cabin;
use ab_core::{PassengerStore, Round};

use crate::Glyphs;

/// Rows are right-shifted so that narrow cabins sit roughly centred in a
/// frame this many cells wide.
pub const FRAME_WIDTH: usize = 20;

/// The seat rows of `cabin`, one line each, front row first.
///
/// Each line is `wall cell … cell wall`, joined by single spaces and
/// indented by `FRAME_WIDTH - columns - 2` spaces.  The label row is not
/// drawn.
pub fn render_grid(cabin: &Cabin, passengers: &PassengerStore, glyphs: &Glyphs) -> String {
    let indent = " ".repeat(FRAME_WIDTH.saturating_sub(cabin.seat_columns() + 2));
    let mut out = String::new();
    for row in cabin.rows() {
        let mut line: Vec<&str> = Vec::with_capacity(row.len() + 2);
        line.push(glyphs.wall);
        line.extend(row.iter().map(|cell| glyphs.for_cell(cell, passengers)));
        line.push(glyphs.wall);

        out.push_str(&indent);
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// A full frame: the `Round N` header followed by [`render_grid`].
pub fn render_frame(
    round:      Round,
    cabin:      &Cabin,
    passengers: &PassengerStore,
    glyphs:     &Glyphs,
) -> String {
    format!("Round {}\n{}\n", round.0, render_grid(cabin, passengers, glyphs))
}
