//! Unit tests for ab-display.

use std::io::{self, Write};
use std::time::Duration;

use ab_boarding::{BoardingQueue, Manifest};
use ab_cabin::{Cabin, Cell};
use ab_core::{BoardingConfig, PassengerStore, Round, Seat};
use ab_sim::SimBuilder;

use crate::{Glyphs, TerminalRenderer, render_frame, render_grid};

fn single_row_sim() -> ab_sim::Sim {
    let mut passengers = PassengerStore::new();
    let a = passengers.push(false, Some(Seat::new('A', 1)));
    let b = passengers.push(true, Some(Seat::new('B', 1)));
    let manifest = Manifest { passengers, queues: vec![BoardingQueue::from(vec![b, a])] };
    let config = BoardingConfig { rows: 1, columns: 2, round_delay_ms: 0, ..BoardingConfig::default() };
    SimBuilder::new(config).manifest(manifest).build().unwrap()
}

// ── Glyphs ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod glyphs {
    use super::*;

    #[test]
    fn transiting_depends_on_seat_state() {
        let mut store = PassengerStore::new();
        let seat = Seat::new('A', 1);
        let p = store.push(false, Some(seat));
        let cell = Cell::Transiting { passenger: p, seat };

        assert_eq!(Glyphs::EMOJI.for_cell(&cell, &store), "🚹");
        store.get_mut(p).unwrap().sit_down();
        assert_eq!(Glyphs::EMOJI.for_cell(&cell, &store), "👤");
    }

    #[test]
    fn remaining_states() {
        let mut store = PassengerStore::new();
        let seat = Seat::new('A', 1);
        let p = store.push(false, Some(seat));
        let q = store.push(false, Some(Seat::new('B', 1)));
        let g = Glyphs::EMOJI;

        assert_eq!(g.for_cell(&Cell::EmptySeat(seat), &store), "💺");
        assert_eq!(g.for_cell(&Cell::AisleOpen, &store), "❌");
        assert_eq!(g.for_cell(&Cell::InAisle(p), &store), "🚹");
        let crowded = Cell::Blocked { passer: q, blocked: p, seat };
        assert_eq!(g.for_cell(&crowded, &store), "👥");
    }

    #[test]
    fn default_is_emoji() {
        assert_eq!(Glyphs::default(), Glyphs::EMOJI);
    }
}

// ── Frames ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame {
    use super::*;

    #[test]
    fn empty_single_row() {
        let cabin = Cabin::build(1, 2).unwrap();
        let grid = render_grid(&cabin, &PassengerStore::new(), &Glyphs::EMOJI);
        assert_eq!(grid, format!("{}| 💺 ❌ 💺 |\n", " ".repeat(16)));
    }

    #[test]
    fn one_line_per_seat_row_without_labels() {
        let cabin = Cabin::build(4, 6).unwrap();
        let grid = render_grid(&cabin, &PassengerStore::new(), &Glyphs::ASCII);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(line, format!("{}| _ _ _ . _ _ _ |", " ".repeat(12)));
        }
    }

    #[test]
    fn wide_cabins_are_not_indented() {
        let cabin = Cabin::build(1, 20).unwrap();
        let grid = render_grid(&cabin, &PassengerStore::new(), &Glyphs::ASCII);
        assert!(grid.starts_with('|'));
    }

    #[test]
    fn frame_has_round_header() {
        let cabin = Cabin::build(2, 2).unwrap();
        let frame = render_frame(Round(7), &cabin, &PassengerStore::new(), &Glyphs::ASCII);
        assert!(frame.starts_with("Round 7\n"));
        assert_eq!(frame.lines().filter(|l| l.contains('|')).count(), 2);
    }
}

// ── Renderer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod renderer {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn draws_every_round_then_completion() {
        let mut sim = single_row_sim();
        let mut renderer =
            TerminalRenderer::new(Vec::new(), Duration::ZERO, Glyphs::ASCII).without_clear();
        sim.run(&mut renderer).unwrap();

        assert!(renderer.take_error().is_none());
        assert_eq!(renderer.frames(), 5);
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        for n in 1..=5 {
            assert!(text.contains(&format!("Round {n}\n")));
        }
        assert!(text.ends_with("Boarding completed!\n"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn clears_the_screen_by_default() {
        let mut sim = single_row_sim();
        let mut renderer = TerminalRenderer::new(Vec::new(), Duration::ZERO, Glyphs::ASCII);
        sim.run(&mut renderer).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text.matches("\x1b[2J\x1b[H").count(), 5);
    }

    #[test]
    fn write_errors_are_kept_not_raised() {
        let mut sim = single_row_sim();
        let mut renderer = TerminalRenderer::new(BrokenPipe, Duration::ZERO, Glyphs::ASCII);
        assert_eq!(sim.run(&mut renderer).unwrap(), Round(5));
        assert!(renderer.take_error().is_some());
        assert!(renderer.take_error().is_none());
        assert_eq!(renderer.frames(), 0);
    }
}
