//! The `Cabin` grid and its layout builder.

use std::ops::RangeInclusive;

use ab_core::config::MAX_SEAT_COLUMNS;
use ab_core::{Seat, ZoneId};
use rustc_hash::FxHashMap;

use crate::{Cell, CabinError, CabinResult, ColumnLabel, Zone};

/// Widest cabin that still gets a single aisle.
pub const SINGLE_AISLE_MAX_COLUMNS: usize = 6;

/// The seating grid: `rows` seat rows followed by one label row.
///
/// Built once per run by [`Cabin::build`] and mutated in place by the boarding
/// engine; it is never resized.  Physical column indices include the aisles.
#[derive(Clone, Debug)]
pub struct Cabin {
    rows:           usize,
    seat_columns:   usize,
    /// `rows + 1` rows of `width` cells; the last row is the label row.
    grid:           Vec<Vec<Cell>>,
    aisles:         Vec<usize>,
    /// Seats in row-major order.
    seats:          Vec<Seat>,
    zones:          Vec<Zone>,
    /// Seat column index → zone index.
    column_zone:    Vec<Option<usize>>,
    /// Seat letter → physical column, derived from the label row.
    letter_columns: FxHashMap<char, usize>,
}

impl Cabin {
    /// Lay out `rows` x `columns` seats and insert the aisle column(s).
    ///
    /// Up to 6 columns get one aisle at `columns / 2`; wider cabins get two,
    /// at `columns / 3` and `columns + 1 - columns / 3`.
    pub fn build(rows: usize, columns: usize) -> CabinResult<Self> {
        if rows == 0 || columns == 0 || columns > MAX_SEAT_COLUMNS {
            return Err(CabinError::InvalidDimensions { rows, columns });
        }

        let aisles = if columns <= SINGLE_AISLE_MAX_COLUMNS {
            vec![columns / 2]
        } else {
            let k = columns / 3;
            vec![k, columns + 1 - k]
        };
        let width = columns + aisles.len();

        // Label row first: every seat row follows the same pattern.
        let mut labels = Vec::with_capacity(width);
        let mut letters = (0..columns as u8).map(|i| (b'A' + i) as char);
        for column in 0..width {
            if aisles.contains(&column) {
                labels.push(ColumnLabel::Aisle);
            } else if let Some(letter) = letters.next() {
                labels.push(ColumnLabel::Seat(letter));
            }
        }

        let mut grid: Vec<Vec<Cell>> = Vec::with_capacity(rows + 1);
        let mut seats = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            let number = row as u32 + 1;
            let cells: Vec<Cell> = labels
                .iter()
                .map(|label| match *label {
                    ColumnLabel::Aisle => Cell::AisleOpen,
                    ColumnLabel::Seat(letter) => {
                        let seat = Seat::new(letter, number);
                        seats.push(seat);
                        Cell::EmptySeat(seat)
                    }
                })
                .collect();
            grid.push(cells);
        }
        grid.push(labels.iter().copied().map(Cell::Label).collect());

        let letter_columns: FxHashMap<char, usize> = labels
            .iter()
            .enumerate()
            .filter_map(|(column, label)| match label {
                ColumnLabel::Seat(letter) => Some((*letter, column)),
                ColumnLabel::Aisle => None,
            })
            .collect();

        let (zones, column_zone) = partition_zones(&labels, &aisles);

        Ok(Self {
            rows,
            seat_columns: columns,
            grid,
            aisles,
            seats,
            zones,
            column_zone,
            letter_columns,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of seat rows (the label row is not counted).
    #[inline]
    pub fn seat_rows(&self) -> usize {
        self.rows
    }

    /// Seats per row, aisles excluded.
    #[inline]
    pub fn seat_columns(&self) -> usize {
        self.seat_columns
    }

    /// Physical columns per row, aisles included.
    #[inline]
    pub fn width(&self) -> usize {
        self.seat_columns + self.aisles.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// Cell at `(row, column)`.  `row == seat_rows()` addresses the label row.
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        &self.grid[row][column]
    }

    /// Checked variant of [`cell`](Self::cell).
    pub fn try_cell(&self, row: usize, column: usize) -> CabinResult<&Cell> {
        self.grid
            .get(row)
            .and_then(|cells| cells.get(column))
            .ok_or(CabinError::OutOfBounds {
                row,
                column,
                rows:  self.rows + 1,
                width: self.width(),
            })
    }

    /// Replace the cell at `(row, column)` of a seat row.
    ///
    /// # Panics
    /// Panics if the position is outside the seat rows.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        debug_assert!(row < self.rows, "the label row is read-only");
        self.grid[row][column] = cell;
    }

    /// Seat rows, front (row 0) to back.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.grid[..self.rows].iter().map(Vec::as_slice)
    }

    /// The auxiliary row mapping physical column → seat letter.
    pub fn label_row(&self) -> &[Cell] {
        &self.grid[self.rows]
    }

    /// Physical column carrying seat `letter`.
    #[inline]
    pub fn column_of(&self, letter: char) -> Option<usize> {
        self.letter_columns.get(&letter).copied()
    }

    // ── Seats and zones ───────────────────────────────────────────────────

    #[inline]
    pub fn aisle_columns(&self) -> &[usize] {
        &self.aisles
    }

    /// All seats in row-major order.
    #[inline]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Aisle zones in ascending aisle-column order.
    #[inline]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Index into [`zones`](Self::zones) of the zone serving `seat`.
    pub fn zone_of_seat(&self, seat: &Seat) -> Option<usize> {
        let column = self.column_of(seat.letter)?;
        if seat.row_index() >= self.rows {
            return None;
        }
        self.column_zone.get(column).copied().flatten()
    }

    /// Overwrite `columns` of every seat row with the cells of `other`.
    ///
    /// Used to merge a zone that was advanced on a private copy of the cabin
    /// back into the shared grid.  Both cabins must share a layout.
    pub fn copy_columns_from(&mut self, other: &Cabin, columns: RangeInclusive<usize>) {
        debug_assert_eq!(self.width(), other.width());
        for (dst, src) in self.grid[..self.rows].iter_mut().zip(&other.grid) {
            dst[columns.clone()].copy_from_slice(&src[columns.clone()]);
        }
    }
}

/// Assign every seat column to its nearest aisle (ties go to the lower aisle)
/// and derive each zone's `[min, max]` span.
fn partition_zones(labels: &[ColumnLabel], aisles: &[usize]) -> (Vec<Zone>, Vec<Option<usize>>) {
    let mut column_zone = vec![None; labels.len()];
    let mut spans: Vec<(usize, usize)> = aisles.iter().map(|&a| (a, a)).collect();

    for (column, label) in labels.iter().enumerate() {
        if *label == ColumnLabel::Aisle {
            continue;
        }
        let mut nearest = 0;
        for (i, &aisle) in aisles.iter().enumerate() {
            if aisle.abs_diff(column) < aisles[nearest].abs_diff(column) {
                nearest = i;
            }
        }
        column_zone[column] = Some(nearest);
        let span = &mut spans[nearest];
        span.0 = span.0.min(column);
        span.1 = span.1.max(column);
    }

    let zones = aisles
        .iter()
        .zip(spans)
        .enumerate()
        .map(|(i, (&aisle, (min, max)))| Zone::new(ZoneId(i as u16), aisle, min, max))
        .collect();

    (zones, column_zone)
}
