//! The per-round cell transition function.

use ab_cabin::{Cabin, CabinError, Cell, Zone};
use ab_core::{Passenger, PassengerId, Seat};
use tracing::trace;

use crate::{BoardingError, BoardingQueue, BoardingResult, PassengerAccess, ZoneReport};

/// Advance one zone by exactly one round.
///
/// Sweeps the seat rows back to front and, within each row, the zone's
/// columns in [`Zone::column_order`].  Afterwards, if the entry cell (row 0 of
/// the aisle) is free, the next passenger in `queue` steps into it.
///
/// Cells holding a seated passenger are frozen and skipped.  Calling this on
/// a zone whose passengers are all seated and whose queue is empty changes
/// nothing.
pub fn advance_zone<P>(
    cabin:      &mut Cabin,
    zone:       &Zone,
    queue:      &mut BoardingQueue,
    passengers: &mut P,
) -> BoardingResult<ZoneReport>
where
    P: PassengerAccess + ?Sized,
{
    let mut report = ZoneReport::default();

    for row in (0..cabin.seat_rows()).rev() {
        for &column in zone.column_order() {
            match *cabin.cell(row, column) {
                Cell::InAisle(id) if column == zone.aisle => {
                    aisle_step(cabin, row, column, id, passengers, &mut report)?;
                }
                Cell::Transiting { passenger: front, seat }
                | Cell::Blocked { passer: front, seat, .. } => {
                    if !lookup(passengers, front)?.is_seated {
                        seat_step(cabin, row, column, front, seat, passengers, &mut report)?;
                    }
                }
                Cell::InAisle(_) | Cell::EmptySeat(_) | Cell::AisleOpen | Cell::Label(_) => {}
            }
        }
    }

    if *cabin.cell(0, zone.aisle) == Cell::AisleOpen {
        if let Some(next) = queue.pop_front() {
            cabin.set(0, zone.aisle, Cell::InAisle(next));
            report.boarded += 1;
        }
    }

    Ok(report)
}

// ── Transition rules ──────────────────────────────────────────────────────────

/// A passenger standing in the aisle: walk back, stow, or turn into the row.
fn aisle_step<P>(
    cabin:      &mut Cabin,
    row:        usize,
    column:     usize,
    id:         PassengerId,
    passengers: &mut P,
    report:     &mut ZoneReport,
) -> BoardingResult<()>
where
    P: PassengerAccess + ?Sized,
{
    let passenger = lookup_mut(passengers, id)?;
    let seat = passenger.seat.ok_or(BoardingError::Unassigned(id))?;

    if seat.row_index() != row {
        // Congestion: wait until the aisle cell behind is free.
        let next_row = row + 1;
        if next_row < cabin.seat_rows() && *cabin.cell(next_row, column) == Cell::AisleOpen {
            cabin.set(next_row, column, Cell::InAisle(id));
            cabin.set(row, column, Cell::AisleOpen);
            report.advanced += 1;
        }
        return Ok(());
    }

    if passenger.has_baggage {
        passenger.stow_baggage();
        report.stowed += 1;
        return Ok(());
    }

    let target = step_toward(cabin, column, seat)?;
    enter(cabin, row, target, id, report)?;
    cabin.set(row, column, Cell::AisleOpen);
    report.stepped += 1;
    Ok(())
}

/// The front passenger of a seat cell: sit down if this is their seat,
/// otherwise move one cell farther from the aisle.
fn seat_step<P>(
    cabin:      &mut Cabin,
    row:        usize,
    column:     usize,
    front:      PassengerId,
    cell_seat:  Seat,
    passengers: &mut P,
    report:     &mut ZoneReport,
) -> BoardingResult<()>
where
    P: PassengerAccess + ?Sized,
{
    let passenger = lookup_mut(passengers, front)?;
    let seat = passenger.seat.ok_or(BoardingError::Unassigned(front))?;

    if seat == cell_seat {
        passenger.sit_down();
        report.seated += 1;
        trace!(passenger = %front, seat = %seat, "seated");
        return Ok(());
    }

    let target = step_toward(cabin, column, seat)?;
    enter(cabin, row, target, front, report)?;

    // Whoever the passer was obstructing stays exactly where they are.
    let origin = match *cabin.cell(row, column) {
        Cell::Blocked { blocked, seat, .. } => Cell::Transiting { passenger: blocked, seat },
        _ => Cell::EmptySeat(cell_seat),
    };
    cabin.set(row, column, origin);
    report.stepped += 1;
    Ok(())
}

/// Merge `id` into the seat cell at `(row, target)`.
fn enter(
    cabin:  &mut Cabin,
    row:    usize,
    target: usize,
    id:     PassengerId,
    report: &mut ZoneReport,
) -> BoardingResult<()> {
    let merged = match *cabin.try_cell(row, target)? {
        Cell::EmptySeat(seat) => Cell::Transiting { passenger: id, seat },
        Cell::Transiting { passenger: other, seat } => {
            report.blocked += 1;
            Cell::Blocked { passer: id, blocked: other, seat }
        }
        Cell::Blocked { .. } => {
            return Err(BoardingError::Overcrowded { row, column: target });
        }
        Cell::AisleOpen | Cell::InAisle(_) | Cell::Label(_) => {
            return Err(BoardingError::InvalidMove { passenger: id, row, column: target });
        }
    };
    cabin.set(row, target, merged);
    Ok(())
}

/// Column one step from `column` toward `seat`, via the label row.
fn step_toward(cabin: &Cabin, column: usize, seat: Seat) -> BoardingResult<usize> {
    let seat_column = cabin
        .column_of(seat.letter)
        .ok_or(CabinError::UnknownSeatLetter(seat.letter))?;
    Ok(if seat_column < column { column - 1 } else { column + 1 })
}

#[inline]
fn lookup<P>(passengers: &P, id: PassengerId) -> BoardingResult<&Passenger>
where
    P: PassengerAccess + ?Sized,
{
    passengers.passenger(id).ok_or(BoardingError::PassengerNotFound(id))
}

#[inline]
fn lookup_mut<P>(passengers: &mut P, id: PassengerId) -> BoardingResult<&mut Passenger>
where
    P: PassengerAccess + ?Sized,
{
    passengers.passenger_mut(id).ok_or(BoardingError::PassengerNotFound(id))
}
