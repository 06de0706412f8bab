use ab_cabin::CabinError;
use ab_core::PassengerId;
use thiserror::Error;

/// Internal-invariant violations surfaced by the boarding engine.
///
/// None of these occur for a cabin built by `Cabin::build` and queues built by
/// `sell_seats`; they exist so a broken invariant fails loudly instead of
/// silently dropping a passenger from the grid.
#[derive(Debug, Error)]
pub enum BoardingError {
    #[error("passenger {0} is not in this zone's passenger set")]
    PassengerNotFound(PassengerId),

    #[error("passenger {0} has no seat but is on the move")]
    Unassigned(PassengerId),

    #[error("cell ({row}, {column}) would hold more than two passengers")]
    Overcrowded { row: usize, column: usize },

    #[error("passenger {passenger} cannot step into cell ({row}, {column})")]
    InvalidMove {
        passenger: PassengerId,
        row:       usize,
        column:    usize,
    },

    #[error(transparent)]
    Cabin(#[from] CabinError),
}

pub type BoardingResult<T> = Result<T, BoardingError>;
