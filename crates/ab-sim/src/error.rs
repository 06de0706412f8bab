use ab_boarding::BoardingError;
use ab_cabin::CabinError;
use ab_core::{AbError, PassengerId, Round};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] AbError),

    #[error("{got} boarding queues supplied for {expected} aisle zones")]
    ZoneCountMismatch { expected: usize, got: usize },

    #[error("passenger {passenger} is queued for zone {zone} but does not hold a seat there")]
    QueueMismatch { passenger: PassengerId, zone: usize },

    #[error("no movement for {idle_rounds} consecutive rounds at {round}")]
    Stalled { round: Round, idle_rounds: u64 },

    #[error("layout error: {0}")]
    Cabin(#[from] CabinError),

    #[error("boarding engine error: {0}")]
    Boarding(#[from] BoardingError),
}

pub type SimResult<T> = Result<T, SimError>;
