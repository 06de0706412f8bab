//! Base error type.
//!
//! Sub-crates define their own error enums and wrap the ones below them via
//! `From` impls so `?` works across crate boundaries.

use thiserror::Error;

use crate::PassengerId;

/// The error type for `ab-core`.
#[derive(Debug, Error)]
pub enum AbError {
    #[error("passenger {0} not found")]
    PassengerNotFound(PassengerId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ab-core`.
pub type AbResult<T> = Result<T, AbError>;
