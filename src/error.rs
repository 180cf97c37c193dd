// error.rs - Failures of the seed source
//
// Everything downstream of the seed is generated internally, so the only
// thing that can go wrong is the host handing us a broken random function.
// Those errors surface once, at construction, and are never retried.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("seed source is not callable")]
    SeedNotCallable,

    #[error("seed source threw: {0}")]
    SeedCall(String),

    #[error("seed source returned a non-number: {0}")]
    SeedNotANumber(String),

    #[error("seed source returned {0}, expected a value in [0, 1)")]
    SeedOutOfRange(f64),

    #[error("scripted seed source ran out of values after {0} draws")]
    SeedExhausted(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
