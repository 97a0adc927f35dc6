use thiserror::Error;

use crate::models::currency::Currency;

/// Reasons a rate matrix is rejected at construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidModelError {
    #[error("expected {expected} rows, found {found}")] WrongRowCount {
        expected: usize,
        found: usize,
    },

    #[error("row {row} has {found} columns, expected {expected}")] NotSquare {
        row: Currency,
        expected: usize,
        found: usize,
    },

    #[error("rate {from} -> {to} is not finite ({rate})")] NonFiniteRate {
        from: Currency,
        to: Currency,
        rate: f64,
    },

    #[error("rate {from} -> {to} must be positive, got {rate}")] NonPositiveRate {
        from: Currency,
        to: Currency,
        rate: f64,
    },

    #[error("diagonal rate for {currency} must be 1.0, got {rate}")] BadDiagonal {
        currency: Currency,
        rate: f64,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArbError {
    #[error("invalid rate model: {0}")] InvalidModel(#[from] InvalidModelError),

    #[error("invalid hop count: {0} (must be >= 0)")] InvalidHopCount(i64),
}

pub type Result<T> = std::result::Result<T, ArbError>;
