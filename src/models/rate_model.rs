use strum::EnumCount;

use super::currency::Currency;
use crate::error::InvalidModelError;

const C: usize = Currency::COUNT;

/// Anything that can quote a conversion factor between two currencies and
/// names the currency every cycle starts and ends in.
pub trait RateSource {
    fn base(&self) -> Currency;

    fn rate(&self, from: Currency, to: Currency) -> f64;
}

/// Validated, immutable exchange-rate matrix
#[derive(Debug, Clone, PartialEq)]
pub struct RateModel {
    rates: [[f64; C]; C],
    base: Currency,
}

impl RateModel {
    /// Build a model from row-major rates (`rates[from][to]`), rows and columns
    /// in `Currency` declaration order.
    pub fn new(rates: Vec<Vec<f64>>, base: Currency) -> Result<Self, InvalidModelError> {
        if rates.len() != C {
            return Err(InvalidModelError::WrongRowCount { expected: C, found: rates.len() });
        }

        let mut matrix = [[0.0; C]; C];

        for (from, row) in Currency::ALL.iter().copied().zip(rates.iter()) {
            if row.len() != C {
                return Err(InvalidModelError::NotSquare {
                    row: from,
                    expected: C,
                    found: row.len(),
                });
            }

            for (to, &rate) in Currency::ALL.iter().copied().zip(row.iter()) {
                if !rate.is_finite() {
                    return Err(InvalidModelError::NonFiniteRate { from, to, rate });
                }
                if rate <= 0.0 {
                    return Err(InvalidModelError::NonPositiveRate { from, to, rate });
                }
                if from == to && rate != 1.0 {
                    return Err(InvalidModelError::BadDiagonal { currency: from, rate });
                }
                matrix[from.index()][to.index()] = rate;
            }
        }

        Ok(Self { rates: matrix, base })
    }

    /// The reference four-currency table with `SHELL` as base
    pub fn reference() -> Self {
        Self {
            rates: [
                [1.0, 1.45, 0.52, 0.72],
                [0.7, 1.0, 0.31, 0.48],
                [1.95, 3.1, 1.0, 1.49],
                [1.34, 1.98, 0.64, 1.0],
            ],
            base: Currency::Shell,
        }
    }

    /// Same rates, different base currency
    pub fn with_base(&self, base: Currency) -> Self {
        Self { rates: self.rates, base }
    }

    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.rates
            .iter()
            .map(|row| row.to_vec())
            .collect()
    }
}

impl RateSource for RateModel {
    #[inline]
    fn base(&self) -> Currency {
        self.base
    }

    #[inline]
    fn rate(&self, from: Currency, to: Currency) -> f64 {
        self.rates[from.index()][to.index()]
    }
}
