use std::time::Instant;

use tracing::debug;

use super::{ PathSearch, candidates::Candidates, score };
use crate::models::{ path::{ ArbitragePath, Path }, rate_model::RateSource };

/// Exhaustive search over all C^k candidate sequences. Ties go to the
/// candidate that comes first in enumeration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl PathSearch for BruteForce {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn search<R: RateSource + Sync + ?Sized>(&self, model: &R, hops: usize) -> ArbitragePath {
        let start = Instant::now();
        let mut scanned = 0usize;
        let mut best: Option<ArbitragePath> = None;

        for stops in Candidates::new(hops) {
            scanned += 1;
            let value = score(model, &stops);

            // strict comparison keeps the first maximum
            if best.as_ref().is_none_or(|b| value > b.score) {
                best = Some(ArbitragePath { path: Path(stops), score: value });
            }
        }

        let best = best.unwrap_or_else(|| ArbitragePath {
            path: Path::empty(),
            score: score(model, &[]),
        });

        debug!(
            hops,
            scanned,
            expected = Candidates::total(hops),
            path = %best.path,
            score = best.score,
            "Brute-force search finished in {:?}",
            start.elapsed()
        );

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ currency::Currency::{ self, * }, rate_model::RateModel };

    /// Every rate 1.0: all candidates tie at 1.0
    struct Flat;

    impl RateSource for Flat {
        fn base(&self) -> Currency {
            Shell
        }

        fn rate(&self, _from: Currency, _to: Currency) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_zero_hops_is_no_trade() {
        let result = BruteForce.search(&RateModel::reference(), 0);
        assert_eq!(result.path, Path::empty());
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_ties_resolve_to_first_enumerated() {
        let result = BruteForce.search(&Flat, 3);
        assert_eq!(result.path, Path::from([Snowball, Snowball, Snowball]));
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_single_hop_reference() {
        let result = BruteForce.search(&RateModel::reference(), 1);
        assert_eq!(result.path, Path::from([Shell]));
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_repeated_calls_identical() {
        let model = RateModel::reference();
        let first = BruteForce.search(&model, 4);
        for _ in 0..3 {
            assert_eq!(BruteForce.search(&model, 4), first);
        }
    }
}
