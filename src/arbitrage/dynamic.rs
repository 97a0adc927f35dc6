use std::time::Instant;

use smallvec::smallvec;
use strum::EnumCount;
use tracing::debug;

use super::{ PathSearch, score };
use crate::models::{ currency::Currency, path::{ ArbitragePath, Path, Stops }, rate_model::RateSource };

const C: usize = Currency::COUNT;

/// Multiplicative Bellman-Ford over exactly k stops, O(C^2 * k).
///
/// For every stop position and currency it keeps the best running value of
/// any prefix ending there, so the optimal score matches the exhaustive
/// search exactly (the products are evaluated in the same order). On ties the
/// predecessor and final stop earliest in declaration order win, which can
/// pick a different path than the exhaustive search when several paths share
/// the optimal score.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgramming;

impl PathSearch for DynamicProgramming {
    fn name(&self) -> &'static str {
        "dynamic"
    }

    fn search<R: RateSource + Sync + ?Sized>(&self, model: &R, hops: usize) -> ArbitragePath {
        if hops == 0 {
            return ArbitragePath { path: Path::empty(), score: score(model, &[]) };
        }

        let start = Instant::now();
        let base = model.base();

        let first: [f64; C] = std::array::from_fn(|c| 1.0 * model.rate(base, Currency::ALL[c]));
        // grown one stop at a time; `hops` is caller-controlled
        let mut values: Vec<[f64; C]> = vec![first];
        let mut predecessors: Vec<[usize; C]> = vec![[0; C]];

        for stop in 1..hops {
            let previous = values[stop - 1];
            let mut current = [f64::NEG_INFINITY; C];
            let mut from = [0usize; C];

            for to in Currency::ALL {
                for via in Currency::ALL {
                    let value = previous[via.index()] * model.rate(via, to);
                    if value > current[to.index()] {
                        current[to.index()] = value;
                        from[to.index()] = via.index();
                    }
                }
            }

            values.push(current);
            predecessors.push(from);
        }

        let last = values[hops - 1];
        let mut best_end = 0;
        let mut best_score = f64::NEG_INFINITY;
        for end in Currency::ALL {
            let value = last[end.index()] * model.rate(end, base);
            if value > best_score {
                best_score = value;
                best_end = end.index();
            }
        }

        let mut stops: Stops = smallvec![base; hops];
        let mut cursor = best_end;
        for stop in (0..hops).rev() {
            stops[stop] = Currency::ALL[cursor];
            cursor = predecessors[stop][cursor];
        }

        debug!(
            hops,
            states = hops * C,
            score = best_score,
            "Dynamic search finished in {:?}",
            start.elapsed()
        );

        ArbitragePath { path: Path(stops), score: best_score }
    }
}
