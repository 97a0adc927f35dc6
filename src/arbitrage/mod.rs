pub mod brute_force;
pub mod candidates;
pub mod dynamic;
pub mod report;

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{ Deserialize, Serialize };
use strum_macros::{ Display, EnumString };

use crate::{
    error::{ ArbError, Result },
    models::{ currency::Currency, path::ArbitragePath, rate_model::RateSource },
};

pub use brute_force::BruteForce;
pub use dynamic::DynamicProgramming;

/// Best path per hop count, keyed by hop count
pub type HopResults = BTreeMap<usize, ArbitragePath>;

/// Compound the rates along base -> stops[0] -> ... -> stops[n-1] -> base
#[inline]
pub fn score<R: RateSource + ?Sized>(model: &R, stops: &[Currency]) -> f64 {
    let base = model.base();
    let (value, last) = stops
        .iter()
        .fold((1.0, base), |(value, current), &next| (value * model.rate(current, next), next));
    value * model.rate(last, base)
}

fn hop_count(hops: i64) -> Result<usize> {
    usize::try_from(hops).map_err(|_| ArbError::InvalidHopCount(hops))
}

/// A strategy for finding the highest-scoring cycle with a fixed number of
/// intermediate stops. Every hop count is searched independently.
pub trait PathSearch: Sync {
    fn name(&self) -> &'static str;

    /// Best cycle with exactly `hops` intermediate stops
    fn search<R: RateSource + Sync + ?Sized>(&self, model: &R, hops: usize) -> ArbitragePath;

    fn best_path<R: RateSource + Sync + ?Sized>(&self, model: &R, hops: i64) -> Result<ArbitragePath> {
        let hops = hop_count(hops)?;
        Ok(self.search(model, hops))
    }

    /// Best path for every hop count in `1..=max_hops`
    fn best_paths<R: RateSource + Sync + ?Sized>(&self, model: &R, max_hops: i64) -> Result<HopResults> {
        let max_hops = hop_count(max_hops)?;
        Ok(
            (1..=max_hops)
                .map(|hops| (hops, self.search(model, hops)))
                .collect()
        )
    }

    /// Same result as `best_paths`, with hop counts searched on the rayon pool
    fn best_paths_parallel<R: RateSource + Sync + ?Sized>(
        &self,
        model: &R,
        max_hops: i64
    ) -> Result<HopResults> {
        let max_hops = hop_count(max_hops)?;
        Ok(
            (1..=max_hops)
                .into_par_iter()
                .map(|hops| (hops, self.search(model, hops)))
                .collect()
        )
    }
}

/// Search for one hop count with the exhaustive optimizer
pub fn best_path<R: RateSource + Sync + ?Sized>(model: &R, hops: i64) -> Result<ArbitragePath> {
    BruteForce.best_path(model, hops)
}

/// Sweep hop counts `1..=max_hops` with the exhaustive optimizer
pub fn best_paths<R: RateSource + Sync + ?Sized>(model: &R, max_hops: i64) -> Result<HopResults> {
    BruteForce.best_paths(model, max_hops)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SearchStrategy {
    BruteForce,
    Dynamic,
}

impl SearchStrategy {
    pub fn best_paths<R: RateSource + Sync + ?Sized>(
        self,
        model: &R,
        max_hops: i64,
        parallel: bool
    ) -> Result<HopResults> {
        match (self, parallel) {
            (SearchStrategy::BruteForce, false) => BruteForce.best_paths(model, max_hops),
            (SearchStrategy::BruteForce, true) => BruteForce.best_paths_parallel(model, max_hops),
            (SearchStrategy::Dynamic, false) => DynamicProgramming.best_paths(model, max_hops),
            (SearchStrategy::Dynamic, true) => DynamicProgramming.best_paths_parallel(model, max_hops),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rate_model::RateModel;
    use std::str::FromStr;
    use Currency::*;

    #[test]
    fn test_score_empty_path_is_round_trip_at_base() {
        let model = RateModel::reference();
        assert_eq!(score(&model, &[]), 1.0);
    }

    #[test]
    fn test_score_compounds_in_order() {
        let model = RateModel::reference();
        // SHELL -> SNOWBALL -> SILICON_NUGGET -> SHELL
        let expected = 1.0 * 1.34 * 0.52 * 1.49;
        assert_eq!(score(&model, &[Snowball, SiliconNugget]), expected);
    }

    #[test]
    fn test_score_counts_base_self_loop() {
        let model = RateModel::reference();
        assert_eq!(score(&model, &[Shell]), 1.0);
        assert_eq!(score(&model, &[Shell, Snowball]), score(&model, &[Snowball]));
    }

    #[test]
    fn test_negative_hops_rejected() {
        let model = RateModel::reference();
        assert_eq!(best_path(&model, -1), Err(ArbError::InvalidHopCount(-1)));
        assert_eq!(best_paths(&model, -3), Err(ArbError::InvalidHopCount(-3)));
        assert_eq!(
            DynamicProgramming.best_path(&model, -1),
            Err(ArbError::InvalidHopCount(-1))
        );
    }

    #[test]
    fn test_sweep_of_zero_is_empty() {
        let model = RateModel::reference();
        assert!(best_paths(&model, 0).unwrap().is_empty());
    }

    #[test]
    fn test_parallel_sweep_matches_sequential() {
        let model = RateModel::reference();
        for strategy in [SearchStrategy::BruteForce, SearchStrategy::Dynamic] {
            let sequential = strategy.best_paths(&model, 5, false).unwrap();
            let parallel = strategy.best_paths(&model, 5, true).unwrap();
            assert_eq!(sequential, parallel);
            assert_eq!(sequential.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!(SearchStrategy::from_str("brute-force").unwrap(), SearchStrategy::BruteForce);
        assert_eq!(SearchStrategy::from_str("Dynamic").unwrap(), SearchStrategy::Dynamic);
        assert_eq!(SearchStrategy::Dynamic.to_string(), "dynamic");
        assert!(SearchStrategy::from_str("greedy").is_err());
    }
}
