//! Bounded-depth currency arbitrage search.
//!
//! Given a validated [`RateModel`] over a closed set of [`Currency`] values,
//! find for each hop count the cycle from the base currency back to itself
//! that compounds to the largest amount of base currency.

pub mod app;
pub mod arbitrage;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use arbitrage::{ best_path, best_paths, score, BruteForce, DynamicProgramming, PathSearch, SearchStrategy };
pub use error::{ ArbError, InvalidModelError };
pub use models::{
    currency::Currency,
    path::{ ArbitragePath, Path },
    rate_model::{ RateModel, RateSource },
    rate_table::RateTable,
};
