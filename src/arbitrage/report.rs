use ordered_float::OrderedFloat;

use super::HopResults;
use crate::models::{ currency::Currency, path::ArbitragePath };

/// `"<hops>: <path> -> <score>"` with the score to six decimals
pub fn render_line(hops: usize, result: &ArbitragePath) -> String {
    format!("{}: {} -> {:.6}", hops, result.path, result.score)
}

/// Cycle written out from base to base, e.g. `SHELL → PIZZA → SHELL`
pub fn render_route(base: Currency, result: &ArbitragePath) -> String {
    result.path
        .route(base)
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Results sorted by score, best first. Equal scores keep ascending hop order.
pub fn ranked(results: &HopResults) -> Vec<(usize, &ArbitragePath)> {
    let mut ranked: Vec<(usize, &ArbitragePath)> = results
        .iter()
        .map(|(&hops, result)| (hops, result))
        .collect();
    ranked.sort_by_key(|(_, result)| std::cmp::Reverse(OrderedFloat(result.score)));
    ranked
}
