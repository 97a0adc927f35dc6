// src/app/perf_mode.rs - compares the exhaustive and dynamic optimizers
use std::time::{ Duration, Instant };

use anyhow::{ Context, Result, bail };
use rand::{ Rng, SeedableRng, rngs::StdRng };
use strum::EnumCount;
use tracing::{ error, info };

use crate::{
    app::load_model,
    arbitrage::{ BruteForce, DynamicProgramming, PathSearch, HopResults },
    config::Config,
    models::{ currency::Currency, rate_model::{ RateModel, RateSource } },
    utils::console::{ print_banner, print_config },
};

/// Relative tolerance when comparing the optimal scores of the two optimizers
const SCORE_TOLERANCE: f64 = 1e-12;

/// Random models checked for agreement after the timing runs
const RANDOM_MODELS: usize = 200;

const RANDOM_SEED: u64 = 0x5eed;

/// Run `iterations` sweeps and return the last result with the mean duration
fn time_sweep<S: PathSearch>(
    search: &S,
    model: &RateModel,
    max_hops: i64,
    iterations: usize
) -> Result<(HopResults, Duration)> {
    let iterations = iterations.max(1);
    let start = Instant::now();
    let mut last = HopResults::new();

    for _ in 0..iterations {
        last = search.best_paths(model, max_hops)?;
    }

    Ok((last, start.elapsed() / (iterations as u32)))
}

/// Hop counts where the two result sets disagree on the optimal score
fn disagreements(a: &HopResults, b: &HopResults) -> Vec<usize> {
    a.iter()
        .filter(|(hops, left)| {
            match b.get(*hops) {
                Some(right) => {
                    let scale = left.score.abs().max(right.score.abs());
                    (left.score - right.score).abs() > SCORE_TOLERANCE * scale
                }
                None => true,
            }
        })
        .map(|(&hops, _)| hops)
        .collect()
}

pub fn random_model(rng: &mut StdRng) -> Result<RateModel> {
    let rows: Vec<Vec<f64>> = (0..Currency::COUNT)
        .map(|from| {
            (0..Currency::COUNT)
                .map(|to| if from == to { 1.0 } else { rng.random_range(0.25..2.5) })
                .collect()
        })
        .collect();
    let base = Currency::ALL[rng.random_range(0..Currency::COUNT)];
    Ok(RateModel::new(rows, base)?)
}

pub fn run_performance_test(config: Config) -> Result<()> {
    print_banner("HOP-ARB perf");
    print_config(&config);

    let model = load_model(&config).context("Failed to load rate model")?;
    info!(
        "Timing {} sweeps of 1..={} hops from {}",
        config.bench_iterations,
        config.max_hops,
        model.base()
    );

    let (exhaustive, exhaustive_time) = time_sweep(
        &BruteForce,
        &model,
        config.max_hops,
        config.bench_iterations
    )?;
    let (dynamic, dynamic_time) = time_sweep(
        &DynamicProgramming,
        &model,
        config.max_hops,
        config.bench_iterations
    )?;

    info!("{}: {:?} per sweep", BruteForce.name(), exhaustive_time);
    info!("{}: {:?} per sweep", DynamicProgramming.name(), dynamic_time);

    for (hops, result) in &exhaustive {
        if let Some(other) = dynamic.get(hops) {
            if other.path != result.path {
                info!(hops, "Optimizers chose different paths with equal score: {} vs {}", result.path, other.path);
            }
        }
    }

    let mismatched = disagreements(&exhaustive, &dynamic);
    if !mismatched.is_empty() {
        error!("Optimal scores differ for hop counts {:?}", mismatched);
        bail!("Optimizers disagree on the configured model");
    }

    let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
    let max_hops = config.max_hops.clamp(0, 5);
    for i in 0..RANDOM_MODELS {
        let model = random_model(&mut rng)?;
        let exhaustive = BruteForce.best_paths(&model, max_hops)?;
        let dynamic = DynamicProgramming.best_paths(&model, max_hops)?;

        let mismatched = disagreements(&exhaustive, &dynamic);
        if !mismatched.is_empty() {
            error!(model = i, "Optimal scores differ for hop counts {:?}", mismatched);
            bail!("Optimizers disagree on random model #{}", i);
        }
    }

    info!("✓ Optimizers agree on the configured model and {} random models", RANDOM_MODELS);

    Ok(())
}
