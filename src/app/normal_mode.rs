use anyhow::{ Context, Result };
use tracing::{ info, warn };

use crate::{
    app::load_model,
    config::Config,
    models::rate_model::RateSource,
    utils::console::{ print_banner, print_config, print_results },
};

pub fn run_normal_mode(config: Config) -> Result<()> {
    print_banner("HOP-ARB");
    print_config(&config);

    let model = load_model(&config).context("Failed to load rate model")?;
    let base = model.base();

    info!(
        "Searching cycles from {} with up to {} hops ({} strategy{})",
        base,
        config.max_hops,
        config.strategy,
        if config.parallel { ", parallel" } else { "" }
    );

    let start = std::time::Instant::now();
    let results = config.strategy
        .best_paths(&model, config.max_hops, config.parallel)
        .context("Path search failed")?;

    info!("Searched {} hop counts in {:?}", results.len(), start.elapsed());

    if results.values().all(|r| !r.is_profitable()) {
        warn!("No profitable cycle found from {}", base);
    }

    print_results(base, &results);

    Ok(())
}
