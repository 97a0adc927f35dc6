pub mod normal_mode;
pub mod perf_mode;

use anyhow::{ Context, Result };
use tracing::info;

use crate::config::Config;
use crate::models::{ rate_model::RateModel, rate_table::RateTable };

/// Rate model from `ARB_RATES_FILE`, or the built-in reference table
pub fn load_model(config: &Config) -> Result<RateModel> {
    match &config.rates_file {
        Some(path) => {
            info!("Loading rate table from {}", path.display());
            RateTable::from_json_file(path)?
                .into_model()
                .with_context(|| format!("Rejected rate table in {}", path.display()))
        }
        None => {
            info!("No rate table configured, using the reference table");
            Ok(RateModel::reference())
        }
    }
}
