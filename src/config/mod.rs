use anyhow::{ Context, Result };
use dotenv::dotenv;
use serde::{ Deserialize, Serialize };
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use strum_macros::EnumString;
use tracing::Level;

use crate::arbitrage::SearchStrategy;
use crate::utils::serde_helpers::{ deserialize_level, serialize_level };

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub debug: bool,
    pub max_hops: i64,
    pub strategy: SearchStrategy,
    pub parallel: bool,
    pub rates_file: Option<PathBuf>,
    pub bench_iterations: usize,

    #[serde(serialize_with = "serialize_level", deserialize_with = "deserialize_level")]
    pub log_level: Level,
    pub log_config: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub directory: PathBuf,
    pub filename_prefix: String,
    pub rotation: LogRotation,
    pub max_files: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl Config {
    /// Load `.env` if present, then read the `ARB_*` variables
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenv() {
            eprintln!("No .env file loaded ({}), using process environment only", e);
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self> where F: Fn(&str) -> Option<String> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        // Parse DEBUG
        let debug = var("ARB_DEBUG", "false")
            .parse::<bool>()
            .context("Failed to parse ARB_DEBUG environment variable")?;

        // Parse MAX_HOPS
        let max_hops = var("ARB_MAX_HOPS", "4")
            .parse::<i64>()
            .context("Failed to parse ARB_MAX_HOPS environment variable")?;

        // Parse STRATEGY
        let strategy_str = var("ARB_STRATEGY", "brute-force");
        let strategy = SearchStrategy::from_str(&strategy_str).with_context(||
            format!("Failed to parse ARB_STRATEGY environment variable: {}", strategy_str)
        )?;

        let parallel = var("ARB_PARALLEL", "false")
            .parse::<bool>()
            .context("Failed to parse ARB_PARALLEL environment variable")?;

        let rates_file = lookup("ARB_RATES_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let bench_iterations = var("ARB_BENCH_ITERATIONS", "1000")
            .parse::<usize>()
            .context("Failed to parse ARB_BENCH_ITERATIONS environment variable")?;

        // Parse LOG_LEVEL
        let log_level_str = var("ARB_LOG_LEVEL", "info");
        let log_level = Level::from_str(log_level_str.trim()).with_context(||
            format!("Failed to parse ARB_LOG_LEVEL environment variable: {}", log_level_str)
        )?;

        let log_rotation_str = var("ARB_LOG_ROTATION", "daily");
        let log_rotation = LogRotation::from_str(log_rotation_str.trim()).with_context(||
            format!("Failed to parse ARB_LOG_ROTATION environment variable: {}", log_rotation_str)
        )?;

        let max_files = lookup("ARB_LOG_MAX_FILES")
            .map(|s| s.trim().parse::<usize>())
            .transpose()
            .context("Failed to parse ARB_LOG_MAX_FILES environment variable")?;

        let log_config = LogConfig {
            directory: PathBuf::from(var("ARB_LOG_DIRECTORY", "logs")),
            filename_prefix: var("ARB_LOG_FILENAME_PREFIX", "hop_arb"),
            rotation: log_rotation,
            max_files,
        };

        Ok(Config {
            debug,
            max_hops,
            strategy,
            parallel,
            rates_file,
            bench_iterations,
            log_level,
            log_config,
        })
    }
}
