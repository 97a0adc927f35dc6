use anyhow::{ Context, Result };

use hop_arb::{ app, config::Config, utils::logging };

// Define command line arguments enum
#[derive(Debug)]
enum Command {
    Run,
    PerformanceTest,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let command = match std::env::args().nth(1).as_deref() {
        Some("perf-test") => Command::PerformanceTest,
        _ => Command::Run,
    };

    // Load configuration with helpful error messages
    let config = Config::from_env().context(
        "Failed to load configuration from environment. Check the ARB_* variables in your .env file."
    )?;

    // Guards must outlive every log call
    let _log_guards = logging
        ::init_logging(config.log_level, config.debug, &config.log_config)
        .context("Failed to initialize logging system")?;

    match command {
        Command::Run => app::normal_mode::run_normal_mode(config)?,
        Command::PerformanceTest => app::perf_mode::run_performance_test(config)?,
    }

    Ok(())
}
