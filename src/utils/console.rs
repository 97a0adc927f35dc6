use crate::arbitrage::{ HopResults, report::{ ranked, render_line, render_route } };
use crate::config::Config;
use crate::models::currency::Currency;
use tracing::info;
use colored::*;
use figlet_rs::FIGfont;

pub fn print_config(config: &Config) {
    let json = serde_json::to_string_pretty(config).unwrap_or_default();

    info!("\n{}: \n{}", String::from("[CONFIG]").blue().underline(), json.magenta());
}

pub fn print_banner(text: &str) {
    let figure = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|f| f.to_string()));

    match figure {
        Some(figure) => info!("\n{}", figure),
        None => info!("{}", text),
    }
}

/// Print the contract lines followed by a ranked, colored summary
pub fn print_results(base: Currency, results: &HopResults) {
    for (&hops, result) in results {
        println!("{}", render_line(hops, result));
    }

    if results.is_empty() {
        return;
    }

    println!("\n{}", "=== BEST CYCLES BY SCORE ===".bright_purple().bold());

    for (i, (hops, result)) in ranked(results).into_iter().enumerate() {
        let profit = format!("{:+.4}%", result.profit_percentage());
        let profit = if result.is_profitable() { profit.bright_green().bold() } else { profit.red() };

        println!(
            "#{} {} hops | {} | Score: {} | Profit: {}",
            i + 1,
            hops.to_string().cyan(),
            render_route(base, result).yellow(),
            format!("{:.6}", result.score).green(),
            profit
        );
    }

    println!("{}\n", "============================".bright_purple().bold());
}
