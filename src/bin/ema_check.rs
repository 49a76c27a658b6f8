//! Headless check: runs the same fetch engine as the window and prints what
//! the window would show.
//!
//! `cargo run --bin ema_check -- btc-usd --api-url http://localhost:5050`

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Check one symbol against the EMA service")]
struct CheckCli {
    /// Symbol exactly as the service expects it, e.g. btc-usd
    symbol: String,

    /// Base URL of the EMA service
    #[arg(long, default_value = ema_insight::config::API.base_url)]
    api_url: String,
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<std::process::ExitCode> {
    use anyhow::Context;
    use clap::Parser;
    use ema_insight::{ChartSeries, HttpInsightSource, InsightEngine, InsightState};
    use ema_insight::ui::utils::{format_percent, format_price};
    use ema_insight::utils::time_utils::epoch_sec_to_utc;
    use std::process::ExitCode;
    use std::sync::Arc;
    use std::time::Duration;

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = CheckCli::parse();

    let source = HttpInsightSource::new(&args.api_url).context("Failed to build HTTP client")?;
    let mut engine = InsightEngine::new(Arc::new(source), tokio::runtime::Handle::current());
    let mut state = InsightState::with_symbol(args.symbol.clone());

    if !engine.check(&mut state) {
        anyhow::bail!("symbol must not be empty");
    }
    while engine.update(&mut state) {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    if let Some(result) = state.result() {
        println!("Symbol:         {}", result.symbol);
        println!("Current Price:  {}", format_price(result.current_price));
        println!("EMA55:          {}", format_price(result.ema55));
        println!("Difference:     {}", format_percent(result.percent_difference));
        println!("Recommendation: {}", result.recommendation);
    }

    match ChartSeries::from_history(state.history()) {
        Ok(series) => {
            let ema_defined = series.ema.iter().filter(|p| p.value.is_some()).count();
            println!(
                "Chart:          {} candles, {} EMA points ({} defined)",
                series.candles.len(),
                series.ema.len(),
                ema_defined
            );
            if let Some((first, last)) = series.time_range() {
                println!(
                    "Range:          {} .. {} UTC",
                    epoch_sec_to_utc(first),
                    epoch_sec_to_utc(last)
                );
            }
        }
        Err(e) => println!("Chart:          not built ({e})"),
    }

    if state.error().is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Error: {}", state.error());
        Ok(ExitCode::FAILURE)
    }
}
