//! cooldown_trader - Main Entry Point
//!
//! Prints the maximum profit for a comma-separated price list, a cooldown and
//! a per-sale fee.
//!
//! Exit codes: 0 success, 1 usage error, 2 malformed prices,
//! 3 bad cooldown/fee/config, 4 numeric overflow.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use cooldown_trader::common::errors::{EXIT_OK, EXIT_USAGE};
use cooldown_trader::config::load_config;
use cooldown_trader::trading::validator::{parse_cooldown, parse_fee, parse_prices};
use cooldown_trader::{max_profit, plan_trades, TradingError, TradingParams};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated list of prices, e.g. "1,2,3,0,2"
    #[arg(allow_hyphen_values = true)]
    prices: String,

    /// Number of steps that must pass after a sale before the next purchase
    #[arg(allow_hyphen_values = true)]
    cooldown: String,

    /// Flat fee charged on every sale
    #[arg(allow_hyphen_values = true)]
    fee: String,

    /// Path to an optional configuration file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Also print one optimal trade schedule as JSON on a second line
    #[arg(long)]
    plan: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version go to stdout and exit 0
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(err.exit_code());
        }
    };

    let level = args
        .log_level
        .as_deref()
        .unwrap_or(config.settings.log_level.as_str());
    if let Err(err) = init_logging(level, config.settings.log_json) {
        eprintln!("error: {:#}", err);
        return ExitCode::from(EXIT_USAGE);
    }

    match run(&args) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = err
                .downcast_ref::<TradingError>()
                .map(TradingError::exit_code)
                .unwrap_or(EXIT_USAGE);
            ExitCode::from(code)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    // parameters first: a bad cooldown or fee is reported even when prices are bad too
    let params = TradingParams {
        cooldown: parse_cooldown(&args.cooldown)?,
        fee: parse_fee(&args.fee)?,
    };
    let prices = parse_prices(&args.prices)?;
    info!(
        steps = prices.len(),
        cooldown = params.cooldown,
        fee = %params.fee,
        "computing maximum profit"
    );

    let profit = max_profit(&prices, &params)?;
    println!("{}", profit.normalize());

    if args.plan {
        let plan = plan_trades(&prices, &params)?;
        debug!(round_trips = plan.len(), "printing trade plan");
        let json = serde_json::to_string(&plan).context("failed to serialize trade plan")?;
        println!("{}", json);
    }

    Ok(())
}

/// Install the global tracing subscriber; logs go to stderr so stdout only carries results
fn init_logging(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let installed = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.context("failed to install tracing subscriber")
}
