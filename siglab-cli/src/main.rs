//! Siglab CLI — run signal backtests from the command line.
//!
//! The engine itself is I/O-free; this binary is the caller side of the
//! contract: it loads an aligned price/signal series from CSV, builds an
//! engine config from a TOML file and/or flags, runs the backtest, and
//! prints a report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use siglab_core::{run_backtest, BacktestResult, EngineConfig};

/// One trading day for daily bars.
const DT_DAILY: f64 = 1.0 / 252.0;

#[derive(Parser)]
#[command(name = "siglab", about = "Siglab CLI — single-asset signal backtester")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a backtest over a CSV of aligned price/signal rows.
    Run {
        /// CSV file with `price,signal` columns (signal: -1, 0, or 1).
        #[arg(long)]
        data: PathBuf,

        /// TOML file setting initial_capital, transaction_cost_pct,
        /// risk_free_rate, and dt_in_years. Flags override it.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Starting capital. Defaults to 100000.
        #[arg(long)]
        capital: Option<f64>,

        /// Proportional transaction cost per position change (0.001 = 10 bps).
        #[arg(long)]
        cost: Option<f64>,

        /// Annual risk-free rate.
        #[arg(long)]
        rate: Option<f64>,

        /// Time step in years. Defaults to 1/252 (daily bars).
        #[arg(long)]
        dt: Option<f64>,

        /// Print the full result as JSON instead of the summary block.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run the built-in 20-bar demo scenario.
    Demo {
        /// Print the full result as JSON instead of the summary block.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data,
            config,
            capital,
            cost,
            rate,
            dt,
            json,
        } => run_cmd(&data, config.as_deref(), capital, cost, rate, dt, json),
        Commands::Demo { json } => demo_cmd(json),
    }
}

// ── run ──────────────────────────────────────────────────────────────

/// Optional engine settings loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    initial_capital: Option<f64>,
    transaction_cost_pct: Option<f64>,
    risk_free_rate: Option<f64>,
    dt_in_years: Option<f64>,
}

impl FileConfig {
    fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// One row of the input series.
#[derive(Debug, Deserialize)]
struct SeriesRow {
    price: f64,
    signal: i32,
}

fn load_series(path: &Path) -> Result<(Vec<f64>, Vec<i32>)> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening data file {}", path.display()))?;

    let mut prices = Vec::new();
    let mut signals = Vec::new();
    for (line, row) in reader.deserialize().enumerate() {
        let row: SeriesRow = row.with_context(|| format!("data row {}", line + 1))?;
        prices.push(row.price);
        signals.push(row.signal);
    }
    Ok((prices, signals))
}

fn run_cmd(
    data: &Path,
    config_path: Option<&Path>,
    capital: Option<f64>,
    cost: Option<f64>,
    rate: Option<f64>,
    dt: Option<f64>,
    json: bool,
) -> Result<()> {
    let file = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    // Precedence: flag, then config file, then default.
    let config = EngineConfig::new(
        capital.or(file.initial_capital).unwrap_or(100_000.0),
        cost.or(file.transaction_cost_pct).unwrap_or(0.001),
        rate.or(file.risk_free_rate).unwrap_or(0.0),
    )?;
    let dt_in_years = dt.or(file.dt_in_years).unwrap_or(DT_DAILY);
    if dt_in_years <= 0.0 {
        bail!("dt must be positive, got {dt_in_years}");
    }

    let (prices, signals) = load_series(data)?;
    let result = run_backtest(&config, &prices, &signals, dt_in_years);
    if result.is_empty() {
        bail!(
            "nothing to backtest: {} prices, {} signals (need at least 2 aligned rows)",
            prices.len(),
            signals.len()
        );
    }

    report(&result, json)
}

// ── demo ─────────────────────────────────────────────────────────────

/// Built-in 20-bar mean-reversion demo: long near the lows, short near the
/// highs, 100k capital, 10 bps per side, daily steps.
fn demo_cmd(json: bool) -> Result<()> {
    let prices = vec![
        100.0, 101.0, 102.0, 101.0, 100.0, //
        99.0, 98.0, 99.0, 100.0, 102.0, //
        101.0, 100.0, 99.0, 98.0, 97.0, //
        98.0, 99.0, 100.0, 101.0, 103.0,
    ];
    let signals = vec![
        0, 0, -1, 0, 0, //
        1, 1, 0, 0, -1, //
        0, 0, 1, 1, 0, //
        0, 0, 0, 0, -1,
    ];

    let config = EngineConfig::new(100_000.0, 0.001, 0.0)?;
    let result = run_backtest(&config, &prices, &signals, DT_DAILY);
    report(&result, json)
}

// ── reporting ────────────────────────────────────────────────────────

fn report(result: &BacktestResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print_summary(result);
    }
    Ok(())
}

fn print_summary(result: &BacktestResult) {
    println!();
    println!("=== Backtest Result ===");
    println!("Steps:          {}", result.len());
    println!();
    println!("--- Performance ---");
    println!("Total Return:   {:.2}%", result.total_return * 100.0);
    println!("Max Drawdown:   {:.2}%", result.max_drawdown * 100.0);
    println!("Sharpe:         {:.3}", result.sharpe_ratio);
    if let Some(final_eq) = result.final_equity() {
        println!("Final Equity:   {final_eq:.2}");
    }
}
