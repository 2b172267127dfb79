//! `cedola` command-line entry point.
//!
//! Suggested logging: `RUST_LOG=info,cedola=debug,cedola_yfinance=debug`.

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cedola::{Cedola, CedolaConfig, TradeWindow, parse_ticker_list, read_ticker_file};

mod cli;
mod connector;
mod render;

use cli::{Args, Format};
use render::{Labels, render_csv, render_json, render_table};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let args = Args::parse();
    let cfg = load_config(&args)?;
    let labels = Labels::for_locale(cfg.month_locale);

    let tickers = resolve_tickers(&args);
    if tickers.is_empty() {
        println!("{}", labels.no_tickers);
        return Ok(());
    }
    if cfg.trade_window.is_inverted() {
        eprintln!("{}", labels.inverted(&cfg.trade_window));
    }

    let cedola = Cedola::builder()
        .with_connector(connector::get_connector(args.mock)?)
        .config(cfg.clone())
        .build()?;
    let report = cedola.calendar().tickers(tickers).run().await?;

    for w in &report.warnings {
        tracing::warn!(ticker = %w.ticker, error = %w.error, "ticker skipped or incomplete");
        eprintln!("warning: {w}");
    }

    let headers = labels.headers(args.company, cfg.history_years);
    if report.is_empty() {
        let msg = labels.no_data(report.year);
        if args.format == Format::Table {
            println!("{msg}");
            return Ok(());
        }
        eprintln!("{msg}");
    }
    match args.format {
        Format::Table => {
            println!("{}", labels.caption(report.year));
            println!("{}", render_table(&report, headers, args.company));
            println!();
            println!("{}", labels.disclaimer);
        }
        Format::Csv => print!("{}", render_csv(&report, headers, args.company)?),
        Format::Json => println!("{}", render_json(&report)?),
    }
    Ok(())
}

/// Start from the JSON file (or defaults) and apply flag overrides.
fn load_config(args: &Args) -> Result<CedolaConfig, Box<dyn Error>> {
    let mut cfg: CedolaConfig = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => CedolaConfig::default(),
    };

    cfg.trade_window = TradeWindow::try_new(
        args.buy_offset.unwrap_or(cfg.trade_window.buy_offset_days),
        args.sell_offset.unwrap_or(cfg.trade_window.sell_offset_days),
    )?;
    if let Some(locale) = args.locale {
        cfg.month_locale = locale.into();
    }
    if let Some(n) = args.concurrency {
        cfg.max_concurrency = n;
    }
    if let Some(secs) = args.timeout_secs {
        cfg.provider_timeout = Some(Duration::from_secs(secs));
    }
    cfg.validate()?;
    Ok(cfg)
}

/// A file that cannot be read is reported and treated as an empty list.
fn resolve_tickers(args: &Args) -> Vec<String> {
    if let Some(path) = &args.file {
        return read_ticker_file(path).unwrap_or_else(|e| {
            tracing::error!(path = %path.display(), error = %e, "cannot read ticker file");
            eprintln!("error: {e}");
            Vec::new()
        });
    }
    args.tickers
        .as_deref()
        .map(parse_ticker_list)
        .unwrap_or_default()
}
