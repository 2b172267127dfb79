use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use cedola::MonthLocale;

#[derive(Parser, Debug)]
#[command(name = "cedola")]
#[command(version, about = "Dividend calendar with a trade-window gain estimate", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Comma-separated tickers, e.g. "ENI.MI, ENEL.MI"
    #[arg(short, long)]
    pub tickers: Option<String>,

    /// CSV file with a `Ticker` column
    #[arg(short, long, conflicts_with = "tickers")]
    pub file: Option<PathBuf>,

    /// Days from the ex-dividend date to the simulated buy (-60..=60)
    #[arg(long)]
    pub buy_offset: Option<i32>,

    /// Days from the ex-dividend date to the simulated sell (-60..=60)
    #[arg(long)]
    pub sell_offset: Option<i32>,

    /// Show company names instead of tickers
    #[arg(long)]
    pub company: bool,

    /// Language of month names and headers
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// JSON configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tickers processed concurrently
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Per-provider timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Use the offline fixture connector (also enabled by `CEDOLA_USE_MOCK`)
    #[arg(long)]
    pub mock: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    It,
    En,
}

impl From<Locale> for MonthLocale {
    fn from(l: Locale) -> Self {
        match l {
            Locale::It => Self::Italian,
            Locale::En => Self::English,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Csv,
    Json,
}
