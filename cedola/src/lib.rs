//! Cedola builds a current-year dividend calendar for a list of tickers and
//! estimates what a buy-before / sell-after trade around each ex-dividend date
//! would have earned.
//!
//! Overview
//! - Routes provider calls to connectors that implement the `cedola_core` contracts,
//!   in registration order, falling back to the next connector on failure.
//! - Aggregates full dividend histories per ticker, localizes them onto a
//!   month/day grid, and joins a multi-year mean per ticker.
//! - Enriches current-year rows with the latest close, yield, deviation from the
//!   mean, and (once the sell date has passed) the simulated trade gain.
//! - Per-ticker failures never abort a run; they are collected as warnings on the
//!   report.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use cedola::{Cedola, TradeWindow};
//!
//! let yf = Arc::new(cedola_yfinance::YfConnector::try_new_default()?);
//! let cedola = Cedola::builder()
//!     .with_connector(yf)
//!     .trade_window(TradeWindow::try_new(-20, 2)?)
//!     .build()?;
//!
//! let report = cedola
//!     .calendar()
//!     .tickers(["ENI.MI", "ENEL.MI"])
//!     .run()
//!     .await?;
//! for row in &report.rows {
//!     println!("{} {} {} {}", row.month_name, row.day, row.ticker, row.dividend);
//! }
//! ```
//!
//! Reading tickers from a CSV file with a `Ticker` column:
//! ```rust,ignore
//! let tickers = cedola::read_ticker_file("tickers.csv")?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;
/// Ticker list sources (comma-separated text and CSV).
pub mod tickers;

pub use cedola_core::*;
pub use core::{Cedola, CedolaBuilder};
pub use router::calendar::CalendarBuilder;
pub use router::util::collapse_errors;
pub use tickers::{parse_ticker_list, read_ticker_csv, read_ticker_file};
