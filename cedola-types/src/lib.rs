//! Cedola-specific data transfer objects and configuration primitives built on top of `paft`.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod event;
mod reports;

pub use capability::Capability;
pub use config::{CedolaConfig, MonthLocale, TradeWindow};
pub use error::CedolaError;
pub use event::{DividendEvent, DividendHistory, DividendPayment};
pub use reports::{CalendarReport, CalendarRow, TickerSummary, TickerWarning};
