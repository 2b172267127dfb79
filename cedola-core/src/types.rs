//! Re-export of foundational types from `paft` and `cedola-types`.
// Consolidated re-exports so downstream crates can depend on `cedola-core` only

pub use cedola_types::{CedolaError, Capability};
pub use cedola_types::{CalendarReport, CalendarRow, TickerSummary, TickerWarning};
pub use cedola_types::{CedolaConfig, MonthLocale, TradeWindow};
pub use cedola_types::{DividendEvent, DividendHistory, DividendPayment};

pub use paft::domain::{AssetKind, Exchange, Instrument};

pub use paft::money::{Currency, IsoCurrency, Money};

pub use rust_decimal::Decimal;

pub use paft::fundamentals::profile::{CompanyProfile, FundProfile, Profile};

pub use paft::market::action::Action;
pub use paft::market::requests::history::{Interval, Range};
pub use paft::market::responses::history::{Candle, HistoryMeta, HistoryResponse};
