//! cedola-core
//!
//! Core types, traits, and schedule math shared across the cedola workspace.
//!
//! - `types`: re-exports of the `paft` market types and cedola DTOs.
//! - `connector`: the `CedolaConnector` trait and its capability provider traits.
//! - `schedule`: pure helpers turning dividend histories into a calendar
//!   (normalization, month localization, historical means, trade windows,
//!   percentages).
//!
//! Nothing in `schedule` performs I/O; every function is deterministic in its
//! inputs, including the reference instant used for trade-window eligibility.
#![warn(missing_docs)]

/// Connector capability traits and the primary `CedolaConnector` interface.
pub mod connector;
/// Pure dividend schedule computations.
pub mod schedule;
pub mod types;

pub use connector::CedolaConnector;
pub use schedule::localize::{CalendarEntry, LocalizedMonth, localize, month_name};
pub use schedule::mean::historical_means;
pub use schedule::normalize::{exchange_local_date, to_events};
pub use schedule::percent::{delta_pct, pct_of, yield_pct};
pub use schedule::window::{TradeDates, gain_pct, is_settled, trade_dates};
pub use types::*;
