use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use futures::stream::{self, StreamExt};

use cedola_core::{
    AssetKind, CalendarEntry, CalendarReport, CalendarRow, CedolaError, Decimal, DividendEvent,
    Instrument, TickerSummary, TickerWarning, delta_pct, gain_pct, historical_means,
    is_settled, localize, to_events, trade_dates, yield_pct,
};

use crate::Cedola;

/// Builder for a dividend calendar run.
///
/// Created via [`Cedola::calendar`]. Tickers are processed in input order;
/// duplicates are kept and each one is fetched on its own.
pub struct CalendarBuilder<'a> {
    cedola: &'a Cedola,
    tickers: Vec<String>,
    as_of: Option<DateTime<Utc>>,
}

/// Per-ticker outcome of the history stage.
struct TickerHistory {
    events: Vec<DividendEvent>,
    warnings: Vec<TickerWarning>,
}

impl<'a> CalendarBuilder<'a> {
    /// Create a new builder bound to a `Cedola` instance.
    #[must_use]
    pub const fn new(cedola: &'a Cedola) -> Self {
        Self {
            cedola,
            tickers: Vec::new(),
            as_of: None,
        }
    }

    /// Replace the ticker list.
    #[must_use]
    pub fn tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tickers = tickers.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single ticker.
    #[must_use]
    pub fn add_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.tickers.push(ticker.into());
        self
    }

    /// Compute the calendar as of a fixed instant instead of the current time.
    ///
    /// The instant decides the reference year, "today" for the current price
    /// and whether a trade window has already closed.
    #[must_use]
    pub const fn as_of(mut self, now: DateTime<Utc>) -> Self {
        self.as_of = Some(now);
        self
    }

    /// Execute the run.
    ///
    /// Per-ticker failures (invalid symbol, history or profile lookup, price
    /// lookups) are collected in `CalendarReport::warnings` and never abort
    /// the run.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no tickers were provided.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cedola::calendar::run",
            skip(self),
            fields(tickers = self.tickers.len()),
        )
    )]
    pub async fn run(self) -> Result<CalendarReport, CedolaError> {
        if self.tickers.is_empty() {
            return Err(CedolaError::InvalidArg(
                "no tickers provided; enter at least one ticker".into(),
            ));
        }

        let cfg = self.cedola.config();
        let now = self.as_of.unwrap_or_else(Utc::now);
        let year = now.year();
        let concurrency = cfg.max_concurrency.max(1);

        let histories: Vec<TickerHistory> = stream::iter(
            self.tickers
                .iter()
                .map(|t| self.collect_ticker(t.as_str())),
        )
        .buffered(concurrency)
        .collect()
        .await;

        let mut events: Vec<DividendEvent> = Vec::new();
        let mut warnings: Vec<TickerWarning> = Vec::new();
        for h in histories {
            events.extend(h.events);
            warnings.extend(h.warnings);
        }

        let means = historical_means(&events, year, cfg.history_years);
        let entries: Vec<CalendarEntry> = localize(events, cfg.month_locale)
            .into_iter()
            .filter(|e| e.event.year() == year)
            .collect();

        let enriched: Vec<(Option<CalendarRow>, Vec<TickerWarning>)> = stream::iter(
            entries
                .into_iter()
                .map(|entry| self.enrich(entry, &means, now)),
        )
        .buffered(concurrency)
        .collect()
        .await;

        let mut rows: Vec<CalendarRow> = Vec::with_capacity(enriched.len());
        for (row, w) in enriched {
            rows.extend(row);
            warnings.extend(w);
        }

        let summaries = means
            .into_iter()
            .map(|(ticker, ten_year_mean)| TickerSummary {
                ticker,
                ten_year_mean,
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = rows.len(),
            warnings = warnings.len(),
            "calendar run completed"
        );

        Ok(CalendarReport {
            year,
            as_of: now,
            trade_window: cfg.trade_window,
            rows,
            summaries,
            warnings,
        })
    }

    async fn collect_ticker(&self, ticker: &str) -> TickerHistory {
        let mut warnings = Vec::new();
        let inst = match instrument(ticker) {
            Ok(i) => i,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(ticker, error = %e, "invalid ticker");
                warnings.push(TickerWarning::new(ticker, e));
                return TickerHistory {
                    events: Vec::new(),
                    warnings,
                };
            }
        };

        let history = match self.cedola.dividend_history(&inst).await {
            Ok(h) => h,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(ticker, error = %e, "dividend history fetch failed");
                warnings.push(TickerWarning::new(ticker, e));
                return TickerHistory {
                    events: Vec::new(),
                    warnings,
                };
            }
        };

        let mut events = to_events(ticker, ticker, &history);
        if !events.is_empty() {
            match self.cedola.display_name(&inst).await {
                Ok(name) => {
                    for e in &mut events {
                        e.company_name.clone_from(&name);
                    }
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(ticker, error = %e, "profile lookup failed; using ticker");
                    warnings.push(TickerWarning::new(ticker, e));
                }
            }
        }

        TickerHistory { events, warnings }
    }

    async fn enrich(
        &self,
        entry: CalendarEntry,
        means: &BTreeMap<String, Decimal>,
        now: DateTime<Utc>,
    ) -> (Option<CalendarRow>, Vec<TickerWarning>) {
        let mut warnings = Vec::new();
        let event = entry.event;
        let ticker = event.ticker.clone();

        let dates = match trade_dates(event.ex_dividend_date, &self.cedola.config().trade_window) {
            Ok(d) => d,
            Err(e) => {
                warnings.push(TickerWarning::new(ticker, e));
                return (None, warnings);
            }
        };
        let inst = match instrument(&ticker) {
            Ok(i) => i,
            Err(e) => {
                warnings.push(TickerWarning::new(ticker, e));
                return (None, warnings);
            }
        };

        let dividend = event.amount.amount();
        let mean = means.get(&ticker).copied();
        let current_price = lookup(
            &ticker,
            &mut warnings,
            self.cedola.current_price(&inst, now.date_naive()),
        )
        .await;

        let gain = if is_settled(dates.sell, now) {
            let buy_close = lookup(
                &ticker,
                &mut warnings,
                self.cedola.price_on_date(&inst, dates.buy),
            )
            .await;
            let sell_close = lookup(
                &ticker,
                &mut warnings,
                self.cedola.price_on_date(&inst, dates.sell),
            )
            .await;
            gain_pct(buy_close, sell_close, current_price)
        } else {
            None
        };

        let row = CalendarRow {
            month: entry.month.number(),
            month_name: entry.month.name().to_string(),
            day: entry.day,
            company_name: event.company_name,
            ex_dividend_date: event.ex_dividend_date,
            ten_year_mean: mean,
            current_price,
            yield_pct: yield_pct(dividend, current_price),
            delta_pct: delta_pct(dividend, mean),
            buy_date: dates.buy,
            sell_date: dates.sell,
            gain_pct: gain,
            dividend: event.amount,
            ticker,
        };
        (Some(row), warnings)
    }
}

/// Await a price lookup, turning a failure into a warning and an absent value.
async fn lookup<F>(
    ticker: &str,
    warnings: &mut Vec<TickerWarning>,
    fut: F,
) -> Option<Decimal>
where
    F: core::future::Future<Output = Result<Option<Decimal>, CedolaError>>,
{
    match fut.await {
        Ok(v) => v,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(ticker, error = %e, "price lookup failed");
            warnings.push(TickerWarning::new(ticker, e));
            None
        }
    }
}

fn instrument(ticker: &str) -> Result<Instrument, CedolaError> {
    Ok(Instrument::from_symbol(ticker, AssetKind::Equity)?)
}

impl Cedola {
    /// Start a dividend calendar run.
    #[must_use]
    pub const fn calendar(&self) -> CalendarBuilder<'_> {
        CalendarBuilder::new(self)
    }
}
