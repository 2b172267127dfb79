use cedola_types::{DividendEvent, DividendHistory};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use rust_decimal::Decimal;

/// Calendar date of `ts` on an exchange sitting `utc_offset_seconds` away from UTC.
///
/// Without an offset the UTC date is used. An offset that would overflow the
/// timestamp range is ignored.
#[must_use]
pub fn exchange_local_date(ts: DateTime<Utc>, utc_offset_seconds: Option<i64>) -> NaiveDate {
    utc_offset_seconds
        .and_then(TimeDelta::try_seconds)
        .and_then(|off| ts.checked_add_signed(off))
        .unwrap_or(ts)
        .date_naive()
}

/// Convert a provider history into dividend events for one ticker.
///
/// - Timestamps become timezone-free exchange-local dates.
/// - Payments with a zero or negative amount are dropped.
/// - Repeated payments on the same date are all kept; each one is its own row.
/// - Events are returned in ascending date order; ties keep provider order.
#[must_use]
pub fn to_events(ticker: &str, company_name: &str, history: &DividendHistory) -> Vec<DividendEvent> {
    let mut out: Vec<DividendEvent> = Vec::with_capacity(history.payments.len());

    for p in &history.payments {
        if p.amount.amount() <= Decimal::ZERO {
            #[cfg(feature = "tracing")]
            tracing::debug!(ticker, ts = %p.ts, "dropping non-positive dividend");
            continue;
        }
        out.push(DividendEvent {
            ticker: ticker.to_string(),
            company_name: company_name.to_string(),
            ex_dividend_date: exchange_local_date(p.ts, history.utc_offset_seconds),
            amount: p.amount.clone(),
        });
    }

    out.sort_by_key(|e| e.ex_dividend_date);
    out
}
