use std::collections::BTreeMap;

use cedola_types::DividendEvent;
use rust_decimal::Decimal;

/// Arithmetic mean of dividend amounts per ticker over the years
/// `[year - years, year]`, inclusive, by event year.
///
/// Tickers without any event in that window are absent from the result.
/// Amounts are compared by value only; currencies are not converted.
#[must_use]
pub fn historical_means(
    events: &[DividendEvent],
    year: i32,
    years: u16,
) -> BTreeMap<String, Decimal> {
    let first = year.saturating_sub(i32::from(years));
    let mut sums: BTreeMap<&str, (Decimal, u32)> = BTreeMap::new();

    for e in events {
        if !(first..=year).contains(&e.year()) {
            continue;
        }
        let slot = sums.entry(e.ticker.as_str()).or_insert((Decimal::ZERO, 0));
        slot.0 += e.amount.amount();
        slot.1 += 1;
    }

    sums.into_iter()
        .filter_map(|(ticker, (sum, n))| {
            let mean = sum.checked_div(Decimal::from(n))?;
            Some((ticker.to_string(), mean))
        })
        .collect()
}
