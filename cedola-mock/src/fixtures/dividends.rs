use cedola_core::{CedolaError, DividendHistory, DividendPayment};
use chrono::{Datelike, NaiveDate, TimeDelta, Utc};
use rust_decimal::Decimal;

use super::{Listing, listing, money};

/// Years of history generated before the current one.
const YEARS_BACK: i32 = 12;

pub fn by_symbol(s: &str) -> Result<Option<DividendHistory>, CedolaError> {
    listing(s).map(|l| build(l, Utc::now().year())).transpose()
}

fn build(l: &Listing, current_year: i32) -> Result<DividendHistory, CedolaError> {
    let mut payments = Vec::new();
    for (k, year) in (current_year - YEARS_BACK..=current_year).enumerate() {
        let k = i64::try_from(k).unwrap_or_default();
        let amount = Decimal::new(l.base_cents + k * l.step_cents, 2);
        for &(m, d) in l.schedule {
            let Some(date) = NaiveDate::from_ymd_opt(year, m, d) else {
                continue;
            };
            // Local midnight of the ex-date, expressed in UTC.
            let ts = date
                .and_hms_opt(0, 0, 0)
                .map(|n| n.and_utc())
                .and_then(|t| t.checked_sub_signed(TimeDelta::seconds(l.utc_offset_seconds)));
            if let Some(ts) = ts {
                payments.push(DividendPayment {
                    ts,
                    amount: money(amount, l.currency.clone())?,
                });
            }
        }
    }
    Ok(DividendHistory {
        payments,
        utc_offset_seconds: Some(l.utc_offset_seconds),
    })
}
