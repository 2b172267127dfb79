pub mod dividends;
pub mod prices;
pub mod profile;

use cedola_core::{CedolaError, Currency, IsoCurrency, Money};
use rust_decimal::Decimal;

/// Static description of one fixture symbol.
pub struct Listing {
    pub symbol: &'static str,
    pub name: Option<&'static str>,
    pub currency: IsoCurrency,
    /// Exchange offset from UTC in seconds.
    pub utc_offset_seconds: i64,
    /// UTC hour of the daily bar timestamp.
    pub bar_hour: u32,
    /// Ex-dividend (month, day) pairs repeated every year.
    pub schedule: &'static [(u32, u32)],
    /// Amount of the first payment in hundredths; later years add `step_cents`.
    pub base_cents: i64,
    pub step_cents: i64,
    /// Price level around which synthetic closes oscillate, in whole units.
    pub price_level: i64,
}

pub const LISTINGS: &[Listing] = &[
    Listing {
        symbol: "ENI.MI",
        name: Some("Eni S.p.A."),
        currency: IsoCurrency::EUR,
        utc_offset_seconds: 3600,
        bar_hour: 8,
        schedule: &[(5, 20), (11, 20)],
        base_cents: 20,
        step_cents: 1,
        price_level: 14,
    },
    Listing {
        symbol: "ENEL.MI",
        name: Some("Enel S.p.A."),
        currency: IsoCurrency::EUR,
        utc_offset_seconds: 3600,
        bar_hour: 8,
        schedule: &[(1, 22), (7, 22)],
        base_cents: 14,
        step_cents: 1,
        price_level: 6,
    },
    Listing {
        symbol: "KO",
        name: Some("The Coca-Cola Company"),
        currency: IsoCurrency::USD,
        utc_offset_seconds: -5 * 3600,
        bar_hour: 14,
        schedule: &[(3, 14), (6, 14), (9, 13), (11, 29)],
        base_cents: 31,
        step_cents: 2,
        price_level: 60,
    },
    Listing {
        symbol: "GROW",
        name: Some("Growth Corp"),
        currency: IsoCurrency::USD,
        utc_offset_seconds: -5 * 3600,
        bar_hour: 14,
        schedule: &[],
        base_cents: 0,
        step_cents: 0,
        price_level: 120,
    },
    Listing {
        symbol: "NONAME",
        name: None,
        currency: IsoCurrency::USD,
        utc_offset_seconds: -5 * 3600,
        bar_hour: 14,
        schedule: &[(6, 1)],
        base_cents: 50,
        step_cents: 0,
        price_level: 25,
    },
];

pub fn listing(symbol: &str) -> Option<&'static Listing> {
    LISTINGS.iter().find(|l| l.symbol == symbol)
}

pub fn money(amount: Decimal, currency: IsoCurrency) -> Result<Money, CedolaError> {
    Money::new(amount, Currency::Iso(currency)).map_err(|e| CedolaError::Data(e.to_string()))
}
