use rust_decimal::Decimal;

/// `numerator / denominator * 100`, or `None` for a zero divisor or overflow.
#[must_use]
pub fn pct_of(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    numerator
        .checked_div(denominator)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// Dividend as a percentage of the current price.
#[must_use]
pub fn yield_pct(dividend: Decimal, current_price: Option<Decimal>) -> Option<Decimal> {
    pct_of(dividend, current_price?)
}

/// Deviation of a dividend from its historical mean, in percent of the mean.
#[must_use]
pub fn delta_pct(dividend: Decimal, mean: Option<Decimal>) -> Option<Decimal> {
    let mean = mean?;
    pct_of(dividend.checked_sub(mean)?, mean)
}
