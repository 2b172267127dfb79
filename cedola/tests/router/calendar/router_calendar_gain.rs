use std::sync::Arc;
use std::sync::atomic::Ordering;

use cedola::{Cedola, TradeWindow};

use crate::helpers::{
    AAA, MockConnector, closes, company, dec, dt, history, m_dividends, ymd,
};

fn setup(window: TradeWindow) -> (Cedola, Arc<MockConnector>) {
    let px = Arc::new(MockConnector {
        name: "px",
        closes_fn: Some(closes(&[
            (ymd(2024, 3, 10), "40.00"),
            (ymd(2024, 3, 12), "41.00"),
            (ymd(2024, 3, 14), "44.00"),
            (ymd(2024, 3, 15), "42.00"),
            (ymd(2024, 3, 16), "43.00"),
            (ymd(2024, 3, 18), "44.00"),
        ])),
        profile_fn: Some(Arc::new(|_| Ok(company("Triple A Corp")))),
        ..Default::default()
    });
    let cedola = Cedola::builder()
        .with_connector(Arc::new(m_dividends(
            "divs",
            vec![(AAA, history(&[(ymd(2024, 3, 15), "1.00")]))],
        )))
        .with_connector(px.clone())
        .trade_window(window)
        .build()
        .unwrap();
    (cedola, px)
}

#[tokio::test]
async fn gain_absent_until_sell_date_has_passed() {
    let (cedola, px) = setup(TradeWindow::try_new(-3, 1).unwrap());

    // Sell date is 2024-03-16; late on that same day it is still open.
    let report = cedola
        .calendar()
        .tickers([AAA])
        .as_of(dt(2024, 3, 16, 23))
        .run()
        .await
        .unwrap();
    let row = &report.rows[0];
    assert_eq!(row.sell_date, ymd(2024, 3, 16));
    assert_eq!(row.gain_pct, None);
    // Profile plus the current price; no trade closes yet.
    assert_eq!(px.calls.load(Ordering::SeqCst), 2);
    assert_eq!(row.current_price, Some(dec("43.00")));
}

#[tokio::test]
async fn gain_present_once_settled() {
    let (cedola, px) = setup(TradeWindow::try_new(-3, 1).unwrap());

    let report = cedola
        .calendar()
        .tickers([AAA])
        .as_of(dt(2024, 3, 17, 1))
        .run()
        .await
        .unwrap();
    let row = &report.rows[0];
    // buy 03-12 -> 41, sell 03-16 -> first of 03-15..=03-17 -> 42,
    // current -> latest of 03-11..=03-17 -> 43
    assert_eq!(row.buy_date, ymd(2024, 3, 12));
    let expected = (dec("42.00") - dec("41.00")) / dec("43.00") * dec("100");
    assert_eq!(row.gain_pct, Some(expected));
    assert_eq!(px.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn inverted_window_is_computed_as_is() {
    let window = TradeWindow::try_new(3, -3).unwrap();
    assert!(window.is_inverted());
    let (cedola, _) = setup(window);

    let report = cedola
        .calendar()
        .tickers([AAA])
        .as_of(dt(2024, 4, 1, 12))
        .run()
        .await
        .unwrap();
    let row = &report.rows[0];
    assert_eq!(row.buy_date, ymd(2024, 3, 18));
    assert_eq!(row.sell_date, ymd(2024, 3, 12));
    // Current price: latest close in 03-26..=04-01 -> none, so gain is absent too.
    assert_eq!(row.current_price, None);
    assert_eq!(row.gain_pct, None);
    assert!(report.trade_window.is_inverted());
}

#[tokio::test]
async fn missing_trade_close_leaves_gain_absent() {
    // Buy date 2024-03-05 has no close within one day.
    let (cedola, _) = setup(TradeWindow::try_new(-10, 1).unwrap());

    let report = cedola
        .calendar()
        .tickers([AAA])
        .as_of(dt(2024, 3, 18, 12))
        .run()
        .await
        .unwrap();
    let row = &report.rows[0];
    assert_eq!(row.current_price, Some(dec("44.00")));
    assert_eq!(row.gain_pct, None);
    assert!(report.warnings.is_empty());
}
