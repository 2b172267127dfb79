use std::sync::Arc;

use cedola::Cedola;

use crate::helpers::{MockConnector, closes, dec, instrument, ymd};

fn cedola_with(points: &[(chrono::NaiveDate, &str)]) -> Cedola {
    let c = Arc::new(MockConnector {
        name: "px",
        closes_fn: Some(closes(points)),
        ..Default::default()
    });
    Cedola::builder().with_connector(c).build().unwrap()
}

#[tokio::test]
async fn current_price_uses_latest_close_in_trailing_week() {
    let cedola = cedola_with(&[
        (ymd(2024, 3, 1), "40.00"),
        (ymd(2024, 3, 7), "48.00"),
        (ymd(2024, 3, 8), "50.00"),
        (ymd(2024, 3, 11), "99.00"),
    ]);
    // Sunday: falls back to Friday's close, ignores later data.
    let px = cedola
        .current_price(&instrument("AAA"), ymd(2024, 3, 10))
        .await
        .unwrap();
    assert_eq!(px, Some(dec("50.00")));
}

#[tokio::test]
async fn current_price_absent_when_week_is_empty() {
    let cedola = cedola_with(&[(ymd(2024, 2, 1), "40.00")]);
    let px = cedola
        .current_price(&instrument("AAA"), ymd(2024, 3, 10))
        .await
        .unwrap();
    assert_eq!(px, None);
}

#[tokio::test]
async fn price_on_date_takes_first_close_within_one_day() {
    let cedola = cedola_with(&[
        (ymd(2024, 2, 23), "45.00"),
        (ymd(2024, 2, 26), "47.00"),
        (ymd(2024, 3, 18), "46.00"),
    ]);
    let inst = instrument("AAA");

    // Saturday: previous trading day is inside the window.
    assert_eq!(
        cedola.price_on_date(&inst, ymd(2024, 2, 24)).await.unwrap(),
        Some(dec("45.00"))
    );
    // Sunday: next trading day is inside the window.
    assert_eq!(
        cedola.price_on_date(&inst, ymd(2024, 3, 17)).await.unwrap(),
        Some(dec("46.00"))
    );
    // Exact hit.
    assert_eq!(
        cedola.price_on_date(&inst, ymd(2024, 2, 26)).await.unwrap(),
        Some(dec("47.00"))
    );
    // Nothing within one day.
    assert_eq!(
        cedola.price_on_date(&inst, ymd(2024, 3, 5)).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn daily_closes_forwards_the_window() {
    let c = Arc::new(MockConnector {
        name: "px",
        closes_fn: Some(Arc::new(|_, start, end| {
            assert_eq!(start, ymd(2024, 3, 14));
            assert_eq!(end, ymd(2024, 3, 16));
            Ok(vec![])
        })),
        ..Default::default()
    });
    let cedola = Cedola::builder().with_connector(c).build().unwrap();
    let out = cedola
        .price_on_date(&instrument("AAA"), ymd(2024, 3, 15))
        .await
        .unwrap();
    assert_eq!(out, None);
}
