use std::sync::Arc;
use std::sync::atomic::Ordering;

use cedola::{Cedola, CedolaError, MonthLocale};

use crate::helpers::{
    AAA, BBB, MockConnector, closes, company, dec, dt, history, m_dividends, ymd,
};

/// AAA pays 1.00 on 2024-03-15 and averages 0.80 over 2020..=2024.
fn aaa_history() -> cedola::DividendHistory {
    history(&[
        (ymd(2020, 3, 13), "0.70"),
        (ymd(2021, 3, 12), "0.70"),
        (ymd(2022, 3, 15), "0.80"),
        (ymd(2023, 3, 15), "0.80"),
        (ymd(2024, 3, 15), "1.00"),
    ])
}

fn prices() -> MockConnector {
    MockConnector {
        name: "px",
        closes_fn: Some(closes(&[
            (ymd(2024, 2, 23), "45.00"),
            (ymd(2024, 3, 18), "46.00"),
            (ymd(2024, 4, 5), "49.00"),
            (ymd(2024, 4, 9), "50.00"),
        ])),
        profile_fn: Some(Arc::new(|i| {
            Ok(company(match i.symbol_str() {
                "AAA" => "Triple A Corp",
                _ => "Other Corp",
            }))
        })),
        ..Default::default()
    }
}

#[tokio::test]
async fn reference_row_is_enriched() {
    let cedola = Cedola::builder()
        .with_connector(Arc::new(m_dividends("divs", vec![(AAA, aaa_history())])))
        .with_connector(Arc::new(prices()))
        .build()
        .unwrap();

    let report = cedola
        .calendar()
        .tickers([AAA])
        .as_of(dt(2024, 4, 10, 12))
        .run()
        .await
        .unwrap();

    assert_eq!(report.year, 2024);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert_eq!(report.rows.len(), 1);

    let row = &report.rows[0];
    assert_eq!(row.month, 3);
    assert_eq!(row.month_name, "Marzo");
    assert_eq!(row.day, 15);
    assert_eq!(row.ticker, AAA);
    assert_eq!(row.company_name, "Triple A Corp");
    assert_eq!(row.ex_dividend_date, ymd(2024, 3, 15));
    assert_eq!(row.dividend.amount(), dec("1.00"));
    assert_eq!(row.ten_year_mean, Some(dec("0.80")));
    assert_eq!(row.current_price, Some(dec("50.00")));
    assert_eq!(row.yield_pct, Some(dec("2.0")));
    assert_eq!(row.delta_pct, Some(dec("25.0")));
    assert_eq!(row.buy_date, ymd(2024, 2, 24));
    assert_eq!(row.sell_date, ymd(2024, 3, 17));
    // (46 - 45) / 50 * 100
    assert_eq!(row.gain_pct, Some(dec("2.0")));

    assert_eq!(report.summaries.len(), 1);
    assert_eq!(report.summaries[0].ticker, AAA);
    assert_eq!(report.summaries[0].ten_year_mean, dec("0.80"));
}

#[tokio::test]
async fn rows_follow_calendar_order_across_tickers() {
    let divs = m_dividends(
        "divs",
        vec![
            (
                AAA,
                history(&[(ymd(2024, 12, 2), "0.50"), (ymd(2024, 3, 15), "1.00")]),
            ),
            (
                BBB,
                history(&[(ymd(2024, 8, 1), "0.30"), (ymd(2024, 2, 20), "0.20")]),
            ),
        ],
    );
    let cedola = Cedola::builder()
        .with_connector(Arc::new(divs))
        .with_connector(Arc::new(prices()))
        .build()
        .unwrap();

    let report = cedola
        .calendar()
        .tickers([AAA, BBB])
        .as_of(dt(2024, 1, 5, 12))
        .run()
        .await
        .unwrap();

    let labels: Vec<(&str, &str)> = report
        .rows
        .iter()
        .map(|r| (r.month_name.as_str(), r.ticker.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("Febbraio", BBB),
            ("Marzo", AAA),
            ("Agosto", BBB),
            ("Dicembre", AAA),
        ]
    );
}

#[tokio::test]
async fn only_current_year_rows_are_reported() {
    let cedola = Cedola::builder()
        .with_connector(Arc::new(m_dividends("divs", vec![(AAA, aaa_history())])))
        .with_connector(Arc::new(prices()))
        .build()
        .unwrap();

    let report = cedola
        .calendar()
        .tickers([AAA])
        .as_of(dt(2023, 6, 1, 12))
        .run()
        .await
        .unwrap();

    assert_eq!(report.year, 2023);
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].ex_dividend_date, ymd(2023, 3, 15));
    // 2013..=2023 -> 0.70, 0.70, 0.80, 0.80
    assert_eq!(report.rows[0].ten_year_mean, Some(dec("0.75")));
}

#[tokio::test]
async fn history_window_is_configurable() {
    let cedola = Cedola::builder()
        .with_connector(Arc::new(m_dividends("divs", vec![(AAA, aaa_history())])))
        .with_connector(Arc::new(prices()))
        .history_years(1)
        .build()
        .unwrap();

    let report = cedola
        .calendar()
        .tickers([AAA])
        .as_of(dt(2024, 4, 10, 12))
        .run()
        .await
        .unwrap();
    // 2023..=2024 -> 0.80, 1.00
    assert_eq!(report.rows[0].ten_year_mean, Some(dec("0.90")));
}

#[tokio::test]
async fn english_locale_changes_month_names() {
    let cedola = Cedola::builder()
        .with_connector(Arc::new(m_dividends("divs", vec![(AAA, aaa_history())])))
        .with_connector(Arc::new(prices()))
        .month_locale(MonthLocale::English)
        .build()
        .unwrap();

    let report = cedola
        .calendar()
        .add_ticker(AAA)
        .as_of(dt(2024, 4, 10, 12))
        .run()
        .await
        .unwrap();
    assert_eq!(report.rows[0].month_name, "March");
}

#[tokio::test]
async fn empty_history_yields_no_rows_and_skips_profile() {
    let profile = Arc::new(MockConnector {
        name: "profile",
        profile_fn: Some(Arc::new(|_| Ok(company("Never Called")))),
        ..Default::default()
    });
    let cedola = Cedola::builder()
        .with_connector(Arc::new(m_dividends("divs", vec![(AAA, history(&[]))])))
        .with_connector(profile.clone())
        .build()
        .unwrap();

    let report = cedola
        .calendar()
        .tickers([AAA])
        .as_of(dt(2024, 4, 10, 12))
        .run()
        .await
        .unwrap();

    assert!(report.is_empty());
    assert!(report.summaries.is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(profile.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn duplicate_tickers_are_not_collapsed() {
    let cedola = Cedola::builder()
        .with_connector(Arc::new(m_dividends("divs", vec![(AAA, aaa_history())])))
        .with_connector(Arc::new(prices()))
        .build()
        .unwrap();

    let report = cedola
        .calendar()
        .tickers([AAA, AAA])
        .as_of(dt(2024, 4, 10, 12))
        .run()
        .await
        .unwrap();
    assert_eq!(report.rows.len(), 2);
}

#[tokio::test]
async fn concurrency_does_not_change_order() {
    let mk = |n: usize| {
        let divs = MockConnector {
            name: "divs",
            delay_ms: 10,
            ..m_dividends(
                "divs",
                vec![
                    (AAA, history(&[(ymd(2024, 5, 1), "1.00")])),
                    (BBB, history(&[(ymd(2024, 5, 1), "2.00")])),
                ],
            )
        };
        Cedola::builder()
            .with_connector(Arc::new(divs))
            .with_connector(Arc::new(prices()))
            .max_concurrency(n)
            .build()
            .unwrap()
    };

    let seq = mk(1)
        .calendar()
        .tickers([BBB, AAA])
        .as_of(dt(2024, 4, 10, 12))
        .run()
        .await
        .unwrap();
    let par = mk(8)
        .calendar()
        .tickers([BBB, AAA])
        .as_of(dt(2024, 4, 10, 12))
        .run()
        .await
        .unwrap();

    assert_eq!(seq.rows, par.rows);
    // Same (month, day): input order is kept.
    assert_eq!(seq.rows[0].ticker, BBB);
    assert_eq!(seq.rows[1].ticker, AAA);
}

#[tokio::test]
async fn no_tickers_is_an_invalid_argument() {
    let cedola = Cedola::builder()
        .with_connector(Arc::new(m_dividends("divs", vec![])))
        .build()
        .unwrap();
    let err = cedola.calendar().run().await.unwrap_err();
    assert!(matches!(err, CedolaError::InvalidArg(_)));
}
