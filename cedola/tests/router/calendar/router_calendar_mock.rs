use std::sync::Arc;
use std::time::Duration;

use cedola::{Cedola, CedolaError};
use cedola_mock::MockConnector;
use chrono::{Datelike, Utc};

#[tokio::test]
async fn mock_fixtures_drive_a_full_run() {
    let cedola = Cedola::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();

    let report = cedola
        .calendar()
        .tickers(["ENI.MI", "GROW", "FAIL", "NOPE", "NONAME"])
        .run()
        .await
        .unwrap();

    let year = Utc::now().year();
    assert_eq!(report.year, year);

    let eni: Vec<_> = report.rows.iter().filter(|r| r.ticker == "ENI.MI").collect();
    assert_eq!(eni.len(), 2);
    assert!(eni.iter().all(|r| r.company_name == "Eni S.p.A."));
    assert!(eni.iter().all(|r| r.ex_dividend_date.year() == year));
    assert!(eni.iter().all(|r| r.ten_year_mean.is_some()));
    assert!(report.rows.windows(2).all(|w| (w[0].month, w[0].day) <= (w[1].month, w[1].day)));

    assert!(report.rows.iter().all(|r| r.ticker != "GROW"));

    let noname: Vec<_> = report.rows.iter().filter(|r| r.ticker == "NONAME").collect();
    assert_eq!(noname.len(), 1);
    assert_eq!(noname[0].company_name, "NONAME");

    let warned: Vec<&str> = report.warnings.iter().map(|w| w.ticker.as_str()).collect();
    assert!(warned.contains(&"FAIL"));
    assert!(warned.contains(&"NOPE"));
    assert!(warned.contains(&"NONAME"));
    assert!(!warned.contains(&"GROW"));
}

#[tokio::test]
async fn mock_timeout_symbol_respects_provider_timeout() {
    let cedola = Cedola::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let report = cedola
        .calendar()
        .tickers(["TIMEOUT"])
        .run()
        .await
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(
        report.warnings[0].error,
        CedolaError::AllProvidersFailed(vec![CedolaError::provider_timeout(
            "cedola-mock",
            "dividend-history"
        )])
    );
}
