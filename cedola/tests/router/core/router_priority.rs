use std::sync::Arc;
use std::sync::atomic::Ordering;

use cedola::{AssetKind, Cedola, CedolaError};

use crate::helpers::{MockConnector, dec, history, instrument, m_dividends, ymd};

#[tokio::test]
async fn first_registered_connector_wins() {
    let a = Arc::new(m_dividends(
        "a",
        vec![("AAA", history(&[(ymd(2024, 3, 15), "1.00")]))],
    ));
    let b = Arc::new(m_dividends(
        "b",
        vec![("AAA", history(&[(ymd(2024, 3, 15), "2.00")]))],
    ));
    let cedola = Cedola::builder()
        .with_connector(a)
        .with_connector(b.clone())
        .build()
        .unwrap();

    let h = cedola.dividend_history(&instrument("AAA")).await.unwrap();
    assert_eq!(h.payments[0].amount.amount(), dec("1.00"));
    assert_eq!(b.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn falls_back_after_error() {
    let broken = Arc::new(MockConnector {
        name: "broken",
        dividends_fn: Some(Arc::new(|_| Err(CedolaError::Data("boom".into())))),
        ..Default::default()
    });
    let good = Arc::new(m_dividends(
        "good",
        vec![("AAA", history(&[(ymd(2024, 3, 15), "1.00")]))],
    ));
    let cedola = Cedola::builder()
        .with_connector(broken)
        .with_connector(good)
        .build()
        .unwrap();

    let h = cedola.dividend_history(&instrument("AAA")).await.unwrap();
    assert_eq!(h.payments.len(), 1);
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let a = Arc::new(m_dividends("a", vec![]));
    let b = Arc::new(m_dividends("b", vec![]));
    let cedola = Cedola::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = cedola.dividend_history(&instrument("ZZZ")).await.unwrap_err();
    assert_eq!(err, CedolaError::not_found("dividend-history for ZZZ"));
}

#[tokio::test]
async fn mixed_failures_are_tagged_and_aggregated() {
    let broken = Arc::new(MockConnector {
        name: "broken",
        dividends_fn: Some(Arc::new(|_| Err(CedolaError::Data("boom".into())))),
        ..Default::default()
    });
    let empty = Arc::new(m_dividends("empty", vec![]));
    let cedola = Cedola::builder()
        .with_connector(broken)
        .with_connector(empty)
        .build()
        .unwrap();

    let err = cedola.dividend_history(&instrument("AAA")).await.unwrap_err();
    match err {
        CedolaError::AllProvidersFailed(es) => {
            assert_eq!(es.len(), 2);
            assert_eq!(es[0], CedolaError::connector("broken", "data issue: boom"));
            assert!(matches!(es[1], CedolaError::NotFound { .. }));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn connectors_without_the_role_are_unsupported() {
    let no_roles = Arc::new(MockConnector {
        name: "none",
        ..Default::default()
    });
    let cedola = Cedola::builder().with_connector(no_roles).build().unwrap();

    let err = cedola.profile(&instrument("AAA")).await.unwrap_err();
    assert_eq!(err, CedolaError::unsupported("profile"));
}

#[tokio::test]
async fn kind_filter_skips_connector() {
    let crypto_only = Arc::new(MockConnector {
        name: "crypto",
        kind_ok: Some(AssetKind::Crypto),
        ..m_dividends("crypto", vec![("AAA", history(&[(ymd(2024, 1, 2), "5.00")]))])
    });
    let equity = Arc::new(m_dividends(
        "equity",
        vec![("AAA", history(&[(ymd(2024, 1, 2), "1.00")]))],
    ));
    let cedola = Cedola::builder()
        .with_connector(crypto_only.clone())
        .with_connector(equity)
        .build()
        .unwrap();

    let h = cedola.dividend_history(&instrument("AAA")).await.unwrap();
    assert_eq!(h.payments[0].amount.amount(), dec("1.00"));
    assert_eq!(crypto_only.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn display_name_reads_company_and_rejects_blank() {
    let c = Arc::new(MockConnector {
        name: "p",
        profile_fn: Some(Arc::new(|i| {
            Ok(crate::helpers::company(if i.symbol_str() == "AAA" {
                "  Triple A Corp "
            } else {
                "   "
            }))
        })),
        ..Default::default()
    });
    let cedola = Cedola::builder().with_connector(c).build().unwrap();

    assert_eq!(
        cedola.display_name(&instrument("AAA")).await.unwrap(),
        "Triple A Corp"
    );
    let err = cedola.display_name(&instrument("BBB")).await.unwrap_err();
    assert!(matches!(err, CedolaError::Data(_)));
}
