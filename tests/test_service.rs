//! Tests for the async report facade.

mod common;

use std::time::Duration;

use common::{approx_eq, date, pool_config};
use pos_reports::config::ServiceConfig;
use pos_reports::{ConnectionPool, ErrorKind, Interval, ProductRanking, ReportError, ReportService};

fn closed_service() -> ReportService {
    let service = common::sample_service();
    service.pool().close();
    service
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn summary_through_service() {
    let service = common::sample_service();
    let summary = service
        .sales_summary(date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap();
    assert_eq!(summary.order_count, 4);
    assert!(approx_eq(summary.revenue, 38.0));
}

#[tokio::test]
async fn every_report_returns_connection_to_pool() {
    let service = common::sample_service();
    let (start, end) = (date(2024, 1, 1), date(2024, 1, 31));

    service.sales_summary(start, end).await.unwrap();
    service.sales_trend(start, end, Interval::Week).await.unwrap();
    service
        .top_products(start, end, Some(5), ProductRanking::Quantity)
        .await
        .unwrap();
    service.sales_by_payment_method(start, end).await.unwrap();
    service.sales_by_customer(start, end, None).await.unwrap();
    service.gross_profit_by_product(start, end, None).await.unwrap();
    service.gross_profit_by_category(start, end, None).await.unwrap();
    service.gross_profit_by_order(start, end).await.unwrap();
    service.ping().await.unwrap();

    let status = service.pool().status();
    assert_eq!(status.idle, status.size);
}

#[tokio::test]
async fn empty_range_yields_empty_lists() {
    let service = common::sample_service();
    let (start, end) = (date(2030, 1, 1), date(2030, 1, 31));

    assert!(service.sales_trend(start, end, Interval::Day).await.unwrap().is_empty());
    assert!(service
        .top_products(start, end, None, ProductRanking::Revenue)
        .await
        .unwrap()
        .is_empty());
    assert!(service.gross_profit_by_order(start, end).await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_reports_share_small_pool() {
    let pool = ConnectionPool::from_connection(
        common::setup_sample_db(),
        pool_config(1, Duration::from_secs(5)),
    )
    .unwrap();
    let service = ReportService::new(pool, ServiceConfig::default());

    let tasks: Vec<_> = (0..4)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service.sales_summary(date(2024, 1, 1), date(2024, 1, 31)).await
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap().order_count, 4);
    }
}

// ---------------------------------------------------------------------------
// Validation happens before a connection is borrowed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reversed_range_rejected_even_when_pool_closed() {
    let service = closed_service();
    let (start, end) = (date(2024, 2, 1), date(2024, 1, 1));

    let errors = vec![
        service.sales_summary(start, end).await.unwrap_err(),
        service.sales_trend(start, end, Interval::Day).await.unwrap_err(),
        service
            .top_products(start, end, None, ProductRanking::Revenue)
            .await
            .unwrap_err(),
        service.sales_by_payment_method(start, end).await.unwrap_err(),
        service.sales_by_customer(start, end, None).await.unwrap_err(),
        service.gross_profit_by_product(start, end, None).await.unwrap_err(),
        service.gross_profit_by_category(start, end, None).await.unwrap_err(),
        service.gross_profit_by_order(start, end).await.unwrap_err(),
    ];

    for err in errors {
        assert!(matches!(err, ReportError::InvalidRange { .. }), "{err:?}");
    }
}

#[tokio::test]
async fn non_positive_limit_rejected_before_query() {
    let service = closed_service();
    let err = service
        .top_products(date(2024, 1, 1), date(2024, 1, 31), Some(0), ProductRanking::Revenue)
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::InvalidLimit(0)));

    let err = service
        .gross_profit_by_category(date(2024, 1, 1), date(2024, 1, 31), Some(-1))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

// ---------------------------------------------------------------------------
// Unavailable data source
// ---------------------------------------------------------------------------

#[tokio::test]
async fn closed_pool_reports_unavailable() {
    let service = closed_service();
    let err = service
        .sales_summary(date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);
    assert!(service.ping().await.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn slow_query_reports_unavailable_and_releases_connection() {
    let pool = ConnectionPool::from_connection(
        common::setup_sample_db(),
        pool_config(1, Duration::from_secs(1)),
    )
    .unwrap();
    let service = ReportService::new(
        pool,
        ServiceConfig {
            query_timeout: Duration::from_nanos(1),
        },
    );

    let err = service
        .sales_summary(date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);

    // The abandoned query still finishes and hands its connection back
    tokio::time::sleep(Duration::from_millis(300)).await;
    let status = service.pool().status();
    assert_eq!(status.idle, status.size);
}

#[tokio::test]
async fn exhausted_pool_reports_unavailable_then_recovers() {
    let pool = ConnectionPool::from_connection(
        common::setup_sample_db(),
        pool_config(1, Duration::from_millis(50)),
    )
    .unwrap();
    let service = ReportService::new(pool.clone(), ServiceConfig::default());

    let held = pool.acquire().await.unwrap();
    let err = service
        .sales_by_payment_method(date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::DataSourceUnavailable(_)));

    drop(held);
    let rows = service
        .sales_by_payment_method(date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
}
