//! Async report facade.
//!
//! Every operation validates its inputs first, so malformed requests are
//! rejected before a connection is borrowed. Valid requests borrow one
//! pooled connection, run a single read query on the blocking thread pool
//! under the configured query timeout, and return the connection on every
//! exit path.

use chrono::NaiveDate;
use tracing::Instrument;

use crate::config::ServiceConfig;
use crate::connection::Connection;
use crate::error::{ErrorKind, ReportError, Result};
use crate::models::{
    GrossProfitRecord, SalesByCustomer, SalesByPaymentMethod, SalesSummary, SalesTrendPoint,
    TopSellingProduct,
};
use crate::params::{DateRange, Interval, Limit, ProductRanking};
use crate::pool::ConnectionPool;
use crate::queries::{GrossProfitQuery, ProductQuery, SalesQuery};

/// One async operation per report type. Cheap to clone.
#[derive(Clone)]
pub struct ReportService {
    pool: ConnectionPool,
    config: ServiceConfig,
}

impl ReportService {
    pub fn new(pool: ConnectionPool, config: ServiceConfig) -> Self {
        Self { pool, config }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub async fn sales_summary(&self, start: NaiveDate, end: NaiveDate) -> Result<SalesSummary> {
        let range = DateRange::new(start, end)?;
        self.run("sales_summary", range, move |conn| {
            SalesQuery::new(conn).summary(&range)
        })
        .await
    }

    pub async fn sales_trend(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        interval: Interval,
    ) -> Result<Vec<SalesTrendPoint>> {
        let range = DateRange::new(start, end)?;
        self.run("sales_trend", range, move |conn| {
            SalesQuery::new(conn).trend(&range, interval)
        })
        .await
    }

    /// `limit` defaults to 10; non-positive values are rejected.
    pub async fn top_products(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        limit: Option<i64>,
        ranking: ProductRanking,
    ) -> Result<Vec<TopSellingProduct>> {
        let range = DateRange::new(start, end)?;
        let limit = Limit::or_default(limit)?;
        self.run("top_products", range, move |conn| {
            ProductQuery::new(conn).top(&range, limit, ranking)
        })
        .await
    }

    pub async fn sales_by_payment_method(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<SalesByPaymentMethod>> {
        let range = DateRange::new(start, end)?;
        self.run("sales_by_payment_method", range, move |conn| {
            SalesQuery::new(conn).by_payment_method(&range)
        })
        .await
    }

    pub async fn sales_by_customer(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        limit: Option<i64>,
    ) -> Result<Vec<SalesByCustomer>> {
        let range = DateRange::new(start, end)?;
        let limit = Limit::or_default(limit)?;
        self.run("sales_by_customer", range, move |conn| {
            SalesQuery::new(conn).by_customer(&range, limit)
        })
        .await
    }

    pub async fn gross_profit_by_product(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        limit: Option<i64>,
    ) -> Result<Vec<GrossProfitRecord>> {
        let range = DateRange::new(start, end)?;
        let limit = Limit::or_default(limit)?;
        self.run("gross_profit_by_product", range, move |conn| {
            GrossProfitQuery::new(conn).by_product(&range, limit)
        })
        .await
    }

    pub async fn gross_profit_by_category(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        limit: Option<i64>,
    ) -> Result<Vec<GrossProfitRecord>> {
        let range = DateRange::new(start, end)?;
        let limit = Limit::or_default(limit)?;
        self.run("gross_profit_by_category", range, move |conn| {
            GrossProfitQuery::new(conn).by_category(&range, limit)
        })
        .await
    }

    pub async fn gross_profit_by_order(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<GrossProfitRecord>> {
        let range = DateRange::new(start, end)?;
        self.run("gross_profit_by_order", range, move |conn| {
            GrossProfitQuery::new(conn).by_order(&range)
        })
        .await
    }

    /// Round-trip a trivial query to confirm the data source answers.
    pub async fn ping(&self) -> Result<()> {
        self.execute(|conn| {
            conn.execute_scalar("SELECT 1", &[])?;
            Ok(())
        })
        .instrument(tracing::debug_span!("ping"))
        .await
    }

    async fn run<F, T>(&self, report: &'static str, range: DateRange, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let span = tracing::info_span!(
            "report",
            report,
            start = %range.start(),
            end = %range.end()
        );

        async move {
            let result = self.execute(f).await;
            if let Err(e) = &result {
                match e.kind() {
                    ErrorKind::Unavailable => tracing::warn!(error = %e, "data source unavailable"),
                    ErrorKind::Internal => tracing::error!(error = ?e, "report query failed"),
                    ErrorKind::Validation => tracing::debug!(error = %e, "report rejected"),
                }
            }
            result
        }
        .instrument(span)
        .await
    }

    /// Borrow a connection and run `f` on the blocking pool under the query
    /// timeout. The connection goes back to the pool when `f` finishes, even
    /// if the caller has already given up waiting.
    async fn execute<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.pool.acquire().await?;
        let task = tokio::task::spawn_blocking(move || f(&*conn));

        match tokio::time::timeout(self.config.query_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(ReportError::UnknownQuery(format!(
                "query task failed: {join_err}"
            ))),
            Err(_) => Err(ReportError::DataSourceUnavailable(format!(
                "query did not finish within {} ms",
                self.config.query_timeout.as_millis()
            ))),
        }
    }
}
