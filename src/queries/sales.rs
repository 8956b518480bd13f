//! Order-level sales aggregates: summary, trend, payment methods, customers.

use serde::Deserialize;

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{SalesByCustomer, SalesByPaymentMethod, SalesSummary, SalesTrendPoint};
use crate::params::{DateRange, Interval, Limit};
use crate::sql_builder::SqlBuilder;

use super::completed_within;

#[derive(Deserialize)]
struct SummaryRow {
    revenue: f64,
    order_count: i64,
    items_sold: i64,
}

// ---------------------------------------------------------------------------
// SalesQuery
// ---------------------------------------------------------------------------

/// Query interface for order totals.
pub struct SalesQuery<'a> {
    conn: &'a Connection,
}

impl<'a> SalesQuery<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Revenue, order count, average order value and units sold.
    ///
    /// Always returns a summary; an empty range yields zeros.
    pub fn summary(&self, range: &DateRange) -> Result<SalesSummary> {
        let mut qb = SqlBuilder::new("orders o");
        qb.select(&[
            "CAST(COALESCE(SUM(o.total_amount), 0) AS DOUBLE) AS revenue",
            "COUNT(*) AS order_count",
            "CAST(COALESCE(SUM(i.items), 0) AS BIGINT) AS items_sold",
        ]);
        qb.join(
            "LEFT JOIN (SELECT order_id, SUM(quantity) AS items \
             FROM order_items GROUP BY order_id) i ON i.order_id = o.id",
        );
        completed_within(&mut qb, range);

        let (sql, params) = qb.build();
        let row = self
            .conn
            .execute_into::<SummaryRow>(&sql, &params)?
            .into_iter()
            .next()
            .unwrap_or(SummaryRow {
                revenue: 0.0,
                order_count: 0,
                items_sold: 0,
            });

        let average_order_value = if row.order_count > 0 {
            row.revenue / row.order_count as f64
        } else {
            0.0
        };

        Ok(SalesSummary {
            start_date: range.start(),
            end_date: range.end(),
            revenue: row.revenue,
            order_count: row.order_count,
            average_order_value,
            items_sold: row.items_sold,
        })
    }

    /// Revenue and order count per calendar bucket, oldest first.
    ///
    /// Only buckets that contain at least one order are returned. Week
    /// buckets are labelled by their ISO Monday, which may precede the
    /// range start.
    pub fn trend(&self, range: &DateRange, interval: Interval) -> Result<Vec<SalesTrendPoint>> {
        let bucket = format!(
            "strftime(date_trunc('{}', o.order_date), '{}') AS bucket",
            interval.trunc_unit(),
            interval.label_format()
        );

        let mut qb = SqlBuilder::new("orders o");
        qb.select(&[
            bucket.as_str(),
            "CAST(SUM(o.total_amount) AS DOUBLE) AS revenue",
            "COUNT(*) AS order_count",
        ]);
        completed_within(&mut qb, range);
        qb.group_by(&["bucket"]);
        qb.order_by(&["bucket ASC"]);

        let (sql, params) = qb.build();
        self.conn.execute_into(&sql, &params)
    }

    /// Revenue and order count per payment method, highest revenue first.
    pub fn by_payment_method(&self, range: &DateRange) -> Result<Vec<SalesByPaymentMethod>> {
        let mut qb = SqlBuilder::new("orders o");
        qb.select(&[
            "o.payment_method AS payment_method",
            "CAST(SUM(o.total_amount) AS DOUBLE) AS revenue",
            "COUNT(*) AS order_count",
        ]);
        completed_within(&mut qb, range);
        qb.group_by(&["o.payment_method"]);
        qb.order_by(&["revenue DESC", "payment_method ASC"]);

        let (sql, params) = qb.build();
        self.conn.execute_into(&sql, &params)
    }

    /// Top customers by revenue. Orders without a customer are excluded.
    pub fn by_customer(&self, range: &DateRange, limit: Limit) -> Result<Vec<SalesByCustomer>> {
        let mut qb = SqlBuilder::new("orders o");
        qb.select(&[
            "c.id AS customer_id",
            "c.name AS customer_name",
            "CAST(SUM(o.total_amount) AS DOUBLE) AS revenue",
            "COUNT(*) AS order_count",
        ]);
        qb.join("JOIN customers c ON c.id = o.customer_id");
        completed_within(&mut qb, range);
        qb.group_by(&["c.id", "c.name"]);
        qb.order_by(&["revenue DESC", "customer_id ASC"]);
        qb.limit(limit.get());

        let (sql, params) = qb.build();
        self.conn.execute_into(&sql, &params)
    }
}
