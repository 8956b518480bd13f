//! Gross profit by product, category and order.
//!
//! Cost basis is each product's current `cost_price`. Lines whose product
//! is missing or has a null or negative cost contribute 0 cost and are
//! counted so the record can be flagged as incomplete.

use serde::Deserialize;

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{GrossProfitRecord, ProfitDimension};
use crate::params::{DateRange, Limit};
use crate::sql_builder::SqlBuilder;

use super::completed_within;

const LINE_REVENUE: &str = "CAST(SUM(oi.quantity * oi.unit_price) AS DOUBLE) AS revenue";
const LINE_COST: &str = "CAST(SUM(oi.quantity * CASE \
     WHEN p.cost_price IS NULL OR p.cost_price < 0 THEN 0 \
     ELSE p.cost_price END) AS DOUBLE) AS cost";
const UNKNOWN_COST_LINES: &str =
    "COUNT(*) FILTER (WHERE p.cost_price IS NULL OR p.cost_price < 0) AS unknown_cost_lines";

#[derive(Deserialize)]
struct ProfitRow {
    #[serde(rename = "group_key")]
    key: i64,
    #[serde(rename = "group_label")]
    label: String,
    revenue: f64,
    cost: f64,
    unknown_cost_lines: i64,
}

// ---------------------------------------------------------------------------
// GrossProfitQuery
// ---------------------------------------------------------------------------

pub struct GrossProfitQuery<'a> {
    conn: &'a Connection,
}

impl<'a> GrossProfitQuery<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Most profitable products first; ties broken by ascending product id.
    pub fn by_product(&self, range: &DateRange, limit: Limit) -> Result<Vec<GrossProfitRecord>> {
        let mut qb = lines_within(range);
        qb.select(&[
            "oi.product_id AS group_key",
            "COALESCE(p.name, 'Unknown product') AS group_label",
            LINE_REVENUE,
            LINE_COST,
            UNKNOWN_COST_LINES,
        ]);
        qb.group_by(&["oi.product_id", "p.name"]);

        self.ranked(ProfitDimension::Product, &qb, &["profit DESC", "group_key ASC"], Some(limit))
    }

    /// Most profitable categories first. Products without a category roll
    /// up under key 0, "Uncategorized".
    pub fn by_category(&self, range: &DateRange, limit: Limit) -> Result<Vec<GrossProfitRecord>> {
        let mut qb = lines_within(range);
        qb.join("LEFT JOIN categories c ON c.id = p.category_id");
        qb.select(&[
            "COALESCE(c.id, 0) AS group_key",
            "COALESCE(c.name, 'Uncategorized') AS group_label",
            LINE_REVENUE,
            LINE_COST,
            UNKNOWN_COST_LINES,
        ]);
        qb.group_by(&["COALESCE(c.id, 0)", "COALESCE(c.name, 'Uncategorized')"]);

        self.ranked(ProfitDimension::Category, &qb, &["profit DESC", "group_key ASC"], Some(limit))
    }

    /// One record per order, oldest first. Revenue is the sum of the
    /// order's lines, so it excludes order-level adjustments in
    /// `total_amount`.
    pub fn by_order(&self, range: &DateRange) -> Result<Vec<GrossProfitRecord>> {
        let mut qb = lines_within(range);
        qb.select(&[
            "o.id AS group_key",
            "strftime(o.order_date, '%Y-%m-%d %H:%M:%S') AS group_label",
            LINE_REVENUE,
            LINE_COST,
            UNKNOWN_COST_LINES,
        ]);
        qb.group_by(&["o.id", "o.order_date"]);

        self.ranked(ProfitDimension::Order, &qb, &["group_label ASC", "group_key ASC"], None)
    }

    /// Wrap the per-group aggregate so it can be ordered by profit.
    fn ranked(
        &self,
        dimension: ProfitDimension,
        inner: &SqlBuilder,
        order: &[&str],
        limit: Option<Limit>,
    ) -> Result<Vec<GrossProfitRecord>> {
        let (inner_sql, params) = inner.build();
        let source = format!("({}) agg", inner_sql);

        let mut qb = SqlBuilder::new(&source);
        qb.select(&["*", "revenue - cost AS profit"]);
        qb.order_by(order);
        if let Some(limit) = limit {
            qb.limit(limit.get());
        }
        // The outer query adds no placeholders of its own
        let (sql, _) = qb.build();

        let rows: Vec<ProfitRow> = self.conn.execute_into(&sql, &params)?;
        Ok(rows
            .into_iter()
            .map(|row| {
                GrossProfitRecord::new(
                    dimension,
                    row.key,
                    row.label,
                    row.revenue,
                    row.cost,
                    row.unknown_cost_lines > 0,
                )
            })
            .collect())
    }
}

/// Order lines of completed orders in range, joined to their product.
fn lines_within(range: &DateRange) -> SqlBuilder {
    let mut qb = SqlBuilder::new("order_items oi");
    qb.join("JOIN orders o ON o.id = oi.order_id");
    qb.join("LEFT JOIN products p ON p.id = oi.product_id");
    completed_within(&mut qb, range);
    qb
}
