//! Product rankings built from order lines.

use crate::connection::Connection;
use crate::error::Result;
use crate::models::TopSellingProduct;
use crate::params::{DateRange, Limit, ProductRanking};
use crate::sql_builder::SqlBuilder;

use super::completed_within;

pub struct ProductQuery<'a> {
    conn: &'a Connection,
}

impl<'a> ProductQuery<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Best-selling products, ordered by the ranking metric descending with
    /// ties broken by ascending product id.
    pub fn top(
        &self,
        range: &DateRange,
        limit: Limit,
        ranking: ProductRanking,
    ) -> Result<Vec<TopSellingProduct>> {
        let mut qb = SqlBuilder::new("order_items oi");
        qb.select(&[
            "p.id AS product_id",
            "p.name AS name",
            "CAST(SUM(oi.quantity) AS BIGINT) AS quantity_sold",
            "CAST(SUM(oi.quantity * oi.unit_price) AS DOUBLE) AS revenue",
        ]);
        qb.join("JOIN orders o ON o.id = oi.order_id");
        qb.join("JOIN products p ON p.id = oi.product_id");
        completed_within(&mut qb, range);
        qb.group_by(&["p.id", "p.name"]);
        qb.order_by(&ranking.order_by());
        qb.limit(limit.get());

        let (sql, params) = qb.build();
        self.conn.execute_into(&sql, &params)
    }
}
