use serde::{Deserialize, Serialize};

/// What a gross profit record is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitDimension {
    Product,
    Category,
    Order,
}

// ---------------------------------------------------------------------------
// GrossProfitRecord
// ---------------------------------------------------------------------------

/// Revenue against cost basis for one product, category or order.
///
/// Cost uses each product's *current* `cost_price`, not the price in effect
/// when the sale happened, so historical margins drift when costs change.
/// Lines whose product has no usable cost contribute 0 cost and set
/// `cost_incomplete`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrossProfitRecord {
    pub dimension: ProfitDimension,
    /// Product id, category id (0 for uncategorized) or order id.
    pub key: i64,
    /// Product name, category name, or the order timestamp.
    pub label: String,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    /// `profit / revenue * 100`, absent when revenue is 0.
    pub margin_percent: Option<f64>,
    pub cost_incomplete: bool,
}

impl GrossProfitRecord {
    pub fn new(
        dimension: ProfitDimension,
        key: i64,
        label: String,
        revenue: f64,
        cost: f64,
        cost_incomplete: bool,
    ) -> Self {
        let cost = cost.max(0.0);
        let profit = revenue - cost;
        let margin_percent = if revenue != 0.0 {
            Some(profit / revenue * 100.0)
        } else {
            None
        };
        Self {
            dimension,
            key,
            label,
            revenue,
            cost,
            profit,
            margin_percent,
            cost_incomplete,
        }
    }
}
