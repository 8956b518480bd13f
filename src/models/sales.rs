use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SalesSummary: totals for a date range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub revenue: f64,
    pub order_count: i64,
    /// `revenue / order_count`, or 0 when there are no orders.
    pub average_order_value: f64,
    pub items_sold: i64,
}

// ---------------------------------------------------------------------------
// SalesTrendPoint: one calendar bucket of a trend series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SalesTrendPoint {
    pub bucket: String,
    pub revenue: f64,
    pub order_count: i64,
}

// ---------------------------------------------------------------------------
// TopSellingProduct
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TopSellingProduct {
    pub product_id: i64,
    pub name: String,
    pub quantity_sold: i64,
    pub revenue: f64,
}

// ---------------------------------------------------------------------------
// SalesByPaymentMethod
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SalesByPaymentMethod {
    pub payment_method: String,
    pub revenue: f64,
    pub order_count: i64,
}

// ---------------------------------------------------------------------------
// SalesByCustomer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SalesByCustomer {
    pub customer_id: i64,
    pub customer_name: String,
    pub revenue: f64,
    pub order_count: i64,
}
