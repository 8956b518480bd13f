//! Aggregation queries over completed orders.
//!
//! Each module provides a query struct that borrows a
//! [`Connection`](crate::connection::Connection) and returns typed report
//! records. Inputs are already-validated [`params`](crate::params) types.

pub mod products;
pub mod profit;
pub mod sales;

pub use products::ProductQuery;
pub use profit::GrossProfitQuery;
pub use sales::SalesQuery;

use crate::params::DateRange;
use crate::schema::COMPLETED_STATUS;
use crate::sql_builder::SqlBuilder;

/// Restrict `orders o` to completed orders inside the range, both end days
/// included in full.
fn completed_within(qb: &mut SqlBuilder, range: &DateRange) {
    let [low, high] = range.bind_params();
    qb.where_eq("o.status", COMPLETED_STATUS);
    qb.where_between("o.order_date", &low, &high);
}
