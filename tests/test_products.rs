//! Tests for the top products ranking.

mod common;

use common::{approx_eq, date};
use pos_reports::queries::ProductQuery;
use pos_reports::{Connection, DateRange, Limit, ProductRanking};

fn january() -> DateRange {
    DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap()
}

/// Two products, each sold once on 2024-03-01 for the given line totals.
fn two_product_db(first_revenue: f64, second_revenue: f64) -> Connection {
    let conn = common::empty_db();
    conn.execute_batch(&format!(
            "INSERT INTO products (id, name, price, cost_price) VALUES \
                 (10, 'Alpha', 1.0, 0.5), (20, 'Beta', 1.0, 0.5);
             INSERT INTO orders (id, order_date, payment_method, total_amount) VALUES \
                 (1, TIMESTAMP '2024-03-01 10:00:00', 'cash', {total});
             INSERT INTO order_items (id, order_id, product_id, quantity, unit_price) VALUES \
                 (1, 1, 10, 1, {first_revenue}), (2, 1, 20, 1, {second_revenue});",
            total = first_revenue + second_revenue,
        ))
        .unwrap();
    conn
}

// ---------------------------------------------------------------------------
// Ranking by revenue
// ---------------------------------------------------------------------------

#[test]
fn top_products_ranked_by_revenue() {
    let conn = common::setup_sample_db();
    let rows = ProductQuery::new(&conn)
        .top(&january(), Limit::default(), ProductRanking::Revenue)
        .unwrap();

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Tea", "Mystery Box", "Coffee", "Croissant"]);
    assert!(approx_eq(rows[0].revenue, 15.0));
    assert_eq!(rows[0].quantity_sold, 6);
    assert!(rows.windows(2).all(|w| w[0].revenue >= w[1].revenue));
}

#[test]
fn top_products_respects_limit() {
    let conn = common::setup_sample_db();
    let rows = ProductQuery::new(&conn)
        .top(&january(), Limit::new(2).unwrap(), ProductRanking::Revenue)
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].product_id, 2);
    assert_eq!(rows[1].product_id, 4);
}

#[test]
fn limit_five_never_returns_more_than_five() {
    let conn = common::setup_sample_db();
    let rows = ProductQuery::new(&conn)
        .top(&january(), Limit::new(5).unwrap(), ProductRanking::Revenue)
        .unwrap();
    assert!(rows.len() <= 5);
}

#[test]
fn swapping_revenues_swaps_order() {
    let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 1)).unwrap();

    let conn = two_product_db(20.0, 10.0);
    let rows = ProductQuery::new(&conn)
        .top(&range, Limit::default(), ProductRanking::Revenue)
        .unwrap();
    assert_eq!(rows[0].name, "Alpha");
    assert_eq!(rows[1].name, "Beta");

    let conn = two_product_db(10.0, 20.0);
    let rows = ProductQuery::new(&conn)
        .top(&range, Limit::default(), ProductRanking::Revenue)
        .unwrap();
    assert_eq!(rows[0].name, "Beta");
    assert_eq!(rows[1].name, "Alpha");
}

#[test]
fn equal_revenue_ties_break_by_product_id() {
    let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 1)).unwrap();
    let conn = two_product_db(7.5, 7.5);
    let rows = ProductQuery::new(&conn)
        .top(&range, Limit::default(), ProductRanking::Revenue)
        .unwrap();
    assert_eq!(rows[0].product_id, 10);
    assert_eq!(rows[1].product_id, 20);
}

// ---------------------------------------------------------------------------
// Ranking by quantity
// ---------------------------------------------------------------------------

#[test]
fn top_products_ranked_by_quantity() {
    let conn = common::setup_sample_db();
    let rows = ProductQuery::new(&conn)
        .top(&january(), Limit::default(), ProductRanking::Quantity)
        .unwrap();

    let ids: Vec<i64> = rows.iter().map(|r| r.product_id).collect();
    // Croissant and Mystery Box both sold 1; lower id first
    assert_eq!(ids, vec![2, 1, 3, 4]);
}

#[test]
fn cancelled_and_out_of_range_sales_are_ignored() {
    let conn = common::setup_sample_db();
    let rows = ProductQuery::new(&conn)
        .top(&january(), Limit::default(), ProductRanking::Quantity)
        .unwrap();
    let coffee = rows.iter().find(|r| r.name == "Coffee").unwrap();
    // Cancelled order 5 sold 10 more
    assert_eq!(coffee.quantity_sold, 3);
    assert!(approx_eq(coffee.revenue, 9.0));
}

#[test]
fn empty_range_returns_no_products() {
    let conn = common::setup_sample_db();
    let range = DateRange::new(date(2025, 1, 1), date(2025, 12, 31)).unwrap();
    let rows = ProductQuery::new(&conn)
        .top(&range, Limit::default(), ProductRanking::Revenue)
        .unwrap();
    assert!(rows.is_empty());
}
