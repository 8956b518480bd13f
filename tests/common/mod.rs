//! Shared test fixtures for the report integration tests.
//!
//! `setup_sample_db()` creates an in-memory DuckDB database with the
//! reference schema and a small store's worth of January 2024 trading,
//! loaded through NDJSON temp files.
//!
//! January 2024 completed orders:
//!
//! | order | when                | customer | method | lines                          | total |
//! |-------|---------------------|----------|--------|--------------------------------|-------|
//! | 1     | 2024-01-01 08:00:00 | Alice    | cash   | 2 x Coffee, 1 x Croissant      | 10.0  |
//! | 2     | 2024-01-15 12:30:00 | Bob      | card   | 4 x Tea                        | 10.0  |
//! | 6     | 2024-01-16 09:00:00 | (none)   | cash   | 2 x Tea                        | 5.0   |
//! | 3     | 2024-01-31 23:59:30 | Alice    | card   | 1 x Coffee, 1 x Mystery Box    | 13.0  |
//!
//! Order 4 (2024-02-01 00:00:00) falls outside January and order 5 is
//! cancelled.

#![allow(dead_code)]

use std::io::Write;
use std::time::Duration;

use chrono::NaiveDate;
use pos_reports::config::{ApiConfig, PoolConfig, ServiceConfig};
use pos_reports::{Connection, ConnectionPool, ReportService};
use tempfile::NamedTempFile;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Schema only, no rows.
pub fn empty_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.apply_schema().unwrap();
    conn
}

pub fn setup_sample_db() -> Connection {
    let conn = empty_db();

    write_ndjson_and_load(
        &conn,
        "categories",
        &[
            serde_json::json!({"id": 1, "name": "Beverages"}),
            serde_json::json!({"id": 2, "name": "Bakery"}),
        ],
    );

    write_ndjson_and_load(
        &conn,
        "products",
        &[
            serde_json::json!({"id": 1, "name": "Coffee", "category_id": 1, "price": 3.0, "cost_price": 1.0}),
            serde_json::json!({"id": 2, "name": "Tea", "category_id": 1, "price": 2.5, "cost_price": 0.5}),
            serde_json::json!({"id": 3, "name": "Croissant", "category_id": 2, "price": 4.0, "cost_price": 1.5}),
            serde_json::json!({"id": 4, "name": "Mystery Box", "price": 10.0, "cost_price": null}),
        ],
    );

    write_ndjson_and_load(
        &conn,
        "customers",
        &[
            serde_json::json!({"id": 1, "name": "Alice", "email": "alice@example.com"}),
            serde_json::json!({"id": 2, "name": "Bob", "email": "bob@example.com"}),
        ],
    );

    write_ndjson_and_load(
        &conn,
        "orders",
        &[
            order(1, Some(1), "2024-01-01 08:00:00", "completed", "cash", 10.0),
            order(2, Some(2), "2024-01-15 12:30:00", "completed", "card", 10.0),
            order(3, Some(1), "2024-01-31 23:59:30", "completed", "card", 13.0),
            order(4, Some(2), "2024-02-01 00:00:00", "completed", "cash", 8.0),
            order(5, Some(2), "2024-01-20 10:00:00", "cancelled", "cash", 30.0),
            order(6, None, "2024-01-16 09:00:00", "completed", "cash", 5.0),
        ],
    );

    write_ndjson_and_load(
        &conn,
        "order_items",
        &[
            item(1, 1, 1, 2, 3.0),
            item(2, 1, 3, 1, 4.0),
            item(3, 2, 2, 4, 2.5),
            item(4, 3, 1, 1, 3.0),
            item(5, 3, 4, 1, 10.0),
            item(6, 4, 3, 2, 4.0),
            item(7, 5, 1, 10, 3.0),
            item(8, 6, 2, 2, 2.5),
        ],
    );

    conn
}

pub fn pool_config(size: usize, acquire_timeout: Duration) -> PoolConfig {
    PoolConfig {
        size,
        acquire_timeout,
    }
}

pub fn sample_pool() -> ConnectionPool {
    ConnectionPool::from_connection(
        setup_sample_db(),
        pool_config(2, Duration::from_millis(200)),
    )
    .unwrap()
}

pub fn sample_service() -> ReportService {
    ReportService::new(sample_pool(), ServiceConfig::default())
}

pub fn api_config(fallback_mode: bool) -> ApiConfig {
    ApiConfig {
        readiness_ttl: Duration::from_secs(60),
        fallback_mode,
    }
}

fn order(
    id: i64,
    customer_id: Option<i64>,
    order_date: &str,
    status: &str,
    payment_method: &str,
    total_amount: f64,
) -> serde_json::Value {
    let mut row = serde_json::json!({
        "id": id,
        "order_date": order_date,
        "status": status,
        "payment_method": payment_method,
        "total_amount": total_amount,
    });
    if let Some(customer_id) = customer_id {
        row["customer_id"] = serde_json::json!(customer_id);
    }
    row
}

fn item(id: i64, order_id: i64, product_id: i64, quantity: i64, unit_price: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "order_id": order_id,
        "product_id": product_id,
        "quantity": quantity,
        "unit_price": unit_price,
    })
}

/// Write a slice of JSON values as NDJSON to a temp file and append them to
/// `table_name` via `Connection::load_ndjson`.
pub fn write_ndjson_and_load(conn: &Connection, table_name: &str, rows: &[serde_json::Value]) {
    let mut file = NamedTempFile::new().unwrap();
    for row in rows {
        writeln!(file, "{}", serde_json::to_string(row).unwrap()).unwrap();
    }
    file.flush().unwrap();

    let path = file.path().to_str().unwrap();
    conn.load_ndjson(table_name, path).unwrap();
    // DuckDB has copied the rows into the table, so the temp file can go
}
