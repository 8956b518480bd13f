//! Reference DDL for the tables the report queries read.
//!
//! Production deployments own their schema; this exists so a fresh database
//! (tests, demos, `--init-schema`) has the shape the queries expect.

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    name VARCHAR NOT NULL
);

CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY,
    name VARCHAR NOT NULL,
    category_id INTEGER,
    price DOUBLE NOT NULL DEFAULT 0,
    cost_price DOUBLE
);

CREATE TABLE IF NOT EXISTS customers (
    id INTEGER PRIMARY KEY,
    name VARCHAR NOT NULL,
    email VARCHAR
);

CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY,
    customer_id INTEGER,
    order_date TIMESTAMP NOT NULL,
    status VARCHAR NOT NULL DEFAULT 'completed',
    payment_method VARCHAR NOT NULL DEFAULT 'cash',
    total_amount DOUBLE NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS order_items (
    id INTEGER PRIMARY KEY,
    order_id INTEGER NOT NULL,
    product_id INTEGER NOT NULL,
    quantity INTEGER NOT NULL,
    unit_price DOUBLE NOT NULL
);
"#;

/// Only orders in this status contribute to reports.
pub const COMPLETED_STATUS: &str = "completed";
