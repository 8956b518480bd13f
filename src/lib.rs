//! Sales reporting for a point-of-sale store.
//!
//! Aggregates completed orders in a DuckDB database into sales summaries,
//! calendar-bucketed trends, product/customer/payment-method rankings and
//! gross profit breakdowns. Reports are read-only and computed on every
//! call.
//!
//! Layers, leaf to root:
//!
//! - [`ConnectionPool`]: bounded, FIFO, hands out [`PooledConnection`]s that
//!   return themselves on drop.
//! - [`queries`]: one parameterized SQL query per report, built with
//!   [`SqlBuilder`].
//! - [`ReportService`]: validates inputs, borrows a connection, runs the
//!   query under a timeout.
//! - [`api`]: Axum route handlers with a uniform JSON envelope.
//!
//! # Quick start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use pos_reports::{ConnectionPool, ReportService};
//! use pos_reports::config::{PoolConfig, ServiceConfig};
//!
//! # async fn example() -> pos_reports::Result<()> {
//! let pool = ConnectionPool::open("pos.duckdb", PoolConfig::default())?;
//! let reports = ReportService::new(pool, ServiceConfig::default());
//!
//! let jan = reports
//!     .sales_summary(
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//!     )
//!     .await?;
//! println!("{} orders, {:.2} revenue", jan.order_count, jan.revenue);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod params;
pub mod pool;
pub mod queries;
pub mod schema;
pub mod service;
pub mod sql_builder;

pub use cache::ReadinessCache;
pub use connection::Connection;
pub use error::{ErrorKind, ReportError, Result};
pub use params::{DateRange, Interval, Limit, ProductRanking};
pub use pool::{ConnectionPool, PoolStatus, PooledConnection};
pub use service::ReportService;
pub use sql_builder::SqlBuilder;
