//! HTTP surface: one GET endpoint per report plus a health check.
//!
//! Every success body is `{"success": true, "data": ...}`.

pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Success envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

pub type ApiResult<T> = Result<Json<Envelope<T>>, AppError>;

pub fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        data,
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health))
        .route("/api/reports/sales/summary", get(routes::sales::summary))
        .route("/api/reports/sales/trend", get(routes::sales::trend))
        .route(
            "/api/reports/sales/payment-methods",
            get(routes::sales::payment_methods),
        )
        .route("/api/reports/sales/customers", get(routes::sales::customers))
        .route("/api/reports/products/top", get(routes::products::top))
        .route(
            "/api/reports/gross-profit/products",
            get(routes::profit::by_product),
        )
        .route(
            "/api/reports/gross-profit/categories",
            get(routes::profit::by_category),
        )
        .route(
            "/api/reports/gross-profit/orders",
            get(routes::profit::by_order),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
