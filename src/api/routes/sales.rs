use std::sync::Arc;

use axum::extract::State;

use crate::api::{ok, ApiResult, AppState};
use crate::models::{SalesByCustomer, SalesByPaymentMethod, SalesSummary, SalesTrendPoint};

use super::ReportParams;

/// GET /api/reports/sales/summary?startDate=2024-01-01&endDate=2024-01-31
pub async fn summary(
    State(state): State<Arc<AppState>>,
    params: ReportParams,
) -> ApiResult<SalesSummary> {
    let (start, end) = params.dates().map_err(|e| state.reject(e))?;
    let data = state
        .reports
        .sales_summary(start, end)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(ok(data))
}

/// GET /api/reports/sales/trend?startDate=..&endDate=..&interval=week
///
/// `interval` is one of day (default), week, month, year.
pub async fn trend(
    State(state): State<Arc<AppState>>,
    params: ReportParams,
) -> ApiResult<Vec<SalesTrendPoint>> {
    let (start, end) = params.dates().map_err(|e| state.reject(e))?;
    let interval = params.interval().map_err(|e| state.reject(e))?;
    let data = state
        .reports
        .sales_trend(start, end, interval)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(ok(data))
}

/// GET /api/reports/sales/payment-methods?startDate=..&endDate=..
pub async fn payment_methods(
    State(state): State<Arc<AppState>>,
    params: ReportParams,
) -> ApiResult<Vec<SalesByPaymentMethod>> {
    let (start, end) = params.dates().map_err(|e| state.reject(e))?;
    let data = state
        .reports
        .sales_by_payment_method(start, end)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(ok(data))
}

/// GET /api/reports/sales/customers?startDate=..&endDate=..&limit=10
pub async fn customers(
    State(state): State<Arc<AppState>>,
    params: ReportParams,
) -> ApiResult<Vec<SalesByCustomer>> {
    let (start, end) = params.dates().map_err(|e| state.reject(e))?;
    let limit = params.limit().map_err(|e| state.reject(e))?;
    let data = state
        .reports
        .sales_by_customer(start, end, limit)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(ok(data))
}
