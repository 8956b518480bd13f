use std::sync::Arc;

use axum::extract::State;

use crate::api::{ok, ApiResult, AppState};
use crate::models::GrossProfitRecord;

use super::ReportParams;

/// GET /api/reports/gross-profit/products?startDate=..&endDate=..&limit=10
pub async fn by_product(
    State(state): State<Arc<AppState>>,
    params: ReportParams,
) -> ApiResult<Vec<GrossProfitRecord>> {
    let (start, end) = params.dates().map_err(|e| state.reject(e))?;
    let limit = params.limit().map_err(|e| state.reject(e))?;
    let data = state
        .reports
        .gross_profit_by_product(start, end, limit)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(ok(data))
}

/// GET /api/reports/gross-profit/categories?startDate=..&endDate=..&limit=10
pub async fn by_category(
    State(state): State<Arc<AppState>>,
    params: ReportParams,
) -> ApiResult<Vec<GrossProfitRecord>> {
    let (start, end) = params.dates().map_err(|e| state.reject(e))?;
    let limit = params.limit().map_err(|e| state.reject(e))?;
    let data = state
        .reports
        .gross_profit_by_category(start, end, limit)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(ok(data))
}

/// GET /api/reports/gross-profit/orders?startDate=..&endDate=..
pub async fn by_order(
    State(state): State<Arc<AppState>>,
    params: ReportParams,
) -> ApiResult<Vec<GrossProfitRecord>> {
    let (start, end) = params.dates().map_err(|e| state.reject(e))?;
    let data = state
        .reports
        .gross_profit_by_order(start, end)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(ok(data))
}
