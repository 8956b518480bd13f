use std::sync::Arc;

use axum::extract::State;

use crate::api::{ok, ApiResult, AppState};
use crate::models::TopSellingProduct;

use super::ReportParams;

/// GET /api/reports/products/top?startDate=..&endDate=..&limit=5&sortBy=quantity
///
/// `sortBy` is `revenue` (default) or `quantity`.
pub async fn top(
    State(state): State<Arc<AppState>>,
    params: ReportParams,
) -> ApiResult<Vec<TopSellingProduct>> {
    let (start, end) = params.dates().map_err(|e| state.reject(e))?;
    let limit = params.limit().map_err(|e| state.reject(e))?;
    let ranking = params.ranking().map_err(|e| state.reject(e))?;
    let data = state
        .reports
        .top_products(start, end, limit, ranking)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(ok(data))
}
