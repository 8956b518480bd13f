use std::sync::Arc;

use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::{ok, ApiResult, AppError, AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub database: &'static str,
    pub checked_at: DateTime<Utc>,
}

/// GET /api/health
///
/// Probes the database at most once per readiness TTL.
pub async fn health(State(state): State<Arc<AppState>>) -> ApiResult<HealthStatus> {
    let readiness = match state.readiness.get() {
        Some(cached) => cached,
        None => {
            let ready = state.reports.ping().await.is_ok();
            state.readiness.store(ready)
        }
    };

    if !readiness.ready {
        return Err(AppError::unavailable(
            "database unavailable",
            state.config.fallback_mode,
        ));
    }

    Ok(ok(HealthStatus {
        database: "ready",
        checked_at: readiness.checked_at,
    }))
}
