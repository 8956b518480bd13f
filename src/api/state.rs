use crate::cache::ReadinessCache;
use crate::config::ApiConfig;
use crate::error::{ErrorKind, ReportError};
use crate::service::ReportService;

use super::error::AppError;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    pub reports: ReportService,
    /// Last known data source readiness, served by `/api/health`.
    pub readiness: ReadinessCache,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(reports: ReportService, config: ApiConfig) -> Self {
        Self {
            reports,
            readiness: ReadinessCache::new(config.readiness_ttl),
            config,
        }
    }

    /// Turn a report failure into a response, forgetting the cached
    /// readiness when the data source went away.
    pub fn reject(&self, e: ReportError) -> AppError {
        if e.kind() == ErrorKind::Unavailable {
            self.readiness.invalidate();
            return AppError::unavailable(e.to_string(), self.config.fallback_mode);
        }
        AppError::from(e)
    }
}
