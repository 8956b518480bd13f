pub mod health;
pub mod products;
pub mod profit;
pub mod sales;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::AppError;
use crate::error::{ReportError, Result};
use crate::params::{parse_date, Interval, ProductRanking};

/// Raw query-string parameters shared by the report endpoints.
///
/// Everything arrives as text so malformed values surface as our own 400
/// body. Query strings that do not parse at all (duplicate keys, bad
/// percent-encoding) are rejected with the same envelope.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub interval: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
}

impl<S: Send + Sync> FromRequestParts<S> for ReportParams {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let Query(params) = Query::<ReportParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
        Ok(params)
    }
}

impl ReportParams {
    pub fn dates(&self) -> Result<(NaiveDate, NaiveDate)> {
        let start = required(&self.start_date, "startDate")?;
        let end = required(&self.end_date, "endDate")?;
        Ok((parse_date("startDate", start)?, parse_date("endDate", end)?))
    }

    pub fn interval(&self) -> Result<Interval> {
        match self.interval.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(Interval::default()),
        }
    }

    pub fn limit(&self) -> Result<Option<i64>> {
        match self.limit.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse::<i64>().map(Some).map_err(|_| {
                ReportError::InvalidParameter(format!("limit must be an integer, got '{}'", raw))
            }),
        }
    }

    pub fn ranking(&self) -> Result<ProductRanking> {
        match self.sort_by.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(ProductRanking::default()),
        }
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ReportError::InvalidParameter(format!(
            "missing required query parameter: {}",
            name
        ))),
    }
}
