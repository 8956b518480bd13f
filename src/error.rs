use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid interval '{0}': expected one of day, week, month, year")]
    InvalidInterval(String),

    #[error("Invalid limit {0}: must be a positive integer")]
    InvalidLimit(i64),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("Query failed: {0}")]
    UnknownQuery(String),

    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification used to pick an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Unavailable,
    Internal,
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::InvalidRange { .. }
            | ReportError::InvalidInterval(_)
            | ReportError::InvalidLimit(_)
            | ReportError::InvalidParameter(_) => ErrorKind::Validation,
            ReportError::DataSourceUnavailable(_) => ErrorKind::Unavailable,
            ReportError::UnknownQuery(_) | ReportError::DuckDb(_) | ReportError::Json(_) => {
                ErrorKind::Internal
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
