//! Validated report inputs.
//!
//! Raw request values are converted into these types at the boundary; the
//! query layer only ever sees values that already passed validation.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 1000;

const BOUND_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// An inclusive calendar-date range. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ReportError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Midnight at the start of the first day.
    pub fn lower_bound(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Last representable microsecond of the final day.
    pub fn upper_bound(&self) -> NaiveDateTime {
        let end_of_day =
            NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).expect("valid end-of-day time");
        self.end.and_time(end_of_day)
    }

    /// Lower and upper bounds formatted for binding as `TIMESTAMP` parameters.
    pub fn bind_params(&self) -> [String; 2] {
        [
            self.lower_bound().format(BOUND_FORMAT).to_string(),
            self.upper_bound().format(BOUND_FORMAT).to_string(),
        ]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parse an ISO-8601 date (`YYYY-MM-DD`) or an RFC 3339 timestamp reduced to
/// its calendar date.
pub fn parse_date(name: &str, raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.date_naive());
    }
    Err(ReportError::InvalidParameter(format!(
        "{} must be an ISO-8601 date (YYYY-MM-DD), got '{}'",
        name, raw
    )))
}

// ---------------------------------------------------------------------------
// Interval
// ---------------------------------------------------------------------------

/// Calendar-aligned trend bucket width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl Interval {
    /// Unit name for DuckDB's `date_trunc`. `week` truncates to the ISO
    /// Monday.
    pub fn trunc_unit(&self) -> &'static str {
        match self {
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }

    /// `strftime` pattern for the bucket label.
    pub fn label_format(&self) -> &'static str {
        match self {
            Interval::Day | Interval::Week => "%Y-%m-%d",
            Interval::Month => "%Y-%m",
            Interval::Year => "%Y",
        }
    }
}

impl FromStr for Interval {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Interval::Day),
            "week" => Ok(Interval::Week),
            "month" => Ok(Interval::Month),
            "year" => Ok(Interval::Year),
            _ => Err(ReportError::InvalidInterval(s.to_string())),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trunc_unit())
    }
}

// ---------------------------------------------------------------------------
// Limit
// ---------------------------------------------------------------------------

/// Row cap for top-N reports, in `1..=MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(usize);

impl Limit {
    /// Non-positive values are rejected; values above [`MAX_LIMIT`] are
    /// clamped.
    pub fn new(n: i64) -> Result<Self> {
        if n <= 0 {
            return Err(ReportError::InvalidLimit(n));
        }
        let n = usize::try_from(n).unwrap_or(MAX_LIMIT).min(MAX_LIMIT);
        Ok(Self(n))
    }

    /// `None` falls back to [`DEFAULT_LIMIT`].
    pub fn or_default(n: Option<i64>) -> Result<Self> {
        match n {
            Some(n) => Self::new(n),
            None => Ok(Self::default()),
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

// ---------------------------------------------------------------------------
// ProductRanking
// ---------------------------------------------------------------------------

/// Metric that orders the top products report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductRanking {
    #[default]
    Revenue,
    Quantity,
}

impl ProductRanking {
    pub(crate) fn order_by(&self) -> [&'static str; 2] {
        match self {
            ProductRanking::Revenue => ["revenue DESC", "product_id ASC"],
            ProductRanking::Quantity => ["quantity_sold DESC", "product_id ASC"],
        }
    }
}

impl FromStr for ProductRanking {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "revenue" => Ok(ProductRanking::Revenue),
            "quantity" => Ok(ProductRanking::Quantity),
            _ => Err(ReportError::InvalidParameter(format!(
                "sortBy must be 'revenue' or 'quantity', got '{}'",
                s
            ))),
        }
    }
}
