//! Projection output models.
//!
//! Every entity here is produced fresh per engine call and never
//! mutated afterwards; the transport layer serializes them to JSON
//! as-is.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dividends::{DividendRecord, DividendStatus};

/// Detected payment periodicity for a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Monthly,
    Quarterly,
    Annual,
    Irregular,
    Unknown,
}

impl Cadence {
    /// Months between payments when the cadence is regular, `None` for
    /// `Irregular`/`Unknown`.
    pub fn stride_months(&self) -> Option<i64> {
        match self {
            Cadence::Monthly => Some(1),
            Cadence::Quarterly => Some(3),
            Cadence::Annual => Some(12),
            Cadence::Irregular | Cadence::Unknown => None,
        }
    }
}

/// Projected aggregate income for one future calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProjection {
    pub year: i32,
    pub month: u32,
    pub projected_income: Decimal,
}

/// One contributing payment behind a chart month's totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionChartDetail {
    pub ticker: String,
    pub account_name: String,
    pub amount: Decimal,
    pub status: DividendStatus,
}

/// One month of the actual-versus-projected chart series.
///
/// `actual` is `None` for future months; past months start at zero and
/// accumulate realized payments. `projected` carries the model output
/// for both directions (retrodiction in the past, forecast in the
/// future).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionChartMonth {
    pub year: i32,
    pub month: u32,
    pub actual: Option<Decimal>,
    pub projected: Decimal,
    pub is_past: bool,
    pub detail: Vec<ProjectionChartDetail>,
}

/// Annualized forecast for a single holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingProjection {
    pub holding_key: String,
    pub ticker: String,
    pub account_name: String,
    pub cadence: Cadence,
    pub next_pay_date: NaiveDate,
    pub next_pay_amount: Decimal,
    pub projected_annual: Decimal,
    pub pct_of_total: Decimal,
}

/// A holding left out of projections, with the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedHolding {
    pub ticker: String,
    pub account_name: String,
    pub reason: String,
}

/// All dividends falling on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub dividends: Vec<DividendRecord>,
}
