use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Expected gap in days between monthly payments.
pub const MONTHLY_GAP_DAYS: i64 = 30;

/// Tolerance in days around the monthly gap.
pub const MONTHLY_GAP_TOLERANCE_DAYS: i64 = 5;

/// Expected gap in days between quarterly payments.
pub const QUARTERLY_GAP_DAYS: i64 = 91;

/// Tolerance in days around the quarterly gap.
pub const QUARTERLY_GAP_TOLERANCE_DAYS: i64 = 15;

/// Expected gap in days between annual payments.
pub const ANNUAL_GAP_DAYS: i64 = 365;

/// Tolerance in days around the annual gap.
pub const ANNUAL_GAP_TOLERANCE_DAYS: i64 = 30;

/// Trailing window in days for the estimator's recent-activity check.
pub const TRAILING_TWELVE_MONTH_DAYS: i64 = 365;

/// Number of most recent paid amounts averaged by the estimator.
pub const RECENT_AVERAGE_WINDOW: usize = 4;

/// Maximum distance in days from the year-ago target date for the
/// growth lookup to be accepted.
pub const YEAR_AGO_TOLERANCE_DAYS: i64 = 60;

/// Cap applied to raw year-over-year growth in either direction.
pub const GROWTH_CAP: Decimal = dec!(0.30);

/// Weight applied to capped growth when blending with the recent average.
pub const GROWTH_DAMPING: Decimal = dec!(0.5);

/// Number of months in the projection chart window (12 past, 12 future).
pub const CHART_WINDOW_MONTHS: usize = 24;

/// Number of past months (current month included) in the chart window.
pub const CHART_PAST_MONTHS: usize = 12;

/// Number of months in the annualized holding projection horizon,
/// beginning with the current month.
pub const ANNUAL_HORIZON_MONTHS: i64 = 12;
