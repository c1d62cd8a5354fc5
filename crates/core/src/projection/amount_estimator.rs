//! Blended next-payment amount estimation.

use chrono::{Duration, Months};
use rust_decimal::Decimal;

use crate::dividends::DividendRecord;

use super::projection_constants::{
    GROWTH_CAP, GROWTH_DAMPING, RECENT_AVERAGE_WINDOW, TRAILING_TWELVE_MONTH_DAYS,
    YEAR_AGO_TOLERANCE_DAYS,
};

/// Forecasts the next payment amount for one holding from its paid
/// history.
///
/// The estimate blends the average of the most recent payments with
/// capped year-over-year growth at half weight, which dampens
/// single-payment volatility. Holdings with fewer than two payments in
/// the trailing twelve months fall back to the most recent paid amount.
///
/// The trailing window is anchored at the most recent pay date, so the
/// estimate is a pure function of the records and reproducible in
/// backtests.
pub fn blended_projection_amount(paid_records: &[&DividendRecord]) -> Decimal {
    if paid_records.is_empty() {
        return Decimal::ZERO;
    }
    if paid_records.len() == 1 {
        return paid_records[0].total_amount;
    }

    let mut chronological: Vec<&DividendRecord> = paid_records.to_vec();
    chronological.sort_by_key(|record| record.pay_date);
    let Some(most_recent) = chronological.last().copied() else {
        return Decimal::ZERO;
    };

    let window_start = most_recent.pay_date - Duration::days(TRAILING_TWELVE_MONTH_DAYS);
    let recent_count = chronological
        .iter()
        .filter(|record| record.pay_date >= window_start)
        .count();
    if recent_count < 2 {
        // Sparse or inactive holding; growth math would be noise.
        return most_recent.total_amount;
    }

    let window = &chronological[chronological.len().saturating_sub(RECENT_AVERAGE_WINDOW)..];
    let window_sum: Decimal = window.iter().map(|record| record.total_amount).sum();
    let recent_avg = window_sum / Decimal::from(window.len() as u64);

    let Some(year_ago_target) = most_recent.pay_date.checked_sub_months(Months::new(12)) else {
        return recent_avg;
    };
    let year_ago = chronological
        .iter()
        .min_by_key(|record| {
            record
                .pay_date
                .signed_duration_since(year_ago_target)
                .num_days()
                .abs()
        })
        .filter(|record| {
            record
                .pay_date
                .signed_duration_since(year_ago_target)
                .num_days()
                .abs()
                <= YEAR_AGO_TOLERANCE_DAYS
        });
    let Some(year_ago) = year_ago else {
        return recent_avg;
    };
    if year_ago.total_amount.is_zero() {
        return recent_avg;
    }

    let raw_growth =
        (most_recent.total_amount - year_ago.total_amount) / year_ago.total_amount;
    let capped_growth = raw_growth.clamp(-GROWTH_CAP, GROWTH_CAP);

    recent_avg * (Decimal::ONE + capped_growth * GROWTH_DAMPING)
}
