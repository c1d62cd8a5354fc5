//! Per-holding annualized projections and ranking.

use chrono::{Datelike, NaiveDate};
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use crate::dividends::{group_by_holding, DividendRecord};
use crate::utils::{absolute_month, date_with_clamped_day, year_month_from_absolute};

use super::amount_estimator::blended_projection_amount;
use super::cadence_detector::detect_cadence;
use super::projection_constants::ANNUAL_HORIZON_MONTHS;
use super::projection_model::HoldingProjection;

/// Builds the ranked per-holding forecast over the next twelve months,
/// beginning with the current month.
///
/// Each horizon month contributes either the holding's already-logged
/// scheduled/projected amounts for that month or, on the cadence
/// stride, the blended estimate. Holdings that project nothing are
/// dropped. Results are sorted by descending annual projection, with
/// the holding key as tie-breaker so the ranking is stable.
pub fn build_holding_projections(
    records: &[DividendRecord],
    today: NaiveDate,
) -> Vec<HoldingProjection> {
    let current_abs = absolute_month(today);
    let mut projections: Vec<HoldingProjection> = Vec::new();
    let mut total_annual = Decimal::ZERO;

    for (holding_key, holding_records) in group_by_holding(records) {
        let paid: Vec<&DividendRecord> = holding_records
            .iter()
            .filter(|record| record.is_paid())
            .copied()
            .collect();
        if paid.len() < 2 {
            continue;
        }

        let pay_dates: Vec<NaiveDate> = paid.iter().map(|record| record.pay_date).collect();
        let cadence = detect_cadence(&pay_dates);
        let Some(stride) = cadence.stride_months() else {
            continue;
        };
        let Some(last_paid) = paid.iter().max_by_key(|record| record.pay_date) else {
            continue;
        };
        let last_abs = absolute_month(last_paid.pay_date);

        let mut logged_by_month: BTreeMap<i64, Decimal> = BTreeMap::new();
        for record in holding_records
            .iter()
            .filter(|record| record.status.is_forward_looking())
        {
            *logged_by_month
                .entry(absolute_month(record.pay_date))
                .or_insert(Decimal::ZERO) += record.total_amount;
        }

        let blended = blended_projection_amount(&paid);
        let mut projected_annual = Decimal::ZERO;
        let mut first_nonzero: Option<(i64, Decimal)> = None;

        for offset in 0..ANNUAL_HORIZON_MONTHS {
            let slot_abs = current_abs + offset;
            let amount = match logged_by_month.get(&slot_abs) {
                Some(logged) => *logged,
                None => {
                    let gap = slot_abs - last_abs;
                    if gap > 0 && gap % stride == 0 {
                        blended
                    } else {
                        Decimal::ZERO
                    }
                }
            };
            if amount.is_zero() {
                continue;
            }
            projected_annual += amount;
            if first_nonzero.is_none() {
                first_nonzero = Some((slot_abs, amount));
            }
        }

        if projected_annual.is_zero() {
            continue;
        }
        let Some((next_abs, next_pay_amount)) = first_nonzero else {
            continue;
        };
        let (next_year, next_month) = year_month_from_absolute(next_abs);
        let next_pay_date =
            date_with_clamped_day(next_year, next_month, last_paid.pay_date.day());

        projections.push(HoldingProjection {
            holding_key,
            ticker: last_paid.ticker.clone(),
            account_name: last_paid.account_name.clone(),
            cadence,
            next_pay_date,
            next_pay_amount,
            projected_annual,
            pct_of_total: Decimal::ZERO,
        });
        total_annual += projected_annual;
    }

    if total_annual > Decimal::zero() {
        for projection in projections.iter_mut() {
            projection.pct_of_total = projection.projected_annual / total_annual * dec!(100);
        }
    }

    projections.sort_by(|a, b| {
        b.projected_annual
            .cmp(&a.projected_annual)
            .then_with(|| a.holding_key.cmp(&b.holding_key))
    });
    projections
}
