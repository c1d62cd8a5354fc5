//! Actual-versus-projected chart series with retrodiction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::dividends::{group_by_holding, DividendRecord, DividendStatus};
use crate::utils::{absolute_month, first_day_of_absolute_month, year_month_from_absolute};

use super::amount_estimator::blended_projection_amount;
use super::cadence_detector::detect_cadence;
use super::projection_constants::{CHART_PAST_MONTHS, CHART_WINDOW_MONTHS};
use super::projection_model::{ProjectionChartDetail, ProjectionChartMonth};

/// Builds the 24-month chart series: 12 past months (current month
/// included) and 12 future months.
///
/// Past months carry realized income in `actual` plus what the model
/// would have predicted in `projected`, recomputed from only the
/// records available before each month (retrodiction). Future months
/// carry the forward projection, preferring amounts the user has
/// already logged as scheduled or projected over the model's estimate.
pub fn build_chart_data(records: &[DividendRecord], today: NaiveDate) -> Vec<ProjectionChartMonth> {
    let current_abs = absolute_month(today);
    let start_abs = current_abs - (CHART_PAST_MONTHS as i64 - 1);

    let mut slots: Vec<ProjectionChartMonth> = (0..CHART_WINDOW_MONTHS as i64)
        .map(|index| {
            let slot_abs = start_abs + index;
            let (year, month) = year_month_from_absolute(slot_abs);
            let is_past = slot_abs <= current_abs;
            ProjectionChartMonth {
                year,
                month,
                actual: is_past.then_some(Decimal::ZERO),
                projected: Decimal::ZERO,
                is_past,
                detail: Vec::new(),
            }
        })
        .collect();

    // Realized income lands in the past slots.
    for record in records.iter().filter(|record| record.is_paid()) {
        let record_abs = absolute_month(record.pay_date);
        if record_abs < start_abs || record_abs > current_abs {
            continue;
        }
        let slot = &mut slots[(record_abs - start_abs) as usize];
        if let Some(actual) = slot.actual.as_mut() {
            *actual += record.total_amount;
        }
        slot.detail.push(ProjectionChartDetail {
            ticker: record.ticker.clone(),
            account_name: record.account_name.clone(),
            amount: record.total_amount,
            status: DividendStatus::Paid,
        });
    }

    for holding_records in group_by_holding(records).values() {
        let Some(first) = holding_records.first() else {
            continue;
        };
        let ticker = first.ticker.as_str();
        let account_name = first.account_name.as_str();

        let paid: Vec<&DividendRecord> = holding_records
            .iter()
            .filter(|record| record.is_paid())
            .copied()
            .collect();

        // Forward-looking records, summed per month, take precedence
        // over the model in future slots.
        let mut logged_by_month: BTreeMap<i64, Decimal> = BTreeMap::new();
        for record in holding_records
            .iter()
            .filter(|record| record.status.is_forward_looking())
        {
            *logged_by_month
                .entry(absolute_month(record.pay_date))
                .or_insert(Decimal::ZERO) += record.total_amount;
        }

        project_future_slots(
            &mut slots,
            start_abs,
            &paid,
            &logged_by_month,
            ticker,
            account_name,
        );
        retrodict_past_slots(&mut slots, start_abs, &paid, ticker, account_name);
    }

    slots
}

/// Fills `projected` for the 12 future slots of one holding.
fn project_future_slots(
    slots: &mut [ProjectionChartMonth],
    start_abs: i64,
    paid: &[&DividendRecord],
    logged_by_month: &BTreeMap<i64, Decimal>,
    ticker: &str,
    account_name: &str,
) {
    let pay_dates: Vec<NaiveDate> = paid.iter().map(|record| record.pay_date).collect();
    let stride = detect_cadence(&pay_dates).stride_months();
    let last_paid_abs = paid
        .iter()
        .map(|record| absolute_month(record.pay_date))
        .max();

    for (index, slot) in slots.iter_mut().enumerate().skip(CHART_PAST_MONTHS) {
        let slot_abs = start_abs + index as i64;

        let amount = if let Some(logged) = logged_by_month.get(&slot_abs) {
            Some(*logged)
        } else if let (Some(stride), Some(last_abs)) = (stride, last_paid_abs) {
            let offset = slot_abs - last_abs;
            (offset > 0 && offset % stride == 0).then(|| blended_projection_amount(paid))
        } else {
            None
        };

        if let Some(amount) = amount {
            slot.projected += amount;
            slot.detail.push(ProjectionChartDetail {
                ticker: ticker.to_string(),
                account_name: account_name.to_string(),
                amount,
                status: DividendStatus::Projected,
            });
        }
    }
}

/// Recomputes, for each past slot, what the model would have predicted
/// from only the payments strictly before that month.
fn retrodict_past_slots(
    slots: &mut [ProjectionChartMonth],
    start_abs: i64,
    paid: &[&DividendRecord],
    ticker: &str,
    account_name: &str,
) {
    for (index, slot) in slots.iter_mut().enumerate().take(CHART_PAST_MONTHS) {
        let slot_abs = start_abs + index as i64;
        let slot_start = first_day_of_absolute_month(slot_abs);

        let prior: Vec<&DividendRecord> = paid
            .iter()
            .filter(|record| record.pay_date < slot_start)
            .copied()
            .collect();
        if prior.len() < 2 {
            continue;
        }

        let prior_dates: Vec<NaiveDate> = prior.iter().map(|record| record.pay_date).collect();
        let Some(stride) = detect_cadence(&prior_dates).stride_months() else {
            continue;
        };
        let Some(last_prior_abs) = prior
            .iter()
            .map(|record| absolute_month(record.pay_date))
            .max()
        else {
            continue;
        };

        let offset = slot_abs - last_prior_abs;
        if offset <= 0 || offset % stride != 0 {
            continue;
        }

        let amount = blended_projection_amount(&prior);
        slot.projected += amount;

        // When the forecast landed on a month that really paid, the paid
        // row already tells the story; avoid a duplicate detail row.
        let has_paid_row = slot.detail.iter().any(|detail| {
            detail.status == DividendStatus::Paid
                && detail.ticker == ticker
                && detail.account_name == account_name
        });
        if !has_paid_row {
            slot.detail.push(ProjectionChartDetail {
                ticker: ticker.to_string(),
                account_name: account_name.to_string(),
                amount,
                status: DividendStatus::Projected,
            });
        }
    }
}
