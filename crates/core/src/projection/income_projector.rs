//! Forward monthly income projection.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

use crate::dividends::{group_by_holding, DividendRecord};
use crate::utils::{absolute_month, year_month_from_absolute};

use super::cadence_detector::detect_cadence;
use super::projection_model::MonthlyProjection;

/// Projects aggregate income `months_forward` months into the future.
///
/// Returns exactly `months_forward` slots in chronological order,
/// starting with the month after `today`. Each holding with at least
/// two paid records and a regular cadence repeats its last paid amount
/// on its cadence stride. Months already covered by the holding's
/// scheduled or projected records are skipped for that holding, so
/// already-logged forward entries are never double counted.
pub fn project_monthly_income(
    records: &[DividendRecord],
    months_forward: u32,
    today: NaiveDate,
) -> Vec<MonthlyProjection> {
    let current_abs = absolute_month(today);
    let mut slots: Vec<MonthlyProjection> = (1..=months_forward as i64)
        .map(|offset| {
            let (year, month) = year_month_from_absolute(current_abs + offset);
            MonthlyProjection {
                year,
                month,
                projected_income: Decimal::ZERO,
            }
        })
        .collect();

    if records.len() < 2 {
        return slots;
    }

    for holding_records in group_by_holding(records).values() {
        let paid: Vec<&DividendRecord> = holding_records
            .iter()
            .filter(|record| record.is_paid())
            .copied()
            .collect();
        if paid.len() < 2 {
            continue;
        }

        let pay_dates: Vec<NaiveDate> = paid.iter().map(|record| record.pay_date).collect();
        let Some(stride) = detect_cadence(&pay_dates).stride_months() else {
            continue;
        };
        let Some(last_paid) = paid.iter().max_by_key(|record| record.pay_date) else {
            continue;
        };
        let last_abs = absolute_month(last_paid.pay_date);
        let last_amount = last_paid.total_amount;

        // Months this holding already covers with forward-looking records.
        let existing_months: BTreeSet<i64> = holding_records
            .iter()
            .filter(|record| record.status.is_forward_looking())
            .map(|record| absolute_month(record.pay_date))
            .collect();

        for (index, slot) in slots.iter_mut().enumerate() {
            let slot_abs = current_abs + 1 + index as i64;
            if existing_months.contains(&slot_abs) {
                continue;
            }
            let offset = slot_abs - last_abs;
            if offset > 0 && offset % stride == 0 {
                slot.projected_income += last_amount;
            }
        }
    }

    slots
}
