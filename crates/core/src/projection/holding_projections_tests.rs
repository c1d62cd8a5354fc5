//! Unit tests for the holding ranking and exclusion report.

use super::exclusions::build_excluded;
use super::holding_projections::build_holding_projections;
use super::projection_model::Cadence;
use crate::dividends::{DividendRecord, DividendStatus};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn record(
    account_id: &str,
    ticker: &str,
    date: (i32, u32, u32),
    amount: Decimal,
    status: DividendStatus,
) -> DividendRecord {
    DividendRecord {
        id: format!("{}-{}-{}-{}-{}", account_id, ticker, date.0, date.1, date.2),
        ticker: ticker.to_string(),
        account_id: account_id.to_string(),
        account_name: match account_id {
            "acc-roth" => "Roth IRA".to_string(),
            _ => "Brokerage".to_string(),
        },
        amount_per_share: Decimal::ZERO,
        total_amount: amount,
        pay_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        status,
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[test]
fn quarterly_holding_annualizes_four_payments() {
    let records = vec![
        record("acc-roth", "VTI", (2024, 12, 15), dec!(50), DividendStatus::Paid),
        record("acc-roth", "VTI", (2025, 3, 15), dec!(50), DividendStatus::Paid),
    ];
    let projections = build_holding_projections(&records, today());
    assert_eq!(projections.len(), 1);
    let p = &projections[0];
    assert_eq!(p.ticker, "VTI");
    assert_eq!(p.account_name, "Roth IRA");
    assert_eq!(p.holding_key, "acc-roth:VTI");
    assert_eq!(p.cadence, Cadence::Quarterly);
    // Occurrences at 2025-06, 2025-09, 2025-12 and 2026-03.
    assert_eq!(p.projected_annual, dec!(200));
    assert_eq!(p.next_pay_date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    assert_eq!(p.next_pay_amount, dec!(50));
    assert_eq!(p.pct_of_total, dec!(100));
}

#[test]
fn next_pay_day_is_clamped_to_short_months() {
    // Monthly payer on the 31st; the first horizon occurrence is June,
    // which has 30 days.
    let records = vec![
        record("acc-1", "PSA", (2025, 3, 31), dec!(10), DividendStatus::Paid),
        record("acc-1", "PSA", (2025, 4, 30), dec!(10), DividendStatus::Paid),
        record("acc-1", "PSA", (2025, 5, 31), dec!(10), DividendStatus::Paid),
    ];
    let projections = build_holding_projections(&records, today());
    assert_eq!(projections.len(), 1);
    assert_eq!(
        projections[0].next_pay_date,
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    );
    // Twelve monthly occurrences from June 2025 through May 2026.
    assert_eq!(projections[0].projected_annual, dec!(120));
}

#[test]
fn logged_forward_amounts_enter_the_annual_total() {
    let records = vec![
        record("acc-1", "VTI", (2024, 12, 15), dec!(48), DividendStatus::Paid),
        record("acc-1", "VTI", (2025, 3, 15), dec!(50), DividendStatus::Paid),
        record("acc-1", "VTI", (2025, 6, 16), dec!(55), DividendStatus::Scheduled),
    ];
    let projections = build_holding_projections(&records, today());
    assert_eq!(projections.len(), 1);
    let p = &projections[0];
    // June carries the scheduled 55; September, December and March use
    // the blended estimate of 49.
    assert_eq!(p.projected_annual, dec!(55) + dec!(49) * dec!(3));
    assert_eq!(p.next_pay_amount, dec!(55));
    assert_eq!(p.next_pay_date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
}

#[test]
fn holdings_without_projectable_income_are_dropped() {
    let records = vec![
        // Irregular history.
        record("acc-1", "XYZ", (2025, 1, 1), dec!(10), DividendStatus::Paid),
        record("acc-1", "XYZ", (2025, 2, 20), dec!(10), DividendStatus::Paid),
        record("acc-1", "XYZ", (2025, 4, 1), dec!(10), DividendStatus::Paid),
        // Single payment.
        record("acc-1", "ONE", (2025, 3, 15), dec!(10), DividendStatus::Paid),
        // Annual payer whose next payment falls outside the horizon.
        record("acc-1", "FAR", (2023, 7, 10), dec!(30), DividendStatus::Paid),
        record("acc-1", "FAR", (2024, 7, 10), dec!(30), DividendStatus::Paid),
    ];
    let projections = build_holding_projections(&records, today());
    // FAR's 2025-07 payment lands inside the horizon; only it survives.
    assert_eq!(projections.len(), 1);
    assert_eq!(projections[0].ticker, "FAR");
    assert_eq!(projections[0].projected_annual, dec!(30));
    assert_eq!(projections[0].cadence, Cadence::Annual);
}

#[test]
fn ranking_sorts_by_annual_descending_and_pct_sums_to_100() {
    let records = vec![
        record("acc-1", "VTI", (2025, 4, 15), dec!(30), DividendStatus::Paid),
        record("acc-1", "VTI", (2025, 5, 15), dec!(30), DividendStatus::Paid),
        record("acc-1", "O", (2025, 4, 15), dec!(10), DividendStatus::Paid),
        record("acc-1", "O", (2025, 5, 15), dec!(10), DividendStatus::Paid),
    ];
    let projections = build_holding_projections(&records, today());
    assert_eq!(projections.len(), 2);
    assert_eq!(projections[0].ticker, "VTI");
    assert_eq!(projections[1].ticker, "O");
    assert!(projections[0].projected_annual > projections[1].projected_annual);
    let pct_sum: Decimal = projections.iter().map(|p| p.pct_of_total).sum();
    assert!((pct_sum - dec!(100)).abs() < dec!(0.01), "pct sum {}", pct_sum);
}

#[test]
fn no_paid_dividends_reason() {
    let records = vec![record(
        "acc-1",
        "NEW",
        (2025, 9, 15),
        dec!(12),
        DividendStatus::Scheduled,
    )];
    let excluded = build_excluded(&records);
    assert_eq!(excluded.len(), 1);
    assert_eq!(excluded[0].ticker, "NEW");
    assert_eq!(excluded[0].reason, "No paid dividends logged");
}

#[test]
fn single_payment_reason_carries_the_count() {
    let records = vec![record(
        "acc-1",
        "ONE",
        (2025, 3, 15),
        dec!(10),
        DividendStatus::Paid,
    )];
    let excluded = build_excluded(&records);
    assert_eq!(excluded.len(), 1);
    assert_eq!(excluded[0].reason, "Insufficient history (1 dividend logged)");
}

#[test]
fn holdings_with_enough_history_are_not_excluded() {
    let records = vec![
        record("acc-1", "VTI", (2025, 3, 15), dec!(50), DividendStatus::Paid),
        record("acc-1", "VTI", (2025, 6, 16), dec!(50), DividendStatus::Paid),
        record("acc-1", "ONE", (2025, 3, 15), dec!(10), DividendStatus::Paid),
    ];
    let excluded = build_excluded(&records);
    assert_eq!(excluded.len(), 1);
    assert_eq!(excluded[0].ticker, "ONE");
}
